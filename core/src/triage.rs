use serde::Serialize;

use crate::draft::DraftGenerator;
use crate::retriever::{self, SopScore};
use crate::risk;
use crate::sop::SopRepository;
use crate::ticket::{NO_MATCH_INTENT, RiskLevel, SuggestedAction, Ticket, TriageResult};

/// Why a ticket was triaged the way it was.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TriageExplanation {
    pub scores: Vec<SopScore>,
    pub triggers: Vec<&'static str>,
}

/// Composes retrieval, risk assessment and drafting into one decision per ticket.
///
/// Holds no mutable state: `process` is a pure function of the ticket and
/// the injected catalog.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    repository: SopRepository,
    drafts: DraftGenerator,
}

impl TriageEngine {
    pub fn new(repository: SopRepository, drafts: DraftGenerator) -> Self {
        Self { repository, drafts }
    }

    pub fn repository(&self) -> &SopRepository {
        &self.repository
    }

    pub fn company_name(&self) -> &str {
        self.drafts.company_name()
    }

    pub fn process(&self, ticket: &Ticket) -> TriageResult {
        let sop = retriever::retrieve(&ticket.content, self.repository.all_sops());
        let risk_level = risk::assess_risk(&ticket.content, sop);

        let (suggested_action, draft) = match (risk_level, sop) {
            (RiskLevel::High, sop) => (
                SuggestedAction::RouteToSpecialist,
                sop.map(|s| self.drafts.generate(ticket, s)),
            ),
            (_, Some(s)) => (
                SuggestedAction::DraftReply,
                Some(self.drafts.generate(ticket, s)),
            ),
            (_, None) => (SuggestedAction::ManualTriage, None),
        };

        let intent = sop
            .map(|s| s.title.clone())
            .unwrap_or_else(|| NO_MATCH_INTENT.to_string());

        tracing::info!(
            ticket_id = %ticket.id,
            content_len = ticket.content.len(),
            intent = %intent,
            risk = %risk_level,
            action = %suggested_action,
            "ticket triaged"
        );

        TriageResult {
            ticket_id: ticket.id.clone(),
            relevant_sop: intent.clone(),
            intent,
            risk_level,
            suggested_action,
            draft,
            sop_id: sop.map(|s| s.id.clone()),
        }
    }

    pub fn process_batch(&self, tickets: &[Ticket]) -> Vec<TriageResult> {
        tickets.iter().map(|ticket| self.process(ticket)).collect()
    }

    pub fn explain(&self, ticket: &Ticket) -> TriageExplanation {
        TriageExplanation {
            scores: retriever::rank(&ticket.content, self.repository.all_sops()),
            triggers: risk::matched_triggers(&ticket.content),
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new(SopRepository::builtin(), DraftGenerator::default())
    }
}
