use std::fmt;

use serde::{Deserialize, Serialize};

/// Intent reported when no SOP scored above zero.
pub const NO_MATCH_INTENT: &str = "NO MATCH FOUND";

/// Shown in place of a draft when a high-risk ticket matched no SOP.
pub const MANUAL_REVIEW_PLACEHOLDER: &str = "Manual Review Required";

/// Lifecycle state of a ticket. Triage reads it but never advances it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    New,
}

/// An incoming customer support message. Owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    pub id: String,
    pub customer_id: String,
    /// Free-form message body as written by the customer
    pub content: String,
    #[serde(default)]
    pub status: TicketStatus,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            content: content.into(),
            status: TicketStatus::New,
        }
    }
}

/// Risk tier driving routing.
///
/// `Medium` is part of the result schema but no rule currently emits it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        })
    }
}

/// Closed set of handling actions a triage decision can recommend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    RouteToSpecialist,
    DraftReply,
    ManualTriage,
}

impl SuggestedAction {
    pub fn label(self) -> &'static str {
        match self {
            SuggestedAction::RouteToSpecialist => "ROUTE TO SPECIALIST (AML TEAM)",
            SuggestedAction::DraftReply => "DRAFT REPLY (HUMAN REVIEW)",
            SuggestedAction::ManualTriage => "MANUAL TRIAGE",
        }
    }
}

impl fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who a draft may be shown to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftAudience {
    /// Reply text that may be sent after human review
    Customer,
    /// Handling note for staff; must never reach the customer
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub audience: DraftAudience,
    pub text: String,
}

/// The triage decision for one ticket. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageResult {
    pub ticket_id: String,
    /// Title of the matched SOP, or [`NO_MATCH_INTENT`]
    pub intent: String,
    pub risk_level: RiskLevel,
    pub suggested_action: SuggestedAction,
    /// Present if and only if a SOP matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<Draft>,
    pub relevant_sop: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sop_id: Option<String>,
}

impl TriageResult {
    /// Draft text as a reviewer should see it.
    ///
    /// Specialist routes without a matched SOP have no draft; they render the
    /// manual review placeholder instead.
    pub fn rendered_draft(&self) -> Option<&str> {
        match (&self.draft, self.suggested_action) {
            (Some(draft), _) => Some(draft.text.as_str()),
            (None, SuggestedAction::RouteToSpecialist) => Some(MANUAL_REVIEW_PLACEHOLDER),
            (None, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(action: SuggestedAction, draft: Option<Draft>) -> TriageResult {
        TriageResult {
            ticket_id: "TKT-1".to_string(),
            intent: NO_MATCH_INTENT.to_string(),
            risk_level: RiskLevel::High,
            suggested_action: action,
            draft,
            relevant_sop: NO_MATCH_INTENT.to_string(),
            sop_id: None,
        }
    }

    #[test]
    fn new_ticket_starts_in_new_status() {
        let ticket = Ticket::new("TKT-1", "CUST-1", "hello");
        assert_eq!(ticket.status, TicketStatus::New);
    }

    #[test]
    fn action_labels_match_routing_vocabulary() {
        assert_eq!(
            SuggestedAction::RouteToSpecialist.to_string(),
            "ROUTE TO SPECIALIST (AML TEAM)"
        );
        assert_eq!(
            SuggestedAction::DraftReply.to_string(),
            "DRAFT REPLY (HUMAN REVIEW)"
        );
        assert_eq!(SuggestedAction::ManualTriage.to_string(), "MANUAL TRIAGE");
    }

    #[test]
    fn risk_level_serializes_uppercase() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "HIGH");
        assert_eq!(serde_json::to_value(RiskLevel::Low).unwrap(), "LOW");
        assert!(RiskLevel::High > RiskLevel::Low);
    }

    #[test]
    fn specialist_route_without_draft_renders_placeholder() {
        let r = result(SuggestedAction::RouteToSpecialist, None);
        assert_eq!(r.rendered_draft(), Some(MANUAL_REVIEW_PLACEHOLDER));
        assert!(r.draft.is_none());
    }

    #[test]
    fn manual_triage_renders_nothing() {
        let r = result(SuggestedAction::ManualTriage, None);
        assert_eq!(r.rendered_draft(), None);
    }

    #[test]
    fn missing_draft_is_omitted_from_json() {
        let r = result(SuggestedAction::ManualTriage, None);
        let value = serde_json::to_value(&r).unwrap();
        assert!(value.get("draft").is_none());
        assert_eq!(value["suggested_action"], "manual_triage");
    }
}
