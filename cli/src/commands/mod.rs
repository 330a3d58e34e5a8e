pub mod catalog;
pub mod demo;
pub mod sops;
pub mod triage;

use opsengine_core::TriageResult;

/// Human-readable block for one decision, as a reviewer would read it.
pub fn render_result_text(result: &TriageResult) -> String {
    let relevant_sop = match result.sop_id.as_deref() {
        Some(sop_id) => format!("{} [{sop_id}]", result.relevant_sop),
        None => result.relevant_sop.clone(),
    };
    let mut out = format!(
        ">>> TICKET {}\n\
         Detected Intent : {}\n\
         Risk Level      : {}\n\
         Relevant SOP    : {}\n\
         Action          : {}\n",
        result.ticket_id, result.intent, result.risk_level, relevant_sop, result.suggested_action,
    );
    if let Some(draft) = result.rendered_draft() {
        out.push_str("--- Generated Draft ---\n");
        out.push_str(draft);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use opsengine_core::ticket::{MANUAL_REVIEW_PLACEHOLDER, NO_MATCH_INTENT};
    use opsengine_core::{Ticket, TriageEngine};

    use super::render_result_text;

    #[test]
    fn text_block_shows_labels_and_draft() {
        let result = TriageEngine::default().process(&Ticket::new(
            "TKT-102",
            "CUST-B",
            "Where is my money? I sent it 4 hours ago.",
        ));
        let text = render_result_text(&result);
        assert!(text.starts_with(">>> TICKET TKT-102\n"));
        assert!(text.contains("Relevant SOP    : General - Transfer Delay [SOP-003]\n"));
        assert!(text.contains("Risk Level      : LOW"));
        assert!(text.contains("Action          : DRAFT REPLY (HUMAN REVIEW)"));
        assert!(text.contains("--- Generated Draft ---"));
    }

    #[test]
    fn manual_triage_has_no_draft_section() {
        let result = TriageEngine::default().process(&Ticket::new("T", "C", "hello"));
        let text = render_result_text(&result);
        assert!(text.contains(&format!("Relevant SOP    : {NO_MATCH_INTENT}\n")));
        assert!(text.contains("MANUAL TRIAGE"));
        assert!(!text.contains("Generated Draft"));
    }

    #[test]
    fn unmatched_specialist_route_shows_placeholder() {
        let ticket = Ticket::new("T", "C", "I will call the police");
        let result = TriageEngine::default().process(&ticket);
        assert!(render_result_text(&result).contains(MANUAL_REVIEW_PLACEHOLDER));
    }
}
