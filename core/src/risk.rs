use crate::sop::{Sop, SopCategory};
use crate::ticket::RiskLevel;

/// Terms that force a ticket to HIGH risk wherever they appear.
///
/// Matched as substrings of the lowercased text, so "sue" also fires on
/// "issue". False positives are accepted here; missed escalations are not.
pub const HIGH_RISK_TRIGGERS: &[&str] = &[
    "fraud", "scam", "police", "lawyer", "sue", "frozen", "aml",
];

/// Classify a ticket. Any trigger wins; otherwise an AML-category match is HIGH.
pub fn assess_risk(text: &str, matched_sop: Option<&Sop>) -> RiskLevel {
    let text_lower = text.to_lowercase();
    if let Some(trigger) = HIGH_RISK_TRIGGERS
        .iter()
        .copied()
        .find(|trigger| text_lower.contains(trigger))
    {
        tracing::debug!(trigger, "high-risk trigger present");
        return RiskLevel::High;
    }

    match matched_sop {
        Some(sop) if sop.category == SopCategory::Aml => RiskLevel::High,
        _ => RiskLevel::Low,
    }
}

/// Every trigger present in `text`, in declaration order.
pub fn matched_triggers(text: &str) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    HIGH_RISK_TRIGGERS
        .iter()
        .copied()
        .filter(|trigger| text_lower.contains(trigger))
        .collect()
}
