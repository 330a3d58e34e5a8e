use serde::Serialize;

use crate::sop::Sop;

/// Keyword overlap between one SOP and a ticket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SopScore {
    pub sop_id: String,
    pub title: String,
    pub score: usize,
    pub matched_keywords: Vec<String>,
}

/// Number of the SOP's keywords contained in `text_lower`.
///
/// Plain substring containment: "late" also counts inside "translate".
pub fn score(text_lower: &str, sop: &Sop) -> usize {
    matched_keywords(text_lower, sop).len()
}

/// The SOP's keywords contained in `text_lower`, in keyword order.
pub fn matched_keywords<'a>(text_lower: &str, sop: &'a Sop) -> Vec<&'a str> {
    sop.keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| text_lower.contains(keyword))
        .collect()
}

/// Best-scoring SOP for `text`, or `None` when no keyword matched anywhere.
///
/// Ties go to the SOP that comes first in `sops`.
pub fn retrieve<'a>(text: &str, sops: &'a [Sop]) -> Option<&'a Sop> {
    let text_lower = text.to_lowercase();
    let mut best: Option<&Sop> = None;
    let mut max_score = 0;

    for sop in sops {
        let s = score(&text_lower, sop);
        tracing::debug!(sop_id = %sop.id, score = s, "scored SOP");
        if s > max_score {
            max_score = s;
            best = Some(sop);
        }
    }

    best
}

/// Per-SOP scores in catalog order, with the keywords that hit.
pub fn rank(text: &str, sops: &[Sop]) -> Vec<SopScore> {
    let text_lower = text.to_lowercase();
    sops.iter()
        .map(|sop| {
            let matched_keywords: Vec<String> = matched_keywords(&text_lower, sop)
                .into_iter()
                .map(str::to_string)
                .collect();
            SopScore {
                sop_id: sop.id.clone(),
                title: sop.title.clone(),
                score: matched_keywords.len(),
                matched_keywords,
            }
        })
        .collect()
}
