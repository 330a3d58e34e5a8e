//! Support ticket triage core.
//!
//! A ticket flows through [`retriever::retrieve`] (best SOP by keyword
//! overlap), [`risk::assess_risk`] (trigger scan plus SOP category) and,
//! when a SOP matched, [`draft::DraftGenerator`]. [`triage::TriageEngine`]
//! composes the three into a [`ticket::TriageResult`].

pub mod draft;
pub mod error;
pub mod retriever;
pub mod risk;
pub mod sop;
pub mod ticket;
pub mod triage;

pub use draft::DraftGenerator;
pub use error::{CatalogError, ErrorReport};
pub use sop::{Sop, SopCategory, SopRepository};
pub use ticket::{Draft, DraftAudience, RiskLevel, SuggestedAction, Ticket, TriageResult};
pub use triage::TriageEngine;
