use crate::sop::{Sop, SopCategory};
use crate::ticket::{Draft, DraftAudience, Ticket};

pub const DEFAULT_COMPANY_NAME: &str = "FinTech Corp";

/// Produces the canned reply or internal note for a matched SOP.
#[derive(Debug, Clone)]
pub struct DraftGenerator {
    company_name: String,
}

impl Default for DraftGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_NAME)
    }
}

impl DraftGenerator {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Template for `sop`'s category. Only call this once a SOP has matched.
    ///
    /// The ticket is accepted for future personalisation; templates do not
    /// read it today.
    pub fn generate(&self, _ticket: &Ticket, sop: &Sop) -> Draft {
        match sop.category {
            SopCategory::Kyc => Draft {
                audience: DraftAudience::Customer,
                text: format!(
                    "Dear Customer,\n\n\
                     Thank you for contacting {}. I see your address document was rejected. \
                     Per our policy, please ensure the document is a utility bill \
                     or bank statement dated within the last 3 months. \
                     Screenshots are not accepted. \
                     Please re-upload a PDF version here: [Link].\n\n\
                     Best,\nSupport Team",
                    self.company_name
                ),
            },
            SopCategory::Aml => Draft {
                audience: DraftAudience::Internal,
                text: "[INTERNAL NOTE]: This is a High Risk AML interaction. \
                       Do not disclose specific triggers. \
                       Request Source of Funds documents immediately."
                    .to_string(),
            },
            SopCategory::General => Draft {
                audience: DraftAudience::Customer,
                text: "Dear Customer,\n\n\
                       I understand you are waiting for your transfer. \
                       Standard processing time is 1-2 business days. \
                       Your transfer is currently within this window \
                       and should arrive by tomorrow. \
                       Thank you for your patience.\n\n\
                       Best,\nSupport Team"
                    .to_string(),
            },
        }
    }
}
