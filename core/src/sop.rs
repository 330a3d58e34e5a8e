use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CatalogError;

/// Handling category of a SOP. Selects the draft template and feeds risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SopCategory {
    /// Know-your-customer document checks
    Kyc,
    /// Anti-money-laundering holds and reviews
    Aml,
    General,
}

/// A Standard Operating Procedure: a named policy with trigger keywords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sop {
    pub id: String,
    pub title: String,
    pub category: SopCategory,
    /// Lowercase phrases matched as substrings of the lowercased ticket text
    pub keywords: Vec<String>,
    pub policy_text: String,
}

impl Sop {
    pub fn new(
        id: &str,
        title: &str,
        category: SopCategory,
        keywords: &[&str],
        policy_text: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            policy_text: policy_text.to_string(),
        }
    }
}

/// On-disk catalog shape: `{"sops": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SopCatalog {
    pub sops: Vec<Sop>,
}

/// Ordered, read-only collection of SOPs shared by every triage call.
///
/// Order matters: on equal scores the retriever keeps the earlier SOP.
#[derive(Debug, Clone)]
pub struct SopRepository {
    sops: Vec<Sop>,
}

impl SopRepository {
    /// Build a repository, rejecting catalogs the retriever cannot use.
    pub fn new(sops: Vec<Sop>) -> Result<Self, CatalogError> {
        validate(&sops)?;
        Ok(Self { sops })
    }

    /// The reference compliance procedures.
    pub fn builtin() -> Self {
        Self {
            sops: builtin_sops(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: SopCatalog = serde_json::from_str(raw)?;
        Self::new(catalog.sops)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repository = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            sop_count = repository.len(),
            "loaded SOP catalog"
        );
        Ok(repository)
    }

    pub fn all_sops(&self) -> &[Sop] {
        &self.sops
    }

    pub fn get(&self, id: &str) -> Option<&Sop> {
        self.sops.iter().find(|sop| sop.id == id)
    }

    pub fn len(&self) -> usize {
        self.sops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sops.is_empty()
    }

    /// SHA-256 hex digest of the ordered catalog's JSON encoding.
    pub fn fingerprint(&self) -> String {
        // Strings, string lists and unit variants only: serialisation cannot
        // fail, and field order is fixed by the struct definition.
        let bytes = serde_json::to_vec(&self.sops).expect("SOP serialisation is infallible");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }
}

fn validate(sops: &[Sop]) -> Result<(), CatalogError> {
    if sops.is_empty() {
        return Err(CatalogError::invalid(
            "<catalog>",
            "sops",
            "catalog must contain at least one SOP",
        ));
    }

    let mut seen = HashSet::new();
    for sop in sops {
        if sop.id.trim().is_empty() {
            return Err(CatalogError::invalid(&sop.title, "id", "id must not be empty"));
        }
        if !seen.insert(sop.id.as_str()) {
            return Err(CatalogError::invalid(&sop.id, "id", "duplicate SOP id"));
        }
        if sop.title.trim().is_empty() {
            return Err(CatalogError::invalid(&sop.id, "title", "title must not be empty"));
        }
        if sop.keywords.is_empty() {
            return Err(CatalogError::invalid(
                &sop.id,
                "keywords",
                "at least one keyword is required",
            ));
        }
        for keyword in &sop.keywords {
            if keyword.trim().is_empty() {
                return Err(CatalogError::invalid(
                    &sop.id,
                    "keywords",
                    "keywords must not be blank",
                ));
            }
            if *keyword != keyword.to_lowercase() {
                return Err(CatalogError::invalid(
                    &sop.id,
                    "keywords",
                    format!("keyword '{keyword}' must be lowercase"),
                ));
            }
        }
    }
    Ok(())
}

fn builtin_sops() -> Vec<Sop> {
    vec![
        Sop::new(
            "SOP-001",
            "KYC - Address Verification Failure",
            SopCategory::Kyc,
            &["address", "proof", "utility bill", "verify", "rejected"],
            "If address doc is rejected: 1. Check if doc is < 3 months old. \
             2. Check if name matches. 3. If blurry, request re-upload. \
             4. Do NOT accept screenshots.",
        ),
        Sop::new(
            "SOP-002",
            "AML - Large Transaction Hold",
            SopCategory::Aml,
            &["hold", "frozen", "large transfer", "audit", "source of funds"],
            "CRITICAL: Do not give specific reasons for AML holds. \
             State: 'Your transfer is under standard review.' \
             Request: Source of Funds (SOF) documents (Payslip, Sale of Property deed).",
        ),
        Sop::new(
            "SOP-003",
            "General - Transfer Delay",
            SopCategory::General,
            &["where is my money", "late", "delay", "transfer", "waiting"],
            "Standard processing time is 1-2 business days. If within timeframe, \
             reassure customer. If > 2 days, check banking partner status.",
        ),
    ]
}
