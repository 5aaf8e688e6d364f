pub mod aggregate;
pub mod claim;
pub mod fetch;

pub use aggregate::{EvidenceBundle, NO_EVIDENCE_FALLBACK};
pub use claim::{ClaimExtraction, LeadingWords};
pub use fetch::{Evidence, EvidenceClient};
