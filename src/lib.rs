pub mod config;
pub mod credits;
pub mod error;
pub mod exclude;
pub mod license;
pub mod opener;
pub mod output;
pub mod references;

// Re-export main types for easy access
pub use credits::{collect_credits, generate_credits, CreditsReport, RunOptions};
pub use error::CreditsError;
pub use exclude::ExcludeRule;
pub use license::{resolve_license, LicenseSource, Outcome, Resolution};
pub use output::{CreditsEntry, DocumentStyle};
pub use references::extract_references;
