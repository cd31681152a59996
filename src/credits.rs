use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::error::CreditsError;
use crate::exclude::ExcludeRule;
use crate::license::{repository_name, resolve_license, LicenseSource, Outcome, Resolution};
use crate::output::{assemble, persist, CreditsEntry, DocumentStyle};
use crate::references::extract_references;

/// Everything one run needs, passed explicitly to each stage.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub style: DocumentStyle,
    pub excludes: ExcludeRule,
}

/// What happened to one extracted reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceReport {
    pub reference: String,
    pub name: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreditsReport {
    pub generated_at: DateTime<Utc>,
    pub input: PathBuf,
    pub references: Vec<ReferenceReport>,
    /// Reference count per outcome, in first-seen order
    pub summary: IndexMap<String, usize>,
    #[serde(skip)]
    pub entries: Vec<CreditsEntry>,
}

impl CreditsReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.summary.get(outcome.as_str()).copied().unwrap_or(0)
    }
}

/// Extract the references under `input` and resolve each one in turn.
///
/// Per-reference failures never abort the loop; they are recorded in the
/// report and only `Found` references produce an entry.
pub fn collect_credits(
    input: &Path,
    excludes: &ExcludeRule,
    source: &dyn LicenseSource,
) -> CreditsReport {
    let references = extract_references(input);
    info!("Extracted {} URLs", references.len());

    let mut report = CreditsReport {
        generated_at: Utc::now(),
        input: input.to_path_buf(),
        references: Vec::with_capacity(references.len()),
        summary: IndexMap::new(),
        entries: Vec::new(),
    };

    for reference in references {
        let name = repository_name(&reference);
        let resolution = resolve_license(&reference, excludes, source);
        let outcome = resolution.outcome();

        let license_url = match resolution {
            Resolution::Found { text, url } => {
                report.entries.push(CreditsEntry { title: name.clone(), body: text });
                Some(url)
            }
            _ => None,
        };

        *report.summary.entry(outcome.as_str().to_string()).or_insert(0) += 1;
        report.references.push(ReferenceReport { reference, name, outcome, license_url });
    }

    report
}

/// Collect the credits and write the document to `options.output`.
pub fn generate_credits(
    options: &RunOptions,
    source: &dyn LicenseSource,
) -> Result<CreditsReport, CreditsError> {
    let report = collect_credits(&options.input, &options.excludes, source);

    let document = assemble(&report.entries, options.style);
    persist(&document, &options.output)?;
    info!(
        "Wrote {} entries to {}",
        report.entries.len(),
        options.output.display()
    );

    Ok(report)
}

pub fn format_summary(report: &CreditsReport) -> String {
    let mut output = format!("Credits Summary ({} references)\n", report.references.len());
    output.push_str(&format!(
        "{} found  {} absent  {} invalid  {} excluded\n",
        report.count(Outcome::Found),
        report.count(Outcome::Absent),
        report.count(Outcome::Invalid),
        report.count(Outcome::Excluded),
    ));

    for item in report.references.iter().filter(|r| r.outcome != Outcome::Found) {
        output.push_str(&format!("  {:<9} {}\n", item.outcome.as_str(), item.reference));
    }

    output
}
