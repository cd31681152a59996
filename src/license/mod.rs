use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CreditsError;
use crate::exclude::ExcludeRule;

pub mod fetcher;

pub use fetcher::{HttpLicenseSource, HttpReply, LicenseSource};

pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";
pub const BRANCHES: [&str; 2] = ["main", "master"];
pub const SUFFIXES: [&str; 3] = ["", "txt", "md"];

/// Owner and repository parsed from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
}

impl RepositoryRef {
    /// Parse `https://github.com/<owner>/<repo>[.git][/...]`.
    pub fn parse(reference: &str) -> Result<Self, CreditsError> {
        let segments = path_segments(reference)
            .ok_or_else(|| CreditsError::MalformedReference(reference.to_string()))?;

        match segments.as_slice() {
            [owner, repo, ..] => Ok(Self {
                owner: owner.to_string(),
                repo: repo.strip_suffix(".git").unwrap_or(*repo).to_string(),
            }),
            _ => Err(CreditsError::MalformedReference(reference.to_string())),
        }
    }

    /// License file locations in the order they are tried.
    pub fn candidates(&self) -> Vec<LicenseCandidate> {
        BRANCHES
            .iter()
            .flat_map(|branch| {
                SUFFIXES.iter().map(move |suffix| LicenseCandidate {
                    branch: branch.to_string(),
                    suffix: suffix.to_string(),
                })
            })
            .collect()
    }
}

/// One (branch, file suffix) combination probed for a license file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCandidate {
    pub branch: String,
    pub suffix: String,
}

impl LicenseCandidate {
    pub fn file_name(&self) -> String {
        if self.suffix.is_empty() {
            "LICENSE".to_string()
        } else {
            format!("LICENSE.{}", self.suffix)
        }
    }

    pub fn url(&self, repository: &RepositoryRef) -> String {
        format!(
            "https://{}/{}/{}/{}/{}",
            RAW_CONTENT_HOST,
            repository.owner,
            repository.repo,
            self.branch,
            self.file_name()
        )
    }
}

/// Terminal outcome of resolving one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { text: String, url: String },
    Absent,
    Invalid,
    Excluded,
}

impl Resolution {
    pub fn outcome(&self) -> Outcome {
        match self {
            Resolution::Found { .. } => Outcome::Found,
            Resolution::Absent => Outcome::Absent,
            Resolution::Invalid => Outcome::Invalid,
            Resolution::Excluded => Outcome::Excluded,
        }
    }
}

/// `Resolution` without its payload, for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Found,
    Absent,
    Invalid,
    Excluded,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Found => "found",
            Outcome::Absent => "absent",
            Outcome::Invalid => "invalid",
            Outcome::Excluded => "excluded",
        }
    }
}

/// Name shown for a reference: its last path segment.
pub fn repository_name(reference: &str) -> String {
    path_segments(reference)
        .and_then(|segments| segments.last().map(|s| s.to_string()))
        .unwrap_or_else(|| reference.to_string())
}

/// Fetch the license text for one repository URL.
///
/// Candidates are tried one at a time and the first HTTP 200 with a
/// non-empty UTF-8 body wins. Every failure is reported as a `Resolution`.
pub fn resolve_license(
    reference: &str,
    excludes: &ExcludeRule,
    source: &dyn LicenseSource,
) -> Resolution {
    let name = repository_name(reference);
    if let Some(rule) = excludes.find_match(&name) {
        info!("{}:\tExcluded ({})", name, rule);
        return Resolution::Excluded;
    }

    info!("Fetching license for {}", name);
    let repository = match RepositoryRef::parse(reference) {
        Ok(repository) => repository,
        Err(e) => {
            warn!("{}:\t{}", name, e);
            return Resolution::Invalid;
        }
    };

    for candidate in repository.candidates() {
        let url = candidate.url(&repository);
        debug!("{}:\ttrying {}", name, url);

        match source.get(&url) {
            Ok(reply) => {
                if let Some(text) = license_text(reply, &url, &name) {
                    info!("{}:\tLicense fetched, length {}", name, text.chars().count());
                    return Resolution::Found { text, url };
                }
            }
            Err(e) => warn!("{}:\t{}", name, e),
        }
    }

    warn!("{}:\t{}", name, CreditsError::AllCandidatesExhausted(reference.to_string()));
    Resolution::Absent
}

fn license_text(reply: HttpReply, url: &str, name: &str) -> Option<String> {
    if reply.status != 200 {
        let err = CreditsError::NotFound { url: url.to_string(), status: reply.status };
        debug!("{}:\t{}", name, err);
        return None;
    }

    match String::from_utf8(reply.body) {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => {
            debug!("{}:\t{} returned an empty body", name, url);
            None
        }
        Err(_) => {
            debug!("{}:\t{} is not valid UTF-8", name, url);
            None
        }
    }
}

/// Non-empty path segments of a URL, or `None` when it has no scheme.
fn path_segments(reference: &str) -> Option<Vec<&str>> {
    let (_, rest) = reference.trim().split_once("://")?;
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let path = rest.split_once('/').map(|(_, path)| path).unwrap_or_default();
    Some(path.split('/').filter(|s| !s.is_empty()).collect())
}
