use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::CreditsError;

pub mod pbxproj;

pub use pbxproj::parse_package_references;

/// Extension of an Xcode project bundle.
pub const PROJECT_BUNDLE_EXTENSION: &str = ".xcodeproj";
/// Extension of the manifest stored inside a project bundle.
pub const MANIFEST_EXTENSION: &str = ".pbxproj";
/// Manifest path relative to the project bundle.
pub const MANIFEST_FILE_NAME: &str = "project.pbxproj";
/// Lines of a plain-text input are kept only when they contain this.
pub const HOSTING_URL_PREFIX: &str = "https://github.com";

/// How an input path is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// An `.xcodeproj` bundle; the manifest inside it is parsed.
    ProjectBundle(PathBuf),
    /// A project directory holding an `.xcodeproj` bundle.
    ProjectDirectory { bundle: PathBuf },
    /// A `project.pbxproj` manifest.
    Manifest(PathBuf),
    /// Anything else is read as a list of URLs, one per line.
    PlainText(PathBuf),
}

impl InputKind {
    pub fn classify(path: &Path) -> InputKind {
        let name = path.to_string_lossy();

        if name.trim_end_matches('/').ends_with(PROJECT_BUNDLE_EXTENSION) {
            return InputKind::ProjectBundle(path.to_path_buf());
        }

        if path.is_dir() {
            match find_project_bundle(path) {
                Some(bundle) => return InputKind::ProjectDirectory { bundle },
                None => {
                    warn!(
                        "No {} bundle found in {}, reading it as plain text",
                        PROJECT_BUNDLE_EXTENSION,
                        path.display()
                    );
                    return InputKind::PlainText(path.to_path_buf());
                }
            }
        }

        if name.ends_with(MANIFEST_EXTENSION) {
            return InputKind::Manifest(path.to_path_buf());
        }

        InputKind::PlainText(path.to_path_buf())
    }
}

/// Extract dependency repository URLs from a project directory, an
/// `.xcodeproj` bundle, a `project.pbxproj` manifest or a plain-text list.
///
/// Unreadable inputs are logged and yield no references.
pub fn extract_references(path: &Path) -> Vec<String> {
    match InputKind::classify(path) {
        InputKind::ProjectBundle(bundle) | InputKind::ProjectDirectory { bundle } => {
            extract_references(&bundle.join(MANIFEST_FILE_NAME))
        }
        InputKind::Manifest(manifest) => {
            info!("Reading manifest {}", manifest.display());
            read_or_empty(&manifest)
                .map(|content| parse_package_references(&content))
                .unwrap_or_default()
        }
        InputKind::PlainText(file) => {
            if !path.is_dir() {
                warn!(
                    "{} is not a {} manifest, reading it as plain text",
                    file.display(),
                    MANIFEST_EXTENSION
                );
            }
            read_or_empty(&file)
                .map(|content| parse_plain_text(&content))
                .unwrap_or_default()
        }
    }
}

/// Every line mentioning the hosting service, trimmed, in file order.
pub fn parse_plain_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.contains(HOSTING_URL_PREFIX))
        .map(|line| line.trim().to_string())
        .collect()
}

/// First `.xcodeproj` under `dir`, walking depth-first in lexical order.
/// Entries whose name starts with `.` are neither matched nor entered.
fn find_project_bundle(dir: &Path) -> Option<PathBuf> {
    let bundle = WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot list {}: {}", dir.display(), e);
                None
            }
        })
        .find(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .ends_with(PROJECT_BUNDLE_EXTENSION)
        })?;

    debug!("Using project bundle {}", bundle.path().display());
    Some(bundle.into_path())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn read_or_empty(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(source) => {
            let err = CreditsError::UnreadableInput {
                path: path.to_path_buf(),
                source,
            };
            warn!("{}", err);
            None
        }
    }
}
