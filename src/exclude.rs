use glob::Pattern;

/// Repositories left out of the credits, by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcludeRule {
    /// Exact repository names
    pub exact: Vec<String>,
    /// Glob patterns (e.g. "swift-*")
    pub patterns: Vec<String>,
}

impl ExcludeRule {
    pub fn new(exact: Vec<String>, patterns: Vec<String>) -> Self {
        Self { exact, patterns }
    }

    /// The rule (exact name or pattern) that excludes `name`.
    pub fn find_match(&self, name: &str) -> Option<String> {
        if let Some(exact) = self.exact.iter().find(|exact| *exact == name) {
            return Some(format!("exact: {}", exact));
        }

        for pattern_str in &self.patterns {
            match Pattern::new(pattern_str) {
                Ok(pattern) if pattern.matches(name) => {
                    return Some(format!("pattern: {}", pattern_str));
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("Ignoring invalid exclude pattern {:?}: {}", pattern_str, e),
            }
        }

        None
    }

    /// Combine two rules, keeping the first occurrence of each entry.
    pub fn merged(mut self, other: ExcludeRule) -> Self {
        for name in other.exact {
            if !self.exact.contains(&name) {
                self.exact.push(name);
            }
        }
        for pattern in other.patterns {
            if !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
        self
    }
}
