//! Policy table deciding which lookup failures are survivable

use crate::error::{Error, ErrorDescription, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Outcome of looking an [`ErrorKind`] up in an [`ErrorPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    NonCritical,
    Fatal,
}

/// Partition of a lookup error into warnings and an aborting failure.
#[derive(Debug, Default)]
pub struct ErrorClassification {
    pub recoverable: Vec<ErrorDescription>,
    pub fatal: Option<Error>,
}

impl ErrorClassification {
    /// Recoverable warnings, or the fatal error if there is one.
    pub fn into_result(self) -> Result<Vec<ErrorDescription>> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(self.recoverable),
        }
    }
}

/// Set of error kinds that downgrade to warnings instead of failing a request.
///
/// Every kind not in the set is fatal. The default table only tolerates
/// `NotFound`.
///
/// # Example
///
/// ```rust
/// use kube_application_detail::{Criticality, ErrorKind, ErrorPolicy};
///
/// let policy = ErrorPolicy::new().with_non_critical(ErrorKind::Forbidden);
/// assert_eq!(policy.criticality(ErrorKind::Forbidden), Criticality::NonCritical);
/// assert_eq!(policy.criticality(ErrorKind::Unauthorized), Criticality::Fatal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ErrorPolicy {
    non_critical: BTreeSet<ErrorKind>,
}

impl ErrorPolicy {
    pub fn new() -> Self {
        Self {
            non_critical: BTreeSet::from([ErrorKind::NotFound]),
        }
    }

    /// A policy under which every error is fatal.
    pub fn strict() -> Self {
        Self {
            non_critical: BTreeSet::new(),
        }
    }

    pub fn with_non_critical(mut self, kind: ErrorKind) -> Self {
        self.non_critical.insert(kind);
        self
    }

    pub fn with_fatal(mut self, kind: ErrorKind) -> Self {
        self.non_critical.remove(&kind);
        self
    }

    /// Parse a policy from YAML
    ///
    /// ```yaml
    /// nonCritical:
    ///   - NotFound
    ///   - Forbidden
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse error policy: {}", e)))
    }

    /// Load a policy from a YAML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read error policy file {:?}: {}", path, e))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn non_critical_kinds(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        self.non_critical.iter().copied()
    }

    pub fn criticality(&self, kind: ErrorKind) -> Criticality {
        if self.non_critical.contains(&kind) {
            Criticality::NonCritical
        } else {
            Criticality::Fatal
        }
    }

    pub fn is_critical(&self, err: &Error) -> bool {
        self.criticality(err.kind()) == Criticality::Fatal
    }

    /// Classify the outcome of a single lookup.
    pub fn classify(&self, err: Option<Error>) -> ErrorClassification {
        let mut classification = ErrorClassification::default();
        if let Some(err) = err {
            if self.is_critical(&err) {
                classification.fatal = Some(err);
            } else {
                classification.recoverable.push(ErrorDescription::from(&err));
            }
        }
        classification
    }

    /// Classify a single lookup error into a fresh warning list.
    pub fn handle_error(&self, err: Option<Error>) -> Result<Vec<ErrorDescription>> {
        self.classify(err).into_result()
    }

    /// Classify one sub-lookup error into a list shared by several lookups.
    ///
    /// Non-critical errors are appended unless an identical description is
    /// already present; a fatal error is returned as-is.
    pub fn append_error(
        &self,
        err: Option<Error>,
        non_critical: &mut Vec<ErrorDescription>,
    ) -> Result<()> {
        for description in self.handle_error(err)? {
            if !non_critical.contains(&description) {
                non_critical.push(description);
            }
        }
        Ok(())
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self::new()
    }
}
