//! Field-level validation report.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// A single broken field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Name of the offending field
    #[schema(example = "price")]
    pub field: String,
    /// What the field must be
    #[schema(example = "non-negative number")]
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in one payload, in schema field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Flatten `validator` errors into a report ordered by `fields`.
    ///
    /// Fields missing from `fields` are appended afterwards in name order so
    /// that no violation is dropped.
    pub fn from_validation_errors(errors: &ValidationErrors, fields: &[&str]) -> Self {
        let by_field = errors.field_errors();
        let mut violations = Vec::new();

        for field in fields {
            if let Some(errs) = by_field.get(*field) {
                violations.extend(errs.iter().map(|err| Violation::new(*field, message_of(err))));
            }
        }

        let mut rest: Vec<_> = by_field
            .iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .filter(|(field, _)| !fields.contains(&field.as_str()))
            .collect();
        rest.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, errs) in rest {
            violations.extend(
                errs.iter()
                    .map(|err| Violation::new(field.clone(), message_of(err))),
            );
        }

        Self(violations)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }
}

fn message_of(err: &validator::ValidationError) -> String {
    err.message
        .as_ref()
        .map_or_else(|| err.code.to_string(), |message| message.to_string())
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}
