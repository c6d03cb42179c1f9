use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::core::{FieldPath, FieldValueError, Schema, ValueTree};

/// Flat submission as posted by a settings form: canonical or dotted field id
/// mapped to the raw string the widget produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmittedValues {
    entries: IndexMap<String, String>,
}

impl SubmittedValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(id, raw);
        self
    }

    /// Inserts a raw value. Ids are stored canonically when they parse, so a
    /// dotted submission key matches the bracketed field id.
    pub fn insert(&mut self, id: impl Into<String>, raw: impl Into<String>) {
        let id = id.into();
        let id = FieldPath::canonicalize(&id).unwrap_or(id);
        self.entries.insert(id, raw.into());
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut submitted = Self::new();
        for (id, raw) in iter {
            submitted.insert(id, raw);
        }
        submitted
    }
}

/// A submitted value that failed its field's validation rules.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid value for `{field_id}`: {reason}")]
pub struct ValidationError {
    pub field_id: String,
    pub raw: String,
    pub reason: FieldValueError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindOutcome {
    pub values: ValueTree,
    pub errors: Vec<ValidationError>,
    /// Previously stored keys dropped because the schema no longer shows them.
    pub pruned: Vec<String>,
}

impl BindOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error_for(&self, field_id: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field_id == field_id)
    }
}

/// Merges a flat submission into the previous value tree.
///
/// Only fields present in `schema` survive. Each field resolves to, in order:
/// the submitted value when it validates, the previous value when it still
/// satisfies the field's rules, the field default. A rejected submission
/// records a [`ValidationError`] and falls back without affecting other
/// fields. A blank submission for a field that requires a value (an untouched
/// number input) counts as unset and resolves to the default.
#[must_use]
pub fn bind(schema: &Schema, submitted: &SubmittedValues, previous: &ValueTree) -> BindOutcome {
    let mut outcome = BindOutcome::default();
    let mut known: HashSet<&str> = HashSet::new();

    for field in schema.fields() {
        known.insert(field.id.as_str());
        let widget = field.kind.widget();
        let retained = || match previous.get(&field.id) {
            Some(value) if widget.accepts(value, &field.constraints) => Some(value.clone()),
            Some(_) => {
                trace!(field = %field.id, "stored value no longer valid, using default");
                field.default_value.clone()
            }
            None => field.default_value.clone(),
        };

        let resolved = match submitted.get(&field.id) {
            Some(raw) => match widget.read(raw, &field.constraints) {
                Ok(value) => {
                    trace!(field = %field.id, "accepted submitted value");
                    Some(value)
                }
                Err(FieldValueError::Empty) => {
                    trace!(field = %field.id, "blank submission resolves to default");
                    field.default_value.clone()
                }
                Err(reason) => {
                    warn!(field = %field.id, error = %reason, "rejected submitted value");
                    outcome.errors.push(ValidationError {
                        field_id: field.id.clone(),
                        raw: raw.to_owned(),
                        reason,
                    });
                    retained()
                }
            },
            None => retained(),
        };

        if let Some(value) = resolved {
            outcome.values.insert(field.id.clone(), value);
        }
    }

    outcome.pruned = previous
        .keys()
        .filter(|id| !known.contains(id))
        .map(str::to_owned)
        .collect();

    let ignored = submitted.keys().filter(|id| !known.contains(id)).count();

    debug!(
        bound = outcome.values.len(),
        errors = outcome.errors.len(),
        pruned = outcome.pruned.len(),
        ignored,
        "bound settings submission"
    );
    outcome
}
