//! Builds one [`StationRecord`] from the fields of one line.
//!
//! Rules run in ascending field position. The first rejection abandons the
//! line, so gates placed before the resolve columns keep filtered lines from
//! ever being hashed.

use std::fmt;

use crate::record::StationRecord;
use crate::resolve::CategoryResolver;
use crate::rules::{FacilityField, Outcome, Reason, RuleTable};

/// A dropped line: the rejecting field (if any) and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: Option<usize>,
    pub reason: Reason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => match FacilityField::name_of(field) {
                Some(name) => write!(f, "{name}: {}", self.reason),
                None => write!(f, "field {field}: {}", self.reason),
            },
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Applies a [`RuleTable`] to tokenized lines.
pub struct RecordBuilder<'a> {
    rules: &'a RuleTable,
    resolver: &'a dyn CategoryResolver,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(rules: &'a RuleTable, resolver: &'a dyn CategoryResolver) -> Self {
        Self { rules, resolver }
    }

    /// Build a record from `fields`, or report the first rejection.
    ///
    /// Fields without a rule are skipped; rules whose field is missing from
    /// the line are not applied. A line that never yields a callsign is
    /// rejected with [`Reason::MissingCallsign`].
    pub fn build<S: AsRef<str>>(&self, fields: &[S]) -> Result<StationRecord, Rejection> {
        let mut record = StationRecord::new();

        for (field, rule) in self.rules.iter() {
            let Some(text) = fields.get(field) else {
                break;
            };
            if let Outcome::Reject(reason) = rule.apply(text.as_ref(), &mut record, self.resolver) {
                return Err(Rejection {
                    field: Some(field),
                    reason,
                });
            }
        }

        if record.callsign.is_empty() {
            return Err(Rejection {
                field: None,
                reason: Reason::MissingCallsign,
            });
        }
        Ok(record)
    }
}
