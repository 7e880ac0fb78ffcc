//! # fcc-munge
//!
//! Turns the FCC CDBS `facility.dat` table into two generated source files
//! for a broadcast-TV guide: a callsign keyword list and a C array of
//! station attributes.
//!
//! ## Overview
//!
//! Input is read one line at a time and each line runs the whole chain:
//!
//! - **Tokenize**: split on `|`, clip and right-trim each field
//! - **Build**: apply the positional [`RuleTable`]; gates may drop the line,
//!   categorical columns are resolved to identifiers
//! - **Register**: keep the first record per callsign in input order
//!
//! After the last line both [`Artifact`]s are written from the
//! [`Registry`].
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use fcc_munge::{HashResolver, Munger, RuleTable};
//!
//! let mut fields = vec![""; 30];
//! fields[0] = "NEW YORK";
//! fields[1] = "NY";
//! fields[5] = "WABC-TV";
//! fields[10] = "DT";
//! fields[13] = "CDT";
//! fields[16] = "LICEN";
//! fields[26] = "ABC";
//! fields[28] = "7";
//! let input = format!("{}|\n", fields.join("|"));
//!
//! let rules = RuleTable::facility();
//! let resolver = HashResolver::builtin().unwrap();
//! let (registry, stats) = Munger::new(&rules, &resolver, '|')
//!     .run(Cursor::new(input))
//!     .unwrap();
//!
//! assert_eq!(stats.accepted, 1);
//! assert_eq!(registry.get("WABC").unwrap().city, "New York");
//! ```

pub mod builder;
pub mod config;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod rules;
mod tables;
pub mod tokenizer;

pub use builder::{RecordBuilder, Rejection};
pub use config::Config;
pub use emit::{Artifact, KeywordList, Layout, StationTable};
pub use error::{MungeError, Result};
pub use pipeline::{Munger, RunStats, munge, open_input, write_artifacts};
pub use record::{Aliases, StateValue, StationRecord};
pub use registry::{Insertion, Registry};
pub use resolve::{Category, CategoryId, CategoryResolver, HashResolver, Vocabulary};
pub use rules::{FacilityField, FieldRule, RuleTable};
pub use tokenizer::tokenize;
