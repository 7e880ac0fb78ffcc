//! The positional field rule table.
//!
//! Every facility column that matters is bound to one [`FieldRule`]. A rule
//! looks at the column text, may update the in-progress
//! [`StationRecord`], and either accepts or rejects the whole line.
//!
//! The table is plain data: [`RuleTable::facility`] describes the CDBS
//! `facility.dat` layout and a config file may replace it entirely.
//!
//! ```text
//! field  column               rule
//!   0    comm_city            title_case -> city
//!   1    comm_state           resolve state
//!   5    fac_callsign         callsign (aliases, min length 3)
//!  10    fac_service          require DT
//!  13    fac_type             require CDT | EDT
//!  16    fac_status           require LICEN
//!  26    network_affil        resolve affiliate
//!  27    nielsen_dma          resolve market
//!  28    tv_virtual_channel   channel
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{MungeError, Result};
use crate::record::{Aliases, StateValue, StationRecord};
use crate::resolve::{Category, CategoryResolver};

/// Callsign separator between the base callsign and its suffix.
pub const CALLSIGN_SEPARATOR: char = '-';

/// Default minimum callsign length after splitting off the suffix.
pub const DEFAULT_MIN_CALLSIGN_LEN: usize = 3;

/// Columns of the CDBS `facility.dat` table, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityField {
    CommCity,
    CommState,
    EeoRptInd,
    FacAddress1,
    FacAddress2,
    FacCallsign,
    FacChannel,
    FacCity,
    FacCountry,
    FacFrequency,
    FacService,
    FacState,
    FacStatusDate,
    FacType,
    FacilityId,
    LicExpirationDate,
    FacStatus,
    FacZip1,
    FacZip2,
    StationType,
    AssocFacilityId,
    CallsignEffDate,
    TsidNtsc,
    TsidDtv,
    DigitalStatus,
    SatTv,
    NetworkAffil,
    NielsenDma,
    TvVirtualChannel,
    LastChangeDate,
}

const FACILITY_FIELD_NAMES: [&str; 30] = [
    "comm_city",
    "comm_state",
    "eeo_rpt_ind",
    "fac_address1",
    "fac_address2",
    "fac_callsign",
    "fac_channel",
    "fac_city",
    "fac_country",
    "fac_frequency",
    "fac_service",
    "fac_state",
    "fac_status_date",
    "fac_type",
    "facility_id",
    "lic_expiration_date",
    "fac_status",
    "fac_zip1",
    "fac_zip2",
    "station_type",
    "assoc_facility_id",
    "callsign_eff_date",
    "tsid_ntsc",
    "tsid_dtv",
    "digital_status",
    "sat_tv",
    "network_affil",
    "nielsen_dma",
    "tv_virtual_channel",
    "last_change_date",
];

impl FacilityField {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        FACILITY_FIELD_NAMES[self.index()]
    }

    /// Column name for a field position, if it is part of the layout.
    pub fn name_of(position: usize) -> Option<&'static str> {
        FACILITY_FIELD_NAMES.get(position).copied()
    }
}

/// Text columns a rule can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSlot {
    City,
    State,
}

/// What one rule does with its column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldRule {
    /// Reject unless the text equals one of `allowed`, ignoring case.
    Require { allowed: Vec<String> },
    /// Reject if the text equals one of `denied`, ignoring case.
    Exclude { denied: Vec<String> },
    /// Split off a `-SUFFIX` and store the callsign.
    Callsign {
        #[serde(default = "default_aliases")]
        aliases: bool,
        #[serde(default = "default_min_len")]
        min_len: usize,
    },
    /// Title-case the text into a text column.
    TitleCase { into: TextSlot },
    /// Resolve the text to a category identifier; never rejects.
    Resolve { category: Category },
    /// Parse the logical channel number; non-numeric text is 0.
    Channel,
    /// Copy the text verbatim into a text column.
    Copy { into: TextSlot },
}

fn default_aliases() -> bool {
    true
}

fn default_min_len() -> usize {
    DEFAULT_MIN_CALLSIGN_LEN
}

/// Why a line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    NotAllowed(String),
    Excluded(String),
    ShortCallsign(String),
    MissingCallsign,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NotAllowed(value) => write!(f, "\"{value}\" not allowed"),
            Reason::Excluded(value) => write!(f, "\"{value}\" excluded"),
            Reason::ShortCallsign(callsign) => write!(f, "callsign \"{callsign}\" too short"),
            Reason::MissingCallsign => f.write_str("no callsign"),
        }
    }
}

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject(Reason),
}

impl FieldRule {
    /// Apply this rule to `text`, updating `record` on acceptance.
    pub fn apply(
        &self,
        text: &str,
        record: &mut StationRecord,
        resolver: &dyn CategoryResolver,
    ) -> Outcome {
        match self {
            FieldRule::Require { allowed } => {
                if allowed.iter().any(|a| a.eq_ignore_ascii_case(text)) {
                    Outcome::Accept
                } else {
                    Outcome::Reject(Reason::NotAllowed(text.to_string()))
                }
            }
            FieldRule::Exclude { denied } => {
                if denied.iter().any(|d| d.eq_ignore_ascii_case(text)) {
                    Outcome::Reject(Reason::Excluded(text.to_string()))
                } else {
                    Outcome::Accept
                }
            }
            FieldRule::Callsign { aliases, min_len } => {
                apply_callsign(text.trim(), *aliases, *min_len, record)
            }
            FieldRule::TitleCase { into } => {
                store_text(record, *into, title_case(text));
                Outcome::Accept
            }
            FieldRule::Resolve { category } => {
                record.set_category(*category, resolver.resolve(*category, text));
                Outcome::Accept
            }
            FieldRule::Channel => {
                record.logical_channel = parse_channel(text);
                Outcome::Accept
            }
            FieldRule::Copy { into } => {
                store_text(record, *into, text.to_string());
                Outcome::Accept
            }
        }
    }
}

fn apply_callsign(raw: &str, aliases: bool, min_len: usize, record: &mut StationRecord) -> Outcome {
    let callsign = match raw.find(CALLSIGN_SEPARATOR) {
        Some(dash) => {
            if aliases {
                record.aliases = Some(Aliases::from_raw(raw, dash));
            }
            &raw[..dash]
        }
        None => raw,
    };

    if callsign.is_empty() {
        return Outcome::Reject(Reason::MissingCallsign);
    }
    if callsign.chars().count() < min_len {
        return Outcome::Reject(Reason::ShortCallsign(callsign.to_string()));
    }
    record.callsign = callsign.to_string();
    Outcome::Accept
}

fn store_text(record: &mut StationRecord, slot: TextSlot, text: String) {
    match slot {
        TextSlot::City => record.city = text,
        TextSlot::State => record.state = StateValue::Text(text),
    }
}

/// Capitalize the first letter after each whitespace or punctuation run and
/// lower-case the rest.
///
/// ```
/// assert_eq!(fcc_munge::rules::title_case("new YORK city"), "New York City");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut first = true;
    for c in text.chars() {
        if c.is_whitespace() || c.is_ascii_punctuation() {
            first = true;
            out.push(c);
        } else if first {
            out.extend(c.to_uppercase());
            first = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Leading integer of `text` (optional sign, then digits); 0 if there is none.
pub fn parse_channel(text: &str) -> i32 {
    let s = text.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i32>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => 0,
    }
}

/// One row of a rule table as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleEntry {
    pub field: usize,
    #[serde(flatten)]
    pub rule: FieldRule,
}

/// Field position to rule, iterated in ascending position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<usize, FieldRule>,
}

impl RuleTable {
    /// Build a table from config rows.
    ///
    /// # Errors
    ///
    /// Returns [`MungeError::Config`] if the table is empty, two rows
    /// share a position, or no row normalizes the callsign.
    pub fn from_entries(entries: Vec<RuleEntry>) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for RuleEntry { field, rule } in entries {
            if rules.insert(field, rule).is_some() {
                return Err(MungeError::Config(format!(
                    "more than one rule for field {field}"
                )));
            }
        }
        if !rules.values().any(|r| matches!(r, FieldRule::Callsign { .. })) {
            return Err(MungeError::Config(
                "rule table has no callsign rule".to_string(),
            ));
        }
        Ok(Self { rules })
    }

    /// The CDBS `facility.dat` layout.
    pub fn facility() -> Self {
        use FacilityField::*;

        let rules = [
            (CommCity, FieldRule::TitleCase { into: TextSlot::City }),
            (CommState, FieldRule::Resolve { category: Category::State }),
            (
                FacCallsign,
                FieldRule::Callsign {
                    aliases: true,
                    min_len: DEFAULT_MIN_CALLSIGN_LEN,
                },
            ),
            (FacService, require(&["DT"])),
            (FacType, require(&["CDT", "EDT"])),
            (FacStatus, require(&["LICEN"])),
            (NetworkAffil, FieldRule::Resolve { category: Category::Affiliate }),
            (NielsenDma, FieldRule::Resolve { category: Category::Market }),
            (TvVirtualChannel, FieldRule::Channel),
        ];

        Self {
            rules: rules
                .into_iter()
                .map(|(field, rule)| (field.index(), rule))
                .collect(),
        }
    }

    pub fn get(&self, field: usize) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &FieldRule)> {
        self.rules.iter().map(|(&field, rule)| (field, rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::facility()
    }
}

fn require(allowed: &[&str]) -> FieldRule {
    FieldRule::Require {
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{CategoryId, HashResolver};

    fn apply(rule: &FieldRule, text: &str) -> (Outcome, StationRecord) {
        let resolver = HashResolver::builtin().unwrap();
        let mut record = StationRecord::new();
        let outcome = rule.apply(text, &mut record, &resolver);
        (outcome, record)
    }

    fn callsign_rule() -> FieldRule {
        FieldRule::Callsign {
            aliases: true,
            min_len: 3,
        }
    }

    #[test]
    fn test_require_ignores_case() {
        let rule = require(&["CDT", "EDT"]);
        assert_eq!(apply(&rule, "cdt").0, Outcome::Accept);
        assert_eq!(apply(&rule, "EDT").0, Outcome::Accept);
        assert_eq!(
            apply(&rule, "CA").0,
            Outcome::Reject(Reason::NotAllowed("CA".to_string()))
        );
    }

    #[test]
    fn test_require_rejects_empty() {
        assert!(matches!(apply(&require(&["DT"]), "").0, Outcome::Reject(_)));
    }

    #[test]
    fn test_exclude() {
        let rule = FieldRule::Exclude {
            denied: vec!["LPD".to_string(), "LPA".to_string()],
        };
        assert_eq!(apply(&rule, "DTV").0, Outcome::Accept);
        assert_eq!(
            apply(&rule, "lpd").0,
            Outcome::Reject(Reason::Excluded("lpd".to_string()))
        );
    }

    #[test]
    fn test_callsign_split_with_aliases() {
        let (outcome, record) = apply(&callsign_rule(), "WABC-TV");
        assert_eq!(outcome, Outcome::Accept);
        assert_eq!(record.callsign, "WABC");
        let aliases = record.aliases.unwrap();
        let all: Vec<&str> = aliases.iter().collect();
        assert_eq!(all, vec!["WABC", "WABCTV", "TV"]);
    }

    #[test]
    fn test_callsign_without_suffix() {
        let (outcome, record) = apply(&callsign_rule(), "KXYZ");
        assert_eq!(outcome, Outcome::Accept);
        assert_eq!(record.callsign, "KXYZ");
        assert!(record.aliases.is_none());
    }

    #[test]
    fn test_callsign_aliases_disabled() {
        let rule = FieldRule::Callsign {
            aliases: false,
            min_len: 3,
        };
        let (_, record) = apply(&rule, "WABC-TV");
        assert_eq!(record.callsign, "WABC");
        assert!(record.aliases.is_none());
    }

    #[test]
    fn test_callsign_too_short() {
        let (outcome, _) = apply(&callsign_rule(), "KA-TV");
        assert_eq!(
            outcome,
            Outcome::Reject(Reason::ShortCallsign("KA".to_string()))
        );
    }

    #[test]
    fn test_callsign_empty() {
        assert_eq!(
            apply(&callsign_rule(), "   ").0,
            Outcome::Reject(Reason::MissingCallsign)
        );
        assert_eq!(
            apply(&callsign_rule(), "-TV").0,
            Outcome::Reject(Reason::MissingCallsign)
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new YORK city"), "New York City");
        assert_eq!(title_case("WINSTON-SALEM"), "Winston-Salem");
        assert_eq!(title_case("O'FALLON"), "O'Fallon");
        assert_eq!(title_case("ST. LOUIS"), "St. Louis");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_rule_into_city() {
        let rule = FieldRule::TitleCase {
            into: TextSlot::City,
        };
        let (_, record) = apply(&rule, "new YORK city");
        assert_eq!(record.city, "New York City");
    }

    #[test]
    fn test_copy_into_state() {
        let rule = FieldRule::Copy {
            into: TextSlot::State,
        };
        let (_, record) = apply(&rule, "NY");
        assert_eq!(record.state, StateValue::Text("NY".to_string()));
    }

    #[test]
    fn test_resolve_never_rejects() {
        let rule = FieldRule::Resolve {
            category: Category::Affiliate,
        };
        let (outcome, record) = apply(&rule, "nobody knows");
        assert_eq!(outcome, Outcome::Accept);
        assert_eq!(record.affiliate, CategoryId::UNSET);

        let (_, record) = apply(&rule, "CBS");
        assert!(!record.affiliate.is_unset());
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!(parse_channel("7"), 7);
        assert_eq!(parse_channel(" 12"), 12);
        assert_eq!(parse_channel("4.1"), 4);
        assert_eq!(parse_channel("-3"), -3);
        assert_eq!(parse_channel(""), 0);
        assert_eq!(parse_channel("n/a"), 0);
        assert_eq!(parse_channel("99999999999"), 0);
    }

    #[test]
    fn test_facility_table_positions() {
        let table = RuleTable::facility();
        assert_eq!(table.len(), 9);
        assert!(matches!(
            table.get(FacilityField::FacCallsign.index()),
            Some(FieldRule::Callsign { .. })
        ));
        let positions: Vec<usize> = table.iter().map(|(f, _)| f).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_facility_field_names() {
        assert_eq!(FacilityField::FacCallsign.name(), "fac_callsign");
        assert_eq!(FacilityField::name_of(27), Some("nielsen_dma"));
        assert_eq!(FacilityField::name_of(30), None);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let entries = vec![
            RuleEntry {
                field: 0,
                rule: callsign_rule(),
            },
            RuleEntry {
                field: 0,
                rule: FieldRule::Channel,
            },
        ];
        assert!(matches!(
            RuleTable::from_entries(entries),
            Err(MungeError::Config(_))
        ));
    }

    #[test]
    fn test_from_entries_requires_callsign() {
        let entries = vec![RuleEntry {
            field: 3,
            rule: FieldRule::Channel,
        }];
        assert!(RuleTable::from_entries(entries).is_err());
    }
}
