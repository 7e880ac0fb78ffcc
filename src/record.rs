//! Station records produced from facility lines.

use crate::resolve::{Category, CategoryId};

/// Longest alphanumeric alias kept; longer collapses are truncated.
pub const MAX_ALIAS_LEN: usize = 19;

/// State column of a station: resolved to an identifier, or kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Resolved(CategoryId),
    Text(String),
}

impl Default for StateValue {
    fn default() -> Self {
        StateValue::Resolved(CategoryId::UNSET)
    }
}

/// Alternate spellings of a suffixed callsign, e.g. `WABC-TV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aliases {
    /// Part before the dash (`WABC`).
    pub callsign: String,
    /// Alphanumeric collapse of the whole field (`WABCTV`).
    pub collapsed: String,
    /// Part after the dash (`TV`).
    pub suffix: String,
}

impl Aliases {
    /// Derive aliases from a raw callsign field split at `dash` (byte offset).
    pub fn from_raw(raw: &str, dash: usize) -> Self {
        Self {
            callsign: raw[..dash].to_string(),
            collapsed: raw
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .take(MAX_ALIAS_LEN)
                .collect(),
            suffix: raw[dash + 1..].to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.callsign.as_str(),
            self.collapsed.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
    }
}

/// One accepted (or in-progress) station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    pub callsign: String,
    pub aliases: Option<Aliases>,
    pub affiliate: CategoryId,
    pub city: String,
    pub state: StateValue,
    pub market: CategoryId,
    pub logical_channel: i32,
}

impl StationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolved identifier in the column for `category`.
    pub fn set_category(&mut self, category: Category, id: CategoryId) {
        match category {
            Category::Affiliate => self.affiliate = id,
            Category::State => self.state = StateValue::Resolved(id),
            Category::Market => self.market = id,
        }
    }

    /// Resolved identifier for `category`, if that column is resolved.
    pub fn category(&self, category: Category) -> Option<CategoryId> {
        match category {
            Category::Affiliate => Some(self.affiliate),
            Category::State => match self.state {
                StateValue::Resolved(id) => Some(id),
                StateValue::Text(_) => None,
            },
            Category::Market => Some(self.market),
        }
    }

    /// Keywords for the matcher: callsign first, then unseen aliases, in order.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords = vec![self.callsign.as_str()];
        if let Some(aliases) = &self.aliases {
            for alias in aliases.iter() {
                if !alias.is_empty() && !keywords.contains(&alias) {
                    keywords.push(alias);
                }
            }
        }
        keywords
    }
}
