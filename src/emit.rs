//! Artifact emitters.
//!
//! Two generated files are written from the final [`Registry`]:
//!
//! - [`KeywordList`]: the keyword table fed to the string-matching table
//!   generator, one quoted, comma-joined keyword group per station.
//! - [`StationTable`]: a C array literal indexed by callsign enumerator,
//!   one brace-delimited row per station with aligned columns.
//!
//! Every entry line ends in `,` except the last, which ends in a space.
//! Emitters only read the registry, so rendering twice gives identical
//! bytes.

use std::io::{self, Write};

use serde::Deserialize;

use crate::record::{StateValue, StationRecord};
use crate::registry::Registry;
use crate::resolve::{Category, CategoryResolver};

/// Default keyword list file name.
pub const KEYWORD_FILE: &str = "uscallsign.hash";

/// Default station table file name.
pub const TABLE_FILE: &str = "usstationdata.h";

const KEYWORD_PREFIX: &str = "\n\
prefix = \"USCallsign\"\n\
mappings : {\n\
\x20   ignoreCase = true\n\
\x20   Separator = \" :|()[]\"\n\
}\n\
\n\
keywords = [\n";

const KEYWORD_SUFFIX: &str = "]\n";

const TABLE_PREFIX: &str = "typedef struct {\n\
\x20   const char *  callsign;\n\
\x20   tIndex        affiliateIdx;\n\
\x20   int           virtualChannel;\n\
\x20   const char *  city;\n\
\x20   tIndex        stateIdx;\n\
\x20   tIndex        nielsenDMAIdx;\n\
} tUSStationData;\n\
\n\
tUSStationData USStationData[] = \n{\n";

const TABLE_SUFFIX: &str = "};\n";

/// A generated file derived from the registry.
pub trait Artifact {
    /// File name relative to the output directory.
    fn file_name(&self) -> &str;

    /// Serialize `registry` into `out`.
    fn write_to(&self, registry: &Registry, out: &mut dyn Write) -> io::Result<()>;

    /// Serialize `registry` into a string.
    fn render(&self, registry: &Registry) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(registry, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Entry terminator: `,` between entries, a space after the last.
fn terminator(index: usize, len: usize) -> char {
    if index + 1 == len { ' ' } else { ',' }
}

/// Quote `text` as a C string literal.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// `value` right-padded with spaces to `width`, then its comma; no padding
/// when `value` is already wider.
fn padded(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{value}{:pad$},", "")
}

/// Keyword list for the callsign matcher.
#[derive(Debug, Clone)]
pub struct KeywordList {
    file_name: String,
}

impl KeywordList {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    fn entry(station: &StationRecord) -> String {
        quoted(&station.keywords().join(","))
    }
}

impl Default for KeywordList {
    fn default() -> Self {
        Self::new(KEYWORD_FILE)
    }
}

impl Artifact for KeywordList {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn write_to(&self, registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(KEYWORD_PREFIX.as_bytes())?;
        let len = registry.len();
        for (i, station) in registry.iter().enumerate() {
            writeln!(out, "\t{}{}", Self::entry(station), terminator(i, len))?;
        }
        out.write_all(KEYWORD_SUFFIX.as_bytes())
    }
}

/// Column widths of the station table, measured on the column text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub callsign_width: usize,
    pub affiliate_width: usize,
    pub city_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            callsign_width: 8,
            affiliate_width: 24,
            city_width: 24,
        }
    }
}

/// C array literal of station attributes.
pub struct StationTable<'a> {
    file_name: String,
    resolver: &'a dyn CategoryResolver,
    layout: Layout,
}

impl<'a> StationTable<'a> {
    pub fn new(file_name: impl Into<String>, resolver: &'a dyn CategoryResolver, layout: Layout) -> Self {
        Self {
            file_name: file_name.into(),
            resolver,
            layout,
        }
    }

    fn enumerator(&self, category: Category, station: &StationRecord) -> String {
        let id = station.category(category).unwrap_or_default();
        format!("{}{}", category.ident_prefix(), self.resolver.ident(category, id))
    }

    fn row(&self, station: &StationRecord, terminator: char) -> String {
        let state = match &station.state {
            StateValue::Resolved(_) => self.enumerator(Category::State, station),
            StateValue::Text(text) => quoted(text),
        };
        format!(
            "\t[kUSCallsign{:<4}] = {{ {} {} {:>2}, {} {}, {} }}{}",
            station.callsign,
            padded(&quoted(&station.callsign), self.layout.callsign_width),
            padded(
                &self.enumerator(Category::Affiliate, station),
                self.layout.affiliate_width
            ),
            station.logical_channel,
            padded(&quoted(&station.city), self.layout.city_width),
            state,
            self.enumerator(Category::Market, station),
            terminator,
        )
    }
}

impl Artifact for StationTable<'_> {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn write_to(&self, registry: &Registry, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(TABLE_PREFIX.as_bytes())?;
        let len = registry.len();
        for (i, station) in registry.iter().enumerate() {
            writeln!(out, "{}", self.row(station, terminator(i, len)))?;
        }
        out.write_all(TABLE_SUFFIX.as_bytes())
    }
}
