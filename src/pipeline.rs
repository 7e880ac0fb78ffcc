//! Line-at-a-time driver.
//!
//! Each input line goes through the whole chain (tokenize, build, insert)
//! before the next one is read. Once input is exhausted both artifacts are
//! written from the final registry.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::builder::RecordBuilder;
use crate::config::Config;
use crate::emit::{Artifact, KeywordList, StationTable};
use crate::error::{MungeError, Result};
use crate::registry::{Insertion, Registry};
use crate::resolve::{Category, CategoryResolver};
use crate::rules::{FieldRule, RuleTable};
use crate::tokenizer::tokenize;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub duplicates: usize,
    pub unresolved_affiliate: usize,
    pub unresolved_state: usize,
    pub unresolved_market: usize,
}

impl RunStats {
    fn count_unresolved(&mut self, category: Category) {
        match category {
            Category::Affiliate => self.unresolved_affiliate += 1,
            Category::State => self.unresolved_state += 1,
            Category::Market => self.unresolved_market += 1,
        }
    }
}

/// Feeds lines through the rule table into a registry.
pub struct Munger<'a> {
    builder: RecordBuilder<'a>,
    delimiter: char,
    resolved: Vec<Category>,
}

impl<'a> Munger<'a> {
    pub fn new(rules: &'a RuleTable, resolver: &'a dyn CategoryResolver, delimiter: char) -> Self {
        let resolved = rules
            .iter()
            .filter_map(|(_, rule)| match rule {
                FieldRule::Resolve { category } => Some(*category),
                _ => None,
            })
            .collect();
        Self {
            builder: RecordBuilder::new(rules, resolver),
            delimiter,
            resolved,
        }
    }

    /// Process one line into `registry`.
    pub fn process_line(&self, line: &str, registry: &mut Registry, stats: &mut RunStats) {
        stats.lines += 1;
        let fields = tokenize(line, self.delimiter);

        let record = match self.builder.build(&fields) {
            Ok(record) => record,
            Err(rejection) => {
                debug!(line = stats.lines, %rejection, "rejected");
                stats.rejected += 1;
                return;
            }
        };

        let callsign = record.callsign.clone();
        let unresolved: Vec<Category> = self
            .resolved
            .iter()
            .copied()
            .filter(|&c| record.category(c).is_some_and(|id| id.is_unset()))
            .collect();

        match registry.insert(record) {
            Insertion::Inserted => {
                trace!(line = stats.lines, %callsign, "accepted");
                stats.accepted += 1;
                for category in unresolved {
                    debug!(%callsign, %category, "unresolved");
                    stats.count_unresolved(category);
                }
            }
            Insertion::Duplicate => {
                debug!(line = stats.lines, %callsign, "duplicate callsign ignored");
                stats.duplicates += 1;
            }
        }
    }

    /// Consume `input` to the end and return the filled registry.
    ///
    /// Lines are decoded lossily, so stray non-UTF-8 bytes never abort a run.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from `input` fails.
    pub fn run<R: BufRead>(&self, mut input: R) -> Result<(Registry, RunStats)> {
        let mut registry = Registry::new();
        let mut stats = RunStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line, &mut registry, &mut stats);
        }

        Ok((registry, stats))
    }
}

/// Open `path` for reading, or stdin when there is no path.
///
/// # Errors
///
/// Returns [`MungeError::OpenInput`] if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| MungeError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Write one artifact to `path`, creating parent directories as needed.
pub fn write_artifact(artifact: &dyn Artifact, registry: &Registry, path: &Path) -> Result<()> {
    let create_err = |source| MungeError::CreateArtifact {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(create_err)?;
    }
    let file = File::create(path).map_err(create_err)?;
    let mut out = BufWriter::new(file);
    artifact.write_to(registry, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write both artifacts for `registry` into the configured directory.
///
/// Returns the written paths, keyword list first.
pub fn write_artifacts(
    config: &Config,
    registry: &Registry,
    resolver: &dyn CategoryResolver,
) -> Result<Vec<PathBuf>> {
    let keywords = KeywordList::new(config.keyword_file.as_str());
    let table = StationTable::new(config.table_file.as_str(), resolver, config.layout);

    let artifacts: [&dyn Artifact; 2] = [&keywords, &table];
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = config.out_dir.join(artifact.file_name());
        write_artifact(artifact, registry, &path)?;
        debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

/// Run the whole pipeline: read `input` (stdin if `None`), build the
/// registry and write both artifacts.
///
/// Nothing is written when the input cannot be opened.
pub fn munge(config: &Config, input: Option<&Path>) -> Result<RunStats> {
    let delimiter = config.delimiter()?;
    let rules = config.rule_table()?;
    let resolver = config.resolver()?;

    let reader = open_input(input)?;
    let munger = Munger::new(&rules, &resolver, delimiter);
    let (registry, stats) = munger.run(reader)?;

    write_artifacts(config, &registry, &resolver)?;

    info!(
        lines = stats.lines,
        stations = stats.accepted,
        rejected = stats.rejected,
        duplicates = stats.duplicates,
        unresolved_affiliate = stats.unresolved_affiliate,
        unresolved_state = stats.unresolved_state,
        unresolved_market = stats.unresolved_market,
        "munge complete"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::HashResolver;
    use std::io::Cursor;

    /// A 30-column facility line with the columns the default rules read.
    fn line(
        city: &str,
        state: &str,
        callsign: &str,
        service: &str,
        fac_type: &str,
        status: &str,
        affil: &str,
        dma: &str,
        channel: &str,
    ) -> String {
        let mut f = vec![""; 30];
        f[0] = city;
        f[1] = state;
        f[5] = callsign;
        f[10] = service;
        f[13] = fac_type;
        f[16] = status;
        f[26] = affil;
        f[27] = dma;
        f[28] = channel;
        format!("{}|\n", f.join("|"))
    }

    fn run(input: &str) -> (Registry, RunStats) {
        let rules = RuleTable::facility();
        let resolver = HashResolver::builtin().unwrap();
        let munger = Munger::new(&rules, &resolver, '|');
        munger.run(Cursor::new(input.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn test_two_stations_and_a_duplicate() {
        let input = [
            line("NEW YORK", "NY", "WABC-TV", "DT", "CDT", "LICEN", "ABC", "NEW YORK", "7"),
            line("HOUSTON", "TX", "KXYZ", "DT", "EDT", "LICEN", "PBS", "HOUSTON", "8"),
            line("NEWARK", "NJ", "WABC", "DT", "CDT", "LICEN", "CBS", "NEW YORK", "44"),
        ]
        .concat();

        let (registry, stats) = run(&input);
        assert_eq!(registry.len(), 2);
        let order: Vec<&str> = registry.iter().map(|s| s.callsign.as_str()).collect();
        assert_eq!(order, vec!["WABC", "KXYZ"]);
        assert_eq!(registry.get("WABC").unwrap().logical_channel, 7);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.rejected, 0);
    }

    #[test]
    fn test_gates_filter_lines() {
        let input = [
            line("A", "NY", "WAAA", "FM", "CDT", "LICEN", "", "", "1"),
            line("B", "NY", "WBBB", "DT", "CA", "LICEN", "", "", "2"),
            line("C", "NY", "WCCC", "DT", "CDT", "CP", "", "", "3"),
            line("D", "NY", "WDDD", "dt", "edt", "licen", "", "", "4"),
        ]
        .concat();

        let (registry, stats) = run(&input);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("WDDD"));
        assert_eq!(stats.rejected, 3);
    }

    #[test]
    fn test_unresolved_counted_not_rejected() {
        let input = line("X", "NY", "WXYZ", "DT", "CDT", "LICEN", "Mystery Net", "NEW YORK", "5");
        let (registry, stats) = run(&input);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("WXYZ").unwrap().affiliate.is_unset());
        assert_eq!(stats.unresolved_affiliate, 1);
        assert_eq!(stats.unresolved_state, 0);
        assert_eq!(stats.unresolved_market, 0);
    }

    #[test]
    fn test_blank_and_garbage_lines_rejected() {
        let (registry, stats) = run("\n\nnot|a|facility\n");
        assert!(registry.is_empty());
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.rejected, 3);
    }

    #[test]
    fn test_invalid_utf8_does_not_abort() {
        let mut input = line("SAN JUAN", "PR", "WKAQ-TV", "DT", "CDT", "LICEN", "Telemundo", "", "2").into_bytes();
        // Latin-1 byte in the city column
        input.insert(3, 0xD1);
        let rules = RuleTable::facility();
        let resolver = HashResolver::builtin().unwrap();
        let munger = Munger::new(&rules, &resolver, '|');
        let (registry, _) = munger.run(Cursor::new(input)).unwrap();
        assert!(registry.contains("WKAQ"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let input = line("HOUSTON", "TX", "KXYZ", "DT", "EDT", "LICEN", "PBS", "HOUSTON", "8");
        let input = input.trim_end_matches('\n');
        let (registry, _) = run(input);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_open_input_missing_file() {
        let err = open_input(Some(Path::new("/nonexistent/facility.dat"))).err().unwrap();
        assert!(matches!(err, MungeError::OpenInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
