//! YAML configuration for a munge run.
//!
//! Every key is optional; an empty file (or no file at all) gives the CDBS
//! facility layout with the compiled-in vocabularies.
//!
//! ```yaml
//! delimiter: "|"
//! out_dir: generated
//! keyword_file: uscallsign.hash
//! table_file: usstationdata.h
//!
//! layout:
//!   callsign_width: 8
//!   affiliate_width: 24
//!   city_width: 24
//!
//! # Replaces the whole rule table when present.
//! rules:
//!   - { field: 0,  rule: title_case, into: city }
//!   - { field: 1,  rule: copy, into: state }
//!   - { field: 5,  rule: callsign, aliases: false, min_len: 3 }
//!   - { field: 13, rule: require, allowed: [CDT, EDT] }
//!   - { field: 14, rule: exclude, denied: [LPD] }
//!
//! # Appended to the built-in tables.
//! vocabularies:
//!   affiliate:
//!     - { ident: Quest, keywords: ["Quest TV"] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emit::{KEYWORD_FILE, Layout, TABLE_FILE};
use crate::error::{MungeError, Result};
use crate::resolve::{Category, HashResolver, Vocabulary, VocabularyEntry};
use crate::rules::{RuleEntry, RuleTable};
use crate::tokenizer::DEFAULT_DELIMITER;

/// Settings of one run, as read from YAML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Field delimiter; exactly one character.
    pub delimiter: String,
    /// Directory the artifacts are written to.
    pub out_dir: PathBuf,
    pub keyword_file: String,
    pub table_file: String,
    pub layout: Layout,
    /// Rule table rows; `None` keeps the facility layout.
    pub rules: Option<Vec<RuleEntry>>,
    /// Extra vocabulary entries per category.
    pub vocabularies: HashMap<Category, Vec<VocabularyEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            out_dir: PathBuf::from("."),
            keyword_file: KEYWORD_FILE.to_string(),
            table_file: TABLE_FILE.to_string(),
            layout: Layout::default(),
            rules: None,
            vocabularies: HashMap::new(),
        }
    }
}

impl Config {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for this schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&text)
    }

    /// Parse a config from YAML text. Blank text yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// The delimiter as a single character.
    ///
    /// # Errors
    ///
    /// Returns [`MungeError::Config`] unless the delimiter is one character.
    pub fn delimiter(&self) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(MungeError::Config(format!(
                "delimiter must be a single character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// The rule table this config selects.
    pub fn rule_table(&self) -> Result<RuleTable> {
        match &self.rules {
            Some(entries) => RuleTable::from_entries(entries.clone()),
            None => Ok(RuleTable::facility()),
        }
    }

    /// Built-in vocabularies extended with the configured entries.
    pub fn vocabularies(&self) -> Result<Vec<Vocabulary>> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let mut vocab = Vocabulary::builtin(category)?;
                for entry in self.vocabularies.get(&category).into_iter().flatten() {
                    vocab.push(entry.clone())?;
                }
                Ok(vocab)
            })
            .collect()
    }

    /// A resolver over [`Config::vocabularies`].
    pub fn resolver(&self) -> Result<HashResolver> {
        HashResolver::new(self.vocabularies()?)
    }

    pub fn keyword_path(&self) -> PathBuf {
        self.out_dir.join(&self.keyword_file)
    }

    pub fn table_path(&self) -> PathBuf {
        self.out_dir.join(&self.table_file)
    }
}
