//! Categorical resolution of free text to small identifiers.
//!
//! Affiliate network, US state and Nielsen market columns hold free text.
//! Each is reduced to a [`CategoryId`] by remapping its characters (case
//! folding, dropping separators), hashing the result and looking the hash
//! up in a per-category table. A miss yields [`CategoryId::UNSET`]; it is
//! never an error.
//!
//! The pipeline only depends on the [`CategoryResolver`] trait.
//! [`HashResolver`] is the implementation shipped with the crate, backed
//! by [`Vocabulary`] tables.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{MungeError, Result};
use crate::tables;

/// The categorical columns of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Affiliate,
    State,
    Market,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Affiliate, Category::State, Category::Market];

    pub fn name(self) -> &'static str {
        match self {
            Category::Affiliate => "affiliate",
            Category::State => "state",
            Category::Market => "market",
        }
    }

    /// Prefix of the generated enumerator, e.g. `kAffiliate` in `kAffiliateABC`.
    pub fn ident_prefix(self) -> &'static str {
        match self {
            Category::Affiliate => "kAffiliate",
            Category::State => "kUSState",
            Category::Market => "kNielsenDMA",
        }
    }

    /// Character remapping applied before hashing text of this category.
    pub fn char_map(self) -> CharMap {
        match self {
            Category::Affiliate => CharMap::new(true, "-./:|()[],'&!+"),
            Category::State => CharMap::new(true, "-.,()"),
            Category::Market => CharMap::new(true, "-.,()&/'"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of an entry in a category's vocabulary. Zero is the unset sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CategoryId(u16);

impl CategoryId {
    pub const UNSET: CategoryId = CategoryId(0);

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }
}

/// Per-category text normalization ahead of hashing.
///
/// Whitespace and the listed separator characters are dropped; with
/// `ignore_case` every remaining character is lower-cased.
#[derive(Debug, Clone, Copy)]
pub struct CharMap {
    ignore_case: bool,
    separators: &'static str,
}

impl CharMap {
    pub const fn new(ignore_case: bool, separators: &'static str) -> Self {
        Self {
            ignore_case,
            separators,
        }
    }

    /// Map one character, or `None` when it is dropped.
    pub fn remap(&self, c: char) -> Option<char> {
        if c.is_whitespace() || self.separators.contains(c) {
            None
        } else if self.ignore_case {
            Some(c.to_ascii_lowercase())
        } else {
            Some(c)
        }
    }

    /// Remapped form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().filter_map(|c| self.remap(c)).collect()
    }

    /// FNV-1a over the remapped characters of `text`.
    pub fn hash(&self, text: &str) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;

        let mut hash = OFFSET;
        for c in text.chars().filter_map(|c| self.remap(c)) {
            let mut buf = [0u8; 4];
            for &byte in c.encode_utf8(&mut buf).as_bytes() {
                hash = (hash ^ u64::from(byte)).wrapping_mul(PRIME);
            }
        }
        hash
    }
}

/// Resolves categorical free text to identifiers.
pub trait CategoryResolver {
    /// Identifier for `text`, or [`CategoryId::UNSET`] when nothing matches.
    fn resolve(&self, category: Category, text: &str) -> CategoryId;

    /// Enumerator suffix for `id`, e.g. `ABC` or `Unset`.
    fn ident(&self, category: Category, id: CategoryId) -> &str;
}

/// One named value of a category and the spellings that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabularyEntry {
    pub ident: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(ident: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            ident: ident.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// All entries of one category, indexed by [`CategoryId`].
#[derive(Debug, Clone)]
pub struct Vocabulary {
    category: Category,
    entries: Vec<VocabularyEntry>,
}

/// Identifier suffix of the unset sentinel in every category.
pub const UNSET_IDENT: &str = "Unset";

impl Vocabulary {
    /// A vocabulary holding only the unset sentinel.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: vec![VocabularyEntry::new(UNSET_IDENT, &[])],
        }
    }

    /// The vocabulary compiled into the crate for `category`.
    pub fn builtin(category: Category) -> Result<Self> {
        let mut vocab = Self::new(category);
        for (ident, keywords) in tables::entries(category) {
            vocab.push(VocabularyEntry::new(*ident, keywords))?;
        }
        Ok(vocab)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Append an entry; returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MungeError::Config`] once every identifier is taken.
    pub fn push(&mut self, entry: VocabularyEntry) -> Result<CategoryId> {
        let id = u16::try_from(self.entries.len()).map_err(|_| {
            MungeError::Config(format!(
                "{} vocabulary has more than {} entries",
                self.category,
                u16::MAX
            ))
        })?;
        self.entries.push(entry);
        Ok(CategoryId(id))
    }

    /// Number of entries, not counting the unset sentinel.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ident(&self, id: CategoryId) -> &str {
        self.entries
            .get(id.index())
            .map_or(UNSET_IDENT, |entry| entry.ident.as_str())
    }

    fn iter(&self) -> impl Iterator<Item = (CategoryId, &VocabularyEntry)> {
        self.entries
            .iter()
            .enumerate()
            .skip(1)
            // push keeps every index within u16
            .map(|(i, entry)| (CategoryId(i as u16), entry))
    }
}

#[derive(Debug)]
struct HashTable {
    vocab: Vocabulary,
    map: CharMap,
    by_hash: HashMap<u64, CategoryId>,
}

impl HashTable {
    fn build(vocab: Vocabulary) -> Result<Self> {
        let category = vocab.category();
        let map = category.char_map();
        let mut by_hash = HashMap::new();
        let mut spelled: HashMap<u64, String> = HashMap::new();

        for (id, entry) in vocab.iter() {
            let spellings = std::iter::once(&entry.ident).chain(entry.keywords.iter());
            for keyword in spellings {
                if map.normalize(keyword).is_empty() {
                    continue;
                }
                let hash = map.hash(keyword);
                match by_hash.get(&hash) {
                    Some(&existing) if existing != id => {
                        return Err(MungeError::HashCollision {
                            category,
                            first: spelled.remove(&hash).unwrap_or_default(),
                            second: keyword.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        by_hash.insert(hash, id);
                        spelled.insert(hash, keyword.clone());
                    }
                }
            }
        }

        Ok(Self {
            vocab,
            map,
            by_hash,
        })
    }

    fn lookup(&self, text: &str) -> CategoryId {
        if self.map.normalize(text).is_empty() {
            return CategoryId::UNSET;
        }
        self.by_hash
            .get(&self.map.hash(text))
            .copied()
            .unwrap_or(CategoryId::UNSET)
    }
}

/// Hash-table resolver over one [`Vocabulary`] per category.
#[derive(Debug)]
pub struct HashResolver {
    tables: HashMap<Category, HashTable>,
}

impl HashResolver {
    /// Build lookup tables for the given vocabularies.
    ///
    /// Categories without a vocabulary resolve everything to unset.
    ///
    /// # Errors
    ///
    /// Returns [`MungeError::HashCollision`] when two keywords of different
    /// entries normalize to the same hash.
    pub fn new(vocabularies: impl IntoIterator<Item = Vocabulary>) -> Result<Self> {
        let mut tables = HashMap::new();
        for vocab in vocabularies {
            tables.insert(vocab.category(), HashTable::build(vocab)?);
        }
        for category in Category::ALL {
            if !tables.contains_key(&category) {
                tables.insert(category, HashTable::build(Vocabulary::new(category))?);
            }
        }
        Ok(Self { tables })
    }

    /// Resolver over the compiled-in vocabularies.
    pub fn builtin() -> Result<Self> {
        let vocabularies = Category::ALL
            .into_iter()
            .map(Vocabulary::builtin)
            .collect::<Result<Vec<_>>>()?;
        Self::new(vocabularies)
    }
}

impl CategoryResolver for HashResolver {
    fn resolve(&self, category: Category, text: &str) -> CategoryId {
        self.tables
            .get(&category)
            .map_or(CategoryId::UNSET, |table| table.lookup(text))
    }

    fn ident(&self, category: Category, id: CategoryId) -> &str {
        self.tables
            .get(&category)
            .map_or(UNSET_IDENT, |table| table.vocab.ident(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> HashResolver {
        HashResolver::builtin().unwrap()
    }

    #[test]
    fn test_builtin_tables_have_no_collisions() {
        assert!(HashResolver::builtin().is_ok());
    }

    #[test]
    fn test_resolve_ignores_case_and_separators() {
        let r = resolver();
        let abc = r.resolve(Category::Affiliate, "ABC");
        assert!(!abc.is_unset());
        assert_eq!(r.resolve(Category::Affiliate, "abc"), abc);
        assert_eq!(r.resolve(Category::Affiliate, " A.B.C. "), abc);
        assert_eq!(r.ident(Category::Affiliate, abc), "ABC");
    }

    #[test]
    fn test_resolve_state_by_name_and_code() {
        let r = resolver();
        let ny = r.resolve(Category::State, "NY");
        assert_eq!(r.resolve(Category::State, "New York"), ny);
        assert_eq!(r.ident(Category::State, ny), "NY");
    }

    #[test]
    fn test_resolve_market() {
        let r = resolver();
        let id = r.resolve(Category::Market, "NEW YORK, NY");
        assert_eq!(r.ident(Category::Market, id), "NewYork");
    }

    #[test]
    fn test_unknown_text_is_unset() {
        let r = resolver();
        let id = r.resolve(Category::Affiliate, "Nobody Broadcasting");
        assert!(id.is_unset());
        assert_eq!(r.ident(Category::Affiliate, id), UNSET_IDENT);
        assert!(r.resolve(Category::State, "").is_unset());
        assert!(r.resolve(Category::State, " - ").is_unset());
    }

    #[test]
    fn test_collision_detected() {
        let mut vocab = Vocabulary::new(Category::Affiliate);
        vocab.push(VocabularyEntry::new("One", &["Same Name"])).unwrap();
        vocab.push(VocabularyEntry::new("Two", &["same-name"])).unwrap();
        let err = HashResolver::new([vocab]).unwrap_err();
        assert!(matches!(err, MungeError::HashCollision { .. }));
    }

    #[test]
    fn test_repeated_keyword_same_entry_is_fine() {
        let mut vocab = Vocabulary::new(Category::Affiliate);
        let id = vocab.push(VocabularyEntry::new("One", &["one", "ONE"])).unwrap();
        let r = HashResolver::new([vocab]).unwrap();
        assert_eq!(r.resolve(Category::Affiliate, "One"), id);
    }

    #[test]
    fn test_missing_vocabulary_resolves_unset() {
        let r = HashResolver::new([]).unwrap();
        assert!(r.resolve(Category::Market, "NEW YORK").is_unset());
    }

    #[test]
    fn test_vocabulary_len_excludes_sentinel() {
        let mut vocab = Vocabulary::new(Category::State);
        assert_eq!(vocab.len(), 0);
        assert!(vocab.is_empty());
        vocab.push(VocabularyEntry::new("NY", &["New York"])).unwrap();
        assert_eq!(vocab.len(), 1);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_push_rejects_id_overflow() {
        let mut vocab = Vocabulary::new(Category::Affiliate);
        for _ in 0..u16::MAX {
            vocab.push(VocabularyEntry::new("X", &[])).unwrap();
        }
        assert_eq!(vocab.len(), usize::from(u16::MAX));
        let err = vocab.push(VocabularyEntry::new("Y", &[])).unwrap_err();
        assert!(matches!(err, MungeError::Config(_)));
        assert_eq!(vocab.len(), usize::from(u16::MAX));
    }

    #[test]
    fn test_char_map_normalize() {
        let map = Category::Market.char_map();
        assert_eq!(map.normalize("Dallas-Ft. Worth"), "dallasftworth");
    }
}
