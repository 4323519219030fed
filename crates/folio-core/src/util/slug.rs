//! Stateful slug generation.
//!
//! A [`Slugger`] turns free-form strings (labels, headings, composed names)
//! into URL- and file-safe slugs, and remembers every slug it has handed
//! out so that repeated inputs still produce distinct results.

use std::collections::HashMap;

/// Uniqueness-guaranteeing slug generator.
///
/// Each instance tracks its own set of issued slugs; create one per scope
/// in which slugs must not collide.
///
/// # Examples
///
/// ```
/// use folio_core::Slugger;
///
/// let mut slugs = Slugger::new();
/// assert_eq!(slugs.slug("Getting Started"), "getting-started");
/// assert_eq!(slugs.slug("Getting Started"), "getting-started-1");
/// assert_eq!(slugs.slug("Getting Started"), "getting-started-2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a slugger with no recorded slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `value`, appending `-N` when the result was already issued.
    pub fn slug(&mut self, value: &str) -> String {
        let original = slugify(value);
        let mut result = original.clone();

        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(original.clone()).or_insert(0);
            *count += 1;
            result = format!("{original}-{count}");
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }

    /// Forget every slug issued so far.
    pub fn reset(&mut self) {
        self.occurrences.clear();
    }
}

/// Lowercase, drop punctuation, and turn spaces into hyphens.
///
/// Alphanumerics (any script), `-` and `_` are kept as is. Runs of spaces
/// are not collapsed, so `"a  b"` becomes `"a--b"`.
fn slugify(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
