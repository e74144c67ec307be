//! Locale-aware, case-insensitive string collation.
//!
//! Names and locations are ordered with the Unicode Collation Algorithm at
//! primary strength (CLDR root order): case and accents are ignored, so
//! `Coyoacán` sits next to `Coyoacan`, letters such as `Ł` or `Ø` sort beside
//! their base letter, and punctuation like `’` sorts before letters. Strings
//! that differ only in case or accents compare as equal, so a stable sort
//! keeps their input order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

thread_local! {
    static COLLATION: Collation = Collation::new();
}

/// A primary-strength collator.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    /// Loads the root collation data.
    ///
    /// If the data cannot be loaded, comparisons fall back to
    /// [`fallback_key`] and a warning is logged.
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);

        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                tracing::warn!(error = %e, "collation data unavailable, using accent-folded keys");
                Self { collator: None }
            }
        }
    }

    /// Compares two strings at primary strength.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => fallback_key(a).cmp(&fallback_key(b)),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::new()
    }
}

/// Accent- and case-folded key: NFD, combining marks dropped, lower-cased.
pub fn fallback_key(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase()
}

/// Compares two strings with this thread's shared collator.
pub fn compare(a: &str, b: &str) -> Ordering {
    COLLATION.with(|collation| collation.compare(a, b))
}
