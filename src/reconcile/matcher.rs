use crate::diagnostics::Diagnostics;
use crate::reconcile::lookup::normalize_name;
use crate::reconcile::lookup::LookupTable;
use strsim::jaro_winkler;

/// How employee names are matched against lookup keys.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum NameMatching {
    /// Trimmed, lower-cased names must be identical.
    #[default]
    Exact,
    /// Exact first; on a miss, the most similar key (Jaro-Winkler) at or above
    /// `min_similarity` is used and reported as a low-confidence match.
    Fuzzy { min_similarity: f64 },
}

/// A resolved lookup value.
#[derive(Clone, Debug, PartialEq)]
pub struct NameMatch {
    pub value: f64,
    /// Normalized key that matched
    pub key: String,
    /// 1.0 for exact matches
    pub similarity: f64,
    pub exact: bool,
}

/// Resolves employee names against a lookup table under a matching policy.
pub struct NameMatcher<'a> {
    matching: NameMatching,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> NameMatcher<'a> {
    pub fn new(matching: NameMatching, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { matching, diagnostics }
    }

    pub fn resolve(&self, lookup: &LookupTable, name: &str) -> Option<NameMatch> {
        let normalized = normalize_name(name);
        if let Some(value) = lookup.get(&normalized) {
            return Some(NameMatch { value, key: normalized, similarity: 1.0, exact: true });
        }
        let NameMatching::Fuzzy { min_similarity } = self.matching else {
            return None;
        };
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(&str, f64, f64)> = None;
        for (key, value) in lookup.iter() {
            let similarity = jaro_winkler(&normalized, key);
            if similarity >= min_similarity && best.map(|(_, _, score)| similarity > score).unwrap_or(true) {
                best = Some((key, value, similarity));
            }
        }
        let (key, value, similarity) = best?;
        self.diagnostics.fuzzy_match(lookup.kind(), name, key, similarity);
        Some(NameMatch { value, key: key.to_owned(), similarity, exact: false })
    }
}
