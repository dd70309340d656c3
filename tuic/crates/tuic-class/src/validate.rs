//! Class validation: alias fixes, edit-distance suggestions, and
//! position-annotated class lists for editor tooling.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::tables::STATIC_CLASSES;
use crate::translate::parse_class;

/// Common misspellings and near-misses mapped to their canonical class
static ALIASES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("flex-column", "flex-col");
    map.insert("flex-columns", "flex-col");
    map.insert("flex-rows", "flex-row");
    map.insert("bold", "font-bold");
    map.insert("dim", "font-dim");
    map.insert("faint", "font-dim");
    map.insert("center", "text-center");
    map.insert("grow", "flex-grow");
    map.insert("shrink", "flex-shrink");
    map.insert("rounded", "border-rounded");
    map.insert("padding-top", "pt-1");
    map.insert("padding-right", "pr-1");
    map.insert("padding-bottom", "pb-1");
    map.insert("padding-left", "pl-1");
    map.insert("margin-top", "mt-1");
    map.insert("margin-right", "mr-1");
    map.insert("margin-bottom", "mb-1");
    map.insert("margin-left", "ml-1");
    map
});

/// Suggestions farther than this edit distance are considered unrelated
const SUGGESTION_DISTANCE_MAX: usize = 2;

/// Result of validating a single class
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    /// True when the class is recognized by the translator
    pub valid: bool,
    /// The class that was validated
    pub class: String,
    /// A likely intended class, when one is close enough
    pub suggestion: Option<String>,
}

/// A class token with its source position, for advisory tooling
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassPosition {
    pub class: String,
    /// 1-based byte column of the first character
    pub start_col: u32,
    /// 1-based byte column just past the last character
    pub end_col: u32,
    pub valid: bool,
    pub suggestion: Option<String>,
}

/// Validate a single class.
///
/// Unknown classes first consult the alias table, then fall back to the
/// nearest known class name by Levenshtein distance; unrelated strings get
/// no suggestion.
pub fn validate_class(class: &str) -> Validation {
    if parse_class(class).is_some() {
        return Validation {
            valid: true,
            class: class.to_string(),
            suggestion: None,
        };
    }

    if let Some(target) = ALIASES.get(class) {
        return Validation {
            valid: false,
            class: class.to_string(),
            suggestion: Some((*target).to_string()),
        };
    }

    let suggestion = STATIC_CLASSES
        .keys()
        .map(|candidate| (levenshtein(class, candidate), candidate))
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE_MAX)
        .map(|(_, candidate)| candidate.clone());

    Validation {
        valid: false,
        class: class.to_string(),
        suggestion,
    }
}

/// Tokenize a class string and validate each token, mapping every token to
/// its 1-based source columns.
///
/// `attr_start_col` is the column of the first byte of the class string in
/// its source line; whitespace runs between tokens are skipped but counted
/// in the column math.
pub fn parse_classes_with_positions(classes: &str, attr_start_col: u32) -> Vec<ClassPosition> {
    let bytes = classes.as_bytes();
    let mut results = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let class = &classes[start..i];
        let validation = validate_class(class);
        results.push(ClassPosition {
            class: class.to_string(),
            start_col: attr_start_col + start as u32,
            end_col: attr_start_col + i as u32,
            valid: validation.valid,
            suggestion: validation.suggestion,
        });
    }

    results
}

/// Levenshtein edit distance, two-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}
