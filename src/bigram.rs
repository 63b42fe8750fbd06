//! Boundary-anchored character bigrams.
//!
//! A term `t` is wrapped as `$t$` and cut into every contiguous two-character
//! window, left to right. The `$` sentinel marks the term boundaries, so
//! `$c` means "starts with c" and `t$` means "ends with t". A term of `n`
//! characters yields `n + 1` bigrams. Windows are taken over `char`s, not
//! bytes, so non-ASCII terms produce well-formed bigrams.

use crate::error::{BoolSearchError, Result};

/// Reserved boundary character. Never part of a legal term.
pub const SENTINEL: char = '$';

/// Generate the sentinel-wrapped bigrams of `term`, in order, duplicates included.
///
/// Fails with [`BoolSearchError::MalformedTerm`] if the term is empty or
/// contains [`SENTINEL`].
///
/// ```
/// use boolsearch::bigram::generate_bigrams;
///
/// assert_eq!(generate_bigrams("cat").unwrap(), vec!["$c", "ca", "at", "t$"]);
/// ```
pub fn generate_bigrams(term: &str) -> Result<Vec<String>> {
    if term.is_empty() {
        return Err(BoolSearchError::malformed_term("empty term"));
    }
    if term.contains(SENTINEL) {
        return Err(BoolSearchError::malformed_term(format!(
            "term '{term}' contains the reserved sentinel '{SENTINEL}'"
        )));
    }

    let mut wrapped = String::with_capacity(term.len() + 2);
    wrapped.push(SENTINEL);
    wrapped.push_str(term);
    wrapped.push(SENTINEL);

    Ok(windows(&wrapped))
}

/// Bigrams of a wildcard prefix fragment, anchored at the term start only.
///
/// `"s"` gives `["$s"]`; an empty prefix gives nothing since `"$"` has no
/// two-character window.
pub fn prefix_bigrams(prefix: &str) -> Vec<String> {
    let mut anchored = String::with_capacity(prefix.len() + 1);
    anchored.push(SENTINEL);
    anchored.push_str(prefix);
    windows(&anchored)
}

/// Bigrams of a wildcard suffix fragment, anchored at the term end only.
pub fn suffix_bigrams(suffix: &str) -> Vec<String> {
    let mut anchored = String::with_capacity(suffix.len() + 1);
    anchored.push_str(suffix);
    anchored.push(SENTINEL);
    windows(&anchored)
}

fn windows(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|pair| pair.iter().collect()).collect()
}
