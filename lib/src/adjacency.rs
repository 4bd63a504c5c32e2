use std::iter::zip;
use std::sync::Arc;

/// Returns `true` iff the two words have the same length and differ in exactly one position.
///
/// Letters are compared ignoring ASCII case. Identical words are not one letter different.
///
/// ```
/// use rs_word_ladder::is_one_letter_different;
///
/// assert!(is_one_letter_different("CAT", "cot"));
/// assert!(!is_one_letter_different("CAT", "CAT"));
/// assert!(!is_one_letter_different("CAT", "DOG"));
/// assert!(!is_one_letter_different("CAT", "CATS"));
/// ```
pub fn is_one_letter_different(first: &str, second: &str) -> bool {
    if first.is_empty() || second.is_empty() || first.chars().count() != second.chars().count()
    {
        return false;
    }
    let mut differences = 0;
    for (a, b) in zip(first.chars(), second.chars()) {
        if !a.eq_ignore_ascii_case(&b) {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// Counts the positions at which two equal-length words differ.
///
/// Returns `None` if the lengths differ.
pub fn letter_differences(first: &str, second: &str) -> Option<usize> {
    if first.chars().count() != second.chars().count() {
        return None;
    }
    Some(
        zip(first.chars(), second.chars())
            .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
            .count(),
    )
}

/// Returns every candidate that is one letter different from `word`, in iteration order.
pub fn neighbors<'a, I>(word: &str, candidates: I) -> Vec<Arc<str>>
where
    I: IntoIterator<Item = &'a Arc<str>>,
{
    candidates
        .into_iter()
        .filter(|candidate| candidate.len() == word.len())
        .filter(|candidate| is_one_letter_different(word, candidate))
        .map(Arc::clone)
        .collect()
}
