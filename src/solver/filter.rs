//! Candidate filtering
//!
//! The solution pattern already keeps present letters out of the positions
//! they were tried at; what it cannot express is that they must appear
//! somewhere. That last check happens here.

use crate::core::Constraints;

/// Keep the words that contain every known-present letter at least once
///
/// # Examples
/// ```
/// use wordle_helper::core::Constraints;
/// use wordle_helper::solver::filter_candidates;
///
/// let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
/// let words = vec!["flail".to_string(), "flick".to_string()];
/// assert_eq!(filter_candidates(words, &constraints), vec!["flail"]);
/// ```
#[must_use]
pub fn filter_candidates(words: Vec<String>, constraints: &Constraints) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| contains_present_letters(word, constraints))
        .collect()
}

fn contains_present_letters(word: &str, constraints: &Constraints) -> bool {
    constraints
        .present_letters()
        .all(|letter| word.contains(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn keeps_words_with_all_present_letters() {
        let constraints = Constraints::from_attempts(&["Fundi?", "ra?the"]);
        let kept = filter_candidates(words(&["flail", "flick", "folia", "fakes"]), &constraints);

        assert_eq!(kept, vec!["flail", "folia"]);
    }

    #[test]
    fn no_present_letters_keeps_everything() {
        let constraints = Constraints::from_attempts(&["CRANE"]);
        let kept = filter_candidates(words(&["crane", "slate"]), &constraints);

        assert_eq!(kept, vec!["crane", "slate"]);
    }

    #[test]
    fn position_of_present_letter_is_not_checked_here() {
        // `a` was tried at 1; the pattern excludes that, the filter only needs `a` somewhere
        let constraints = Constraints::from_attempts(&["a?bcde"]);
        let kept = filter_candidates(words(&["axxxx", "xxxxa", "xxxxx"]), &constraints);

        assert_eq!(kept, vec!["axxxx", "xxxxa"]);
    }

    #[test]
    fn empty_input() {
        let constraints = Constraints::from_attempts(&["a?bcde"]);
        assert!(filter_candidates(Vec::new(), &constraints).is_empty());
    }
}
