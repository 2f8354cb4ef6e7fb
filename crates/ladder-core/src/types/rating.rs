//! Credit rating scale.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Ordinal score assigned to rating labels absent from the scale.
pub const UNRATED_SCORE: u32 = 0;

static SCALE: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("AAA", 99),
        ("AA+", 98),
        ("AA", 97),
        ("AA-", 96),
        ("A+", 95),
        ("A", 94),
        ("A-", 93),
        ("BBB+", 92),
        ("BBB", 91),
        ("BBB-", 90),
        ("NR", 50),
        ("--", 50),
    ])
});

/// Process-wide mapping from S&P rating labels to ordinal scores.
///
/// Higher scores mean better credit quality. The scale covers the
/// investment-grade notches the screening query can return, plus the
/// not-rated placeholders (`NR`, `--`) at a fixed mid-low score. Labels
/// outside the scale resolve to [`UNRATED_SCORE`].
///
/// # Example
///
/// ```rust
/// use ladder_core::types::RatingScale;
///
/// assert!(RatingScale::score("AA+") > RatingScale::score("BBB"));
/// assert_eq!(RatingScale::score("NR"), 50);
/// assert_eq!(RatingScale::score("junk"), 0);
/// ```
pub struct RatingScale;

impl RatingScale {
    /// Returns the ordinal score for a rating label.
    #[must_use]
    pub fn score(label: &str) -> u32 {
        SCALE.get(label.trim()).copied().unwrap_or(UNRATED_SCORE)
    }

    /// Returns true if the label is present in the scale.
    #[must_use]
    pub fn is_known(label: &str) -> bool {
        SCALE.contains_key(label.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(RatingScale::score("AAA"), 99);
        assert_eq!(RatingScale::score("BBB-"), 90);
        assert_eq!(RatingScale::score("NR"), 50);
        assert_eq!(RatingScale::score("--"), 50);
    }

    #[test]
    fn test_ordering_tracks_quality() {
        assert!(RatingScale::score("AAA") > RatingScale::score("AA+"));
        assert!(RatingScale::score("A-") > RatingScale::score("BBB+"));
        assert!(RatingScale::score("BBB-") > RatingScale::score("NR"));
    }

    #[test]
    fn test_unknown_labels_get_default() {
        assert_eq!(RatingScale::score("CCC"), UNRATED_SCORE);
        assert_eq!(RatingScale::score(""), UNRATED_SCORE);
        assert!(!RatingScale::is_known("CCC"));
    }

    #[test]
    fn test_label_trimming() {
        assert_eq!(RatingScale::score(" AA "), 97);
    }
}
