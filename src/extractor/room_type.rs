//! Room type resolution: synonym expansion, board-phrase removal, then a
//! longest-phrase-first scan over the closed vocabulary. Total over any
//! input; unresolved names yield the `unknown` sentinel.

use super::vocab;
use crate::model::UNKNOWN;

pub fn extract_room_type(name: &str) -> String {
    let mut text = name.to_string();
    for (pattern, canonical) in vocab::ROOM_TYPE_SYNONYMS.iter() {
        text = pattern.replace_all(&text, *canonical).into_owned();
    }
    // "room only" is a board basis, not a room type.
    let text = vocab::ROOM_ONLY.replace_all(&text, " ");

    for (canonical, pattern) in vocab::ROOM_TYPE_PATTERNS.iter() {
        if pattern.is_match(&text) {
            return (*canonical).to_string();
        }
    }

    // A name like "bedroom 12" still talks about a room even though no
    // vocabulary phrase matches on a word boundary.
    if text.contains("room") {
        return "room".to_string();
    }

    UNKNOWN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_phrase_wins_over_bare_room() {
        assert_eq!(extract_room_type("standard double room"), "double room");
        assert_eq!(extract_room_type("family room with balcony"), "family room");
    }

    #[test]
    fn bare_bed_count_words_collapse_to_room_phrases() {
        assert_eq!(extract_room_type("standard double"), "double room");
        assert_eq!(extract_room_type("cozy single"), "single room");
    }

    #[test]
    fn synonyms_resolve_before_matching() {
        assert_eq!(extract_room_type("dbl room city side"), "double room");
        assert_eq!(extract_room_type("modern apt downtown"), "apartment");
    }

    #[test]
    fn room_only_board_phrase_does_not_leak_a_type() {
        assert_eq!(extract_room_type("suite room only"), "suite");
        assert_eq!(extract_room_type("room only"), UNKNOWN);
    }

    #[test]
    fn substring_fallback_catches_compound_words() {
        assert_eq!(extract_room_type("hideaway bedroom"), "room");
    }

    #[test]
    fn unresolved_input_is_unknown() {
        assert_eq!(extract_room_type("something else entirely"), UNKNOWN);
        assert_eq!(extract_room_type(""), UNKNOWN);
    }

    #[test]
    fn word_boundaries_prevent_partial_hits() {
        // "doubledouble" must not match the bare "double" entry
        assert_eq!(extract_room_type("doubledouble"), UNKNOWN);
    }
}
