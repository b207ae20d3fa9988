//! View extraction. The vocabulary-driven path is primary; the dynamic
//! synthesis fallback recognizes unseen "<something> view" phrases without a
//! vocabulary update, at the cost of occasional false positives.

use std::collections::HashSet;

use super::vocab;
use crate::model::{BedCount, UNKNOWN};

pub fn extract_view(
    name: &str,
    room_type: &str,
    board: &str,
    categories: &[String],
    bed_types: &[BedCount],
    amenities: &[String],
) -> String {
    // Phase 1: direct containment, first vocabulary hit wins.
    for view in vocab::VIEWS {
        if name.contains(view) {
            return (*view).to_string();
        }
    }

    // Phase 2: synthesize from the 1-2 words preceding a "view" token,
    // unless any of them already belongs to another attribute.
    let words: Vec<&str> = name.split_whitespace().collect();
    let Some(view_index) = words.iter().position(|word| word.contains("view")) else {
        return UNKNOWN.to_string();
    };
    let preceding = &words[view_index.saturating_sub(2)..view_index];
    if preceding.is_empty() {
        return UNKNOWN.to_string();
    }

    let mut known: HashSet<&str> = vocab::VIEWS.iter().copied().collect();
    known.extend(room_type.split_whitespace());
    known.extend(board.split_whitespace());
    known.extend(categories.iter().map(String::as_str));
    known.extend(bed_types.iter().map(|bed| bed.bed_type.as_str()));
    known.extend(amenities.iter().map(String::as_str));

    if preceding.iter().any(|word| known.contains(word)) {
        return UNKNOWN.to_string();
    }

    format!("{} view", preceding.join(" "))
}
