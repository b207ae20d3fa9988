// Extractor module: turns one raw room name into a structured,
// comparable attribute snapshot. Pure functions over process-wide
// vocabulary tables; no shared mutable state.

pub mod bed;
pub mod keywords;
pub mod room_type;
pub mod view;
pub mod vocab;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{BedCount, RoomAttributes, UNKNOWN};
use crate::normalizer::normalize;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Derives the full attribute snapshot for one raw room name.
/// Deterministic and total: unrecognized text resolves to sentinels,
/// never to an error.
pub fn extract_attributes(raw_name: &str) -> RoomAttributes {
    let normalized = normalize(raw_name);

    let mut room_type = room_type::extract_room_type(&normalized);
    let room_category = keywords::extract_categories(&normalized);
    if room_type == UNKNOWN && !room_category.is_empty() {
        // A category-bearing name is assumed to describe some room.
        room_type = "room".to_string();
    }

    let board = keywords::extract_board(&normalized);
    let bed_types = bed::extract_bed_types(&normalized);
    let amenities = keywords::extract_amenities(&normalized);
    let view = view::extract_view(
        &normalized,
        &room_type,
        &board,
        &room_category,
        &bed_types,
        &amenities,
    );

    let other = residual_tokens(
        &normalized,
        &room_type,
        &room_category,
        &board,
        &view,
        &bed_types,
        &amenities,
    );

    RoomAttributes {
        normalized_name: normalized,
        room_type,
        room_category,
        board,
        view,
        bed_types,
        amenities,
        other,
    }
}

/// Best-effort diagnostic: tokens of the normalized name that do not appear
/// anywhere in the concatenated textual forms of the extracted attributes.
/// Substring containment, not token equality, so vocabulary overlap can
/// under-count.
fn residual_tokens(
    normalized: &str,
    room_type: &str,
    categories: &[String],
    board: &str,
    view: &str,
    bed_types: &[BedCount],
    amenities: &[String],
) -> Vec<String> {
    let beds: Vec<String> = bed_types
        .iter()
        .map(|bed| {
            if bed.bed_type == UNKNOWN {
                bed.bed_type.clone()
            } else {
                format!("{} {}", bed.count, bed.bed_type)
            }
        })
        .collect();
    let combined = format!(
        "{} {} {} {} {} {}",
        room_type,
        categories.join(" "),
        board,
        view,
        beds.join(" "),
        amenities.join(" ")
    );

    WORD.find_iter(normalized)
        .map(|token| token.as_str())
        .filter(|token| !combined.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deluxe_king_room_decomposes_fully() {
        let attributes = extract_attributes("Deluxe King Room");
        assert_eq!(attributes.normalized_name, "deluxe king room");
        assert_eq!(attributes.room_type, "room");
        assert_eq!(attributes.room_category, vec!["deluxe"]);
        assert_eq!(attributes.board, UNKNOWN);
        assert_eq!(attributes.view, UNKNOWN);
        assert_eq!(attributes.bed_types[0].bed_type, "king");
        assert_eq!(attributes.bed_types[0].count, 1);
        assert!(attributes.amenities.is_empty());
        assert!(attributes.other.is_empty());
    }

    #[test]
    fn category_forces_room_type_when_unresolved() {
        let attributes = extract_attributes("Boutique Hideaway");
        assert_eq!(attributes.room_category, vec!["boutique"]);
        assert_eq!(attributes.room_type, "room");
    }

    #[test]
    fn parenthetical_bed_details_survive_the_pipeline() {
        let attributes = extract_attributes("Standard Room with 2 Double Beds (Double Bed)");
        assert_eq!(attributes.room_type, "double room");
        assert_eq!(attributes.room_category, vec!["standard"]);
        assert_eq!(
            attributes.bed_types,
            vec![BedCount {
                bed_type: "double".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn residual_tokens_surface_unmodeled_words() {
        let attributes = extract_attributes("Deluxe Room near the harbour");
        assert!(attributes.other.contains(&"near".to_string()));
        assert!(attributes.other.contains(&"harbour".to_string()));
        assert!(!attributes.other.contains(&"deluxe".to_string()));
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_attributes("Executive Suite, Ocean View (1 King Bed)");
        let second = extract_attributes("Executive Suite, Ocean View (1 King Bed)");
        assert_eq!(first.normalized_name, second.normalized_name);
        assert_eq!(first.room_type, second.room_type);
        assert_eq!(first.view, second.view);
        assert_eq!(first.bed_types, second.bed_types);
        assert_eq!(first.other, second.other);
    }

    #[test]
    fn every_output_is_vocabulary_or_sentinel() {
        let attributes = extract_attributes("Superior Twin Room, city view, breakfast included");
        let type_labels: Vec<&str> = vocab::ROOM_TYPE_PATTERNS
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert!(type_labels.contains(&attributes.room_type.as_str()));
        assert!(vocab::BOARD_TYPES.contains(&attributes.board.as_str()));
        assert!(vocab::VIEWS.contains(&attributes.view.as_str()));
        for category in &attributes.room_category {
            assert!(vocab::ROOM_CATEGORIES.contains(&category.as_str()));
        }
    }
}
