//! Containment scans over the category, board and amenity vocabularies.

use super::vocab;
use crate::model::UNKNOWN;

/// Every category phrase contained in the name, vocabulary order.
/// Categories are not mutually exclusive.
pub fn extract_categories(name: &str) -> Vec<String> {
    vocab::ROOM_CATEGORIES
        .iter()
        .filter(|category| name.contains(*category))
        .map(|category| category.to_string())
        .collect()
}

/// First board phrase contained in the name, declared order.
pub fn extract_board(name: &str) -> String {
    vocab::BOARD_TYPES
        .iter()
        .find(|board| name.contains(*board))
        .map_or_else(|| UNKNOWN.to_string(), |board| board.to_string())
}

/// Every amenity phrase contained in the name.
pub fn extract_amenities(name: &str) -> Vec<String> {
    vocab::AMENITIES
        .iter()
        .filter(|amenity| name.contains(*amenity))
        .map(|amenity| amenity.to_string())
        .collect()
}
