//! Final report shaping. A pure projection of the engine's state; no
//! matching decisions are made here.

use std::collections::HashSet;

use crate::model::{
    MappingReport, MappingResult, MatchCounts, SupplierRoom, UnmappedRooms, NO_UNMAPPED_MESSAGE,
};

pub fn build_report(
    supplier_rooms: &[SupplierRoom],
    results: Vec<MappingResult>,
    mapped_ids: &HashSet<String>,
    pass_counts: [usize; 3],
) -> MappingReport {
    let unmapped: Vec<SupplierRoom> = supplier_rooms
        .iter()
        .filter(|room| !mapped_ids.contains(&room.supplier_room_id))
        .cloned()
        .collect();

    let total_supplier_rooms = supplier_rooms.len();
    let unmapped_supplier_rooms = unmapped.len();
    let counts = MatchCounts {
        total_supplier_rooms,
        first_pass_matches: pass_counts[0],
        second_pass_matches: pass_counts[1],
        third_pass_matches: pass_counts[2],
        mapped_supplier_rooms: total_supplier_rooms - unmapped_supplier_rooms,
        unmapped_supplier_rooms,
    };

    let unmapped_rooms = if unmapped.is_empty() {
        UnmappedRooms::Empty {
            message: NO_UNMAPPED_MESSAGE,
        }
    } else {
        UnmappedRooms::Rooms(unmapped)
    };

    MappingReport {
        results,
        unmapped_rooms,
        counts,
    }
}
