//! The greedy three-pass assignment engine. Reference rooms are processed in
//! catalog order, supplier rooms scanned in catalog order, and the first
//! supplier room satisfying the pass predicate is claimed immediately. A
//! claimed supplier room never re-enters the pool: the assignment is
//! deterministic and explainable, not globally optimal.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::extractor::extract_attributes;
use crate::matcher::comparator::compare;
use crate::matcher::passes::PASSES;
use crate::matcher::report::build_report;
use crate::model::{
    MapRequest, MappingReport, MappingResult, MatchOutcome, ReferenceCatalog, ReferenceRoom,
    RoomAttributes, RoomMatch, SupplierRoom, ValidationError,
};

/// Anonymous placeholder entries ("Room #12") carry nothing to match on and
/// are excluded before any pass.
static PLACEHOLDER_ROOM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^room\s*#\d+$").unwrap());

/// Trait defining the interface for a room mapper.
pub trait RoomMapper {
    fn map_rooms(&self, request: &MapRequest) -> Result<MappingReport, ValidationError>;
}

pub struct MapperImpl;

impl MapperImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MapperImpl {
    fn default() -> Self {
        Self::new()
    }
}

struct PreparedReference {
    room: ReferenceRoom,
    attributes: RoomAttributes,
}

struct PreparedSupplier {
    room: SupplierRoom,
    attributes: RoomAttributes,
}

impl RoomMapper for MapperImpl {
    fn map_rooms(&self, request: &MapRequest) -> Result<MappingReport, ValidationError> {
        let reference_catalog = request
            .reference_catalog
            .first()
            .ok_or(ValidationError::MissingReferenceCatalog)?;
        let supplier_catalog = request
            .input_catalog
            .first()
            .ok_or(ValidationError::MissingSupplierCatalog)?;

        let references: Vec<PreparedReference> = reference_catalog
            .reference_room_info
            .iter()
            .filter(|room| !PLACEHOLDER_ROOM.is_match(room.room_name.trim()))
            .map(|room| PreparedReference {
                room: room.clone(),
                attributes: extract_attributes(&room.room_name),
            })
            .collect();
        let suppliers: Vec<PreparedSupplier> = supplier_catalog
            .supplier_room_info
            .iter()
            .map(|room| PreparedSupplier {
                room: room.clone(),
                attributes: extract_attributes(&room.supplier_room_name),
            })
            .collect();

        info!(
            reference_rooms = references.len(),
            supplier_rooms = suppliers.len(),
            "mapping catalogs"
        );

        let mut mapped_ids: HashSet<String> = HashSet::new();
        let mut results: Vec<MappingResult> = Vec::new();
        let mut pass_counts = [0usize; 3];

        for (pass_index, pass) in PASSES.iter().enumerate() {
            for reference in &references {
                for supplier in &suppliers {
                    if mapped_ids.contains(&supplier.room.supplier_room_id) {
                        continue;
                    }
                    let outcome = compare(&reference.attributes, &supplier.attributes);
                    if !pass.accepts(&outcome) {
                        continue;
                    }
                    record_match(&mut results, reference_catalog, reference, supplier, pass.label(), outcome);
                    mapped_ids.insert(supplier.room.supplier_room_id.clone());
                    pass_counts[pass_index] += 1;
                }
            }
            debug!(pass = pass.label(), matched = pass_counts[pass_index], "pass complete");
        }

        let supplier_rooms: Vec<SupplierRoom> =
            suppliers.iter().map(|supplier| supplier.room.clone()).collect();
        Ok(build_report(&supplier_rooms, results, &mapped_ids, pass_counts))
    }
}

fn record_match(
    results: &mut Vec<MappingResult>,
    catalog: &ReferenceCatalog,
    reference: &PreparedReference,
    supplier: &PreparedSupplier,
    pass: &'static str,
    outcome: MatchOutcome,
) {
    let matched = RoomMatch {
        pass,
        supplier_room_id: supplier.room.supplier_room_id.clone(),
        supplier_room_name: supplier.room.supplier_room_name.clone(),
        match_outcome: outcome,
        match_attributes: supplier.attributes.clone(),
    };

    if let Some(entry) = results
        .iter_mut()
        .find(|result| result.room_id == reference.room.room_id)
    {
        entry.mapped_rooms.push(matched);
    } else {
        results.push(MappingResult {
            property_name: catalog.property_name.clone(),
            property_id: catalog.property_id.clone(),
            room_id: reference.room.room_id.clone(),
            room_name: reference.room.room_name.clone(),
            clean_room_name: reference.attributes.normalized_name.clone(),
            room_description: reference.attributes.clone(),
            mapped_rooms: vec![matched],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Outcome, SupplierCatalog, UnmappedRooms};

    fn request(reference_names: &[(&str, &str)], supplier_names: &[(&str, &str)]) -> MapRequest {
        MapRequest {
            reference_catalog: vec![ReferenceCatalog {
                property_name: "Harbour Hotel".to_string(),
                property_id: "prop-1".to_string(),
                reference_room_info: reference_names
                    .iter()
                    .map(|(id, name)| ReferenceRoom {
                        room_id: id.to_string(),
                        room_name: name.to_string(),
                    })
                    .collect(),
            }],
            input_catalog: vec![SupplierCatalog {
                supplier_id: "supplier-1".to_string(),
                supplier_room_info: supplier_names
                    .iter()
                    .map(|(id, name)| SupplierRoom {
                        supplier_room_id: id.to_string(),
                        supplier_room_name: name.to_string(),
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn identical_names_match_in_the_first_pass() {
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Deluxe King Room")],
                &[("s1", "Deluxe King Room")],
            ))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        let matched = &report.results[0].mapped_rooms[0];
        assert_eq!(matched.pass, "First Pass");
        assert_eq!(matched.match_outcome.room_type, Outcome::Full);
        assert_eq!(matched.match_outcome.room_category, Outcome::Full);
        assert_eq!(report.counts.first_pass_matches, 1);
    }

    #[test]
    fn parenthetical_bed_details_still_pair_the_rooms() {
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Standard Double Room")],
                &[("s1", "Standard Room with 2 Double Beds (Double Bed)")],
            ))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        let matched = &report.results[0].mapped_rooms[0];
        assert_eq!(matched.match_outcome.room_type, Outcome::Full);
        assert_eq!(matched.match_outcome.room_category, Outcome::Full);
        assert_eq!(matched.match_outcome.bed_types, Outcome::SupplierOnly);
        assert_eq!(matched.pass, "Third Pass");
    }

    #[test]
    fn placeholder_reference_rooms_never_participate() {
        let report = MapperImpl::new()
            .map_rooms(&request(&[("r1", "Room #14")], &[("s1", "Room #14")]))
            .unwrap();

        assert!(report.results.is_empty());
        assert_eq!(report.counts.unmapped_supplier_rooms, 1);
    }

    #[test]
    fn supplier_only_category_is_a_third_pass_match() {
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Hideaway Bedroom")],
                &[("s1", "Boutique Room")],
            ))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        let matched = &report.results[0].mapped_rooms[0];
        assert_eq!(matched.pass, "Third Pass");
        assert_eq!(matched.match_outcome.room_category, Outcome::SupplierOnly);
    }

    #[test]
    fn first_reference_room_claims_a_contested_supplier_room() {
        // both reference rooms would accept s1 in the first pass; catalog
        // order decides, and the loser stays unmatched
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Deluxe King Room"), ("r2", "Deluxe King Room")],
                &[("s1", "Deluxe King Room")],
            ))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].room_id, "r1");
        assert_eq!(report.counts.mapped_supplier_rooms, 1);
    }

    #[test]
    fn a_supplier_room_is_claimed_at_most_once() {
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Deluxe King Room"), ("r2", "Superior Suite")],
                &[
                    ("s1", "Deluxe King Room"),
                    ("s2", "Deluxe King Room"),
                    ("s3", "Superior Suite"),
                ],
            ))
            .unwrap();

        let mut seen = HashSet::new();
        for result in &report.results {
            for matched in &result.mapped_rooms {
                assert!(seen.insert(matched.supplier_room_id.clone()));
            }
        }
        assert_eq!(
            report.counts.mapped_supplier_rooms + report.counts.unmapped_supplier_rooms,
            report.counts.total_supplier_rooms
        );
    }

    #[test]
    fn one_reference_room_can_accumulate_several_matches() {
        let report = MapperImpl::new()
            .map_rooms(&request(
                &[("r1", "Deluxe King Room")],
                &[("s1", "Deluxe King Room"), ("s2", "Deluxe King Room")],
            ))
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].mapped_rooms.len(), 2);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = request(
            &[("r1", "Deluxe King Room"), ("r2", "Standard Double Room")],
            &[
                ("s1", "Standard Room with 2 Double Beds (Double Bed)"),
                ("s2", "Deluxe King Room"),
                ("s3", "Budget Cabin"),
            ],
        );
        let mapper = MapperImpl::new();
        let first = serde_json::to_value(mapper.map_rooms(&input).unwrap()).unwrap();
        let second = serde_json::to_value(mapper.map_rooms(&input).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_catalogs_are_rejected() {
        let mut missing_reference = request(&[], &[("s1", "Suite")]);
        missing_reference.reference_catalog.clear();
        assert!(matches!(
            MapperImpl::new().map_rooms(&missing_reference),
            Err(ValidationError::MissingReferenceCatalog)
        ));

        let mut missing_supplier = request(&[("r1", "Suite")], &[]);
        missing_supplier.input_catalog.clear();
        assert!(matches!(
            MapperImpl::new().map_rooms(&missing_supplier),
            Err(ValidationError::MissingSupplierCatalog)
        ));
    }

    #[test]
    fn empty_room_lists_yield_empty_results_with_zero_counts() {
        let report = MapperImpl::new().map_rooms(&request(&[], &[])).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.counts.total_supplier_rooms, 0);
        assert_eq!(report.counts.mapped_supplier_rooms, 0);
        assert!(matches!(report.unmapped_rooms, UnmappedRooms::Empty { .. }));
    }
}
