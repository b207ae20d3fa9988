// Core structs: catalogs, room attributes, match outcomes, mapping report
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel for attributes the extractors could not resolve.
pub const UNKNOWN: &str = "unknown";

pub const NO_UNMAPPED_MESSAGE: &str = "There are no unmapped rooms";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    #[serde(default)]
    pub reference_catalog: Vec<ReferenceCatalog>,
    #[serde(default)]
    pub input_catalog: Vec<SupplierCatalog>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCatalog {
    pub property_name: String,
    pub property_id: String,
    pub reference_room_info: Vec<ReferenceRoom>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRoom {
    pub room_id: String,
    pub room_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCatalog {
    pub supplier_id: String,
    pub supplier_room_info: Vec<SupplierRoom>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRoom {
    pub supplier_room_id: String,
    pub supplier_room_name: String,
}

/// Structured attribute snapshot derived from one raw room name.
/// Computed once per room, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAttributes {
    pub normalized_name: String,
    pub room_type: String,
    pub room_category: Vec<String>,
    pub board: String,
    pub view: String,
    pub bed_types: Vec<BedCount>,
    pub amenities: Vec<String>,
    /// Tokens of the normalized name not covered by any extracted attribute.
    pub other: Vec<String>,
}

/// One canonical bed label with its aggregated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedCount {
    pub bed_type: String,
    pub count: u32,
}

impl BedCount {
    pub fn unknown() -> Self {
        Self {
            bed_type: UNKNOWN.to_string(),
            count: 0,
        }
    }
}

/// Six-state result of comparing one attribute pair. Wire names follow the
/// historical API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "true")]
    Full,
    #[serde(rename = "partial")]
    Partial,
    #[serde(rename = "false")]
    Conflict,
    #[serde(rename = "null")]
    NoInfo,
    #[serde(rename = "refInfo")]
    RefOnly,
    #[serde(rename = "supplierInfo")]
    SupplierOnly,
}

/// Per-attribute outcomes for one reference/supplier pair. Board is extracted
/// for diagnostics but takes no part in the acceptance decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    #[serde(rename = "matchedRoomType")]
    pub room_type: Outcome,
    #[serde(rename = "matchedRoomCategory")]
    pub room_category: Outcome,
    #[serde(rename = "matchedView")]
    pub view: Outcome,
    #[serde(rename = "matchedAmenities")]
    pub amenities: Outcome,
    #[serde(rename = "bedTypes")]
    pub bed_types: Outcome,
}

/// A claimed supplier room. Created once, owned by exactly one reference
/// room's result entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMatch {
    pub pass: &'static str,
    pub supplier_room_id: String,
    pub supplier_room_name: String,
    pub match_outcome: MatchOutcome,
    pub match_attributes: RoomAttributes,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResult {
    pub property_name: String,
    pub property_id: String,
    pub room_id: String,
    pub room_name: String,
    pub clean_room_name: String,
    pub room_description: RoomAttributes,
    pub mapped_rooms: Vec<RoomMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    #[serde(rename = "Results")]
    pub results: Vec<MappingResult>,
    #[serde(rename = "UnmappedRooms")]
    pub unmapped_rooms: UnmappedRooms,
    #[serde(rename = "Counts")]
    pub counts: MatchCounts,
}

/// Either the supplier rooms left over after all passes, or an explicit
/// marker when every room was claimed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UnmappedRooms {
    Rooms(Vec<SupplierRoom>),
    Empty {
        #[serde(rename = "Message")]
        message: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    #[serde(rename = "TotalSupplierRooms")]
    pub total_supplier_rooms: usize,
    #[serde(rename = "FirstPassMatches")]
    pub first_pass_matches: usize,
    #[serde(rename = "SecondPassMatches")]
    pub second_pass_matches: usize,
    #[serde(rename = "ThirdPassMatches")]
    pub third_pass_matches: usize,
    #[serde(rename = "MappedSupplierRooms")]
    pub mapped_supplier_rooms: usize,
    #[serde(rename = "UnmappedSupplierRooms")]
    pub unmapped_supplier_rooms: usize,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("referenceCatalog is missing or empty")]
    MissingReferenceCatalog,
    #[error("inputCatalog is missing or empty")]
    MissingSupplierCatalog,
}
