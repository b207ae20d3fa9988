//! Pairwise attribute comparison. Each attribute shape (scalar label, set,
//! bed multiset) maps a reference/supplier pair onto one of six outcome
//! states. Pure and stateless; the orchestrator owns all bookkeeping.

use std::collections::{HashMap, HashSet};

use crate::model::{BedCount, MatchOutcome, Outcome, RoomAttributes, UNKNOWN};

/// One outcome per compared attribute for a reference/supplier pair.
pub fn compare(reference: &RoomAttributes, supplier: &RoomAttributes) -> MatchOutcome {
    MatchOutcome {
        room_type: compare_scalar(&reference.room_type, &supplier.room_type),
        room_category: compare_set(&reference.room_category, &supplier.room_category),
        view: compare_scalar(&reference.view, &supplier.view),
        amenities: compare_set(&reference.amenities, &supplier.amenities),
        bed_types: compare_beds(&reference.bed_types, &supplier.bed_types),
    }
}

/// Scalar labels: equal known labels match, differing known labels conflict.
/// No substring softening.
fn compare_scalar(reference: &str, supplier: &str) -> Outcome {
    let reference_known = reference != UNKNOWN && !reference.is_empty();
    let supplier_known = supplier != UNKNOWN && !supplier.is_empty();
    match (reference_known, supplier_known) {
        (false, false) => Outcome::NoInfo,
        (true, false) => Outcome::RefOnly,
        (false, true) => Outcome::SupplierOnly,
        (true, true) if reference == supplier => Outcome::Full,
        (true, true) => Outcome::Conflict,
    }
}

/// Set-valued attributes: equality is a full match, overlap is partial,
/// disjoint non-empty sets conflict.
fn compare_set(reference: &[String], supplier: &[String]) -> Outcome {
    match (reference.is_empty(), supplier.is_empty()) {
        (true, true) => Outcome::NoInfo,
        (false, true) => Outcome::RefOnly,
        (true, false) => Outcome::SupplierOnly,
        (false, false) => {
            let reference_set: HashSet<&str> = reference.iter().map(String::as_str).collect();
            let supplier_set: HashSet<&str> = supplier.iter().map(String::as_str).collect();
            if reference_set == supplier_set {
                Outcome::Full
            } else if reference_set.intersection(&supplier_set).next().is_some() {
                Outcome::Partial
            } else {
                Outcome::Conflict
            }
        }
    }
}

/// Bed multisets: at least one label whose quantity matches exactly is
/// required; extra supplier-side labels soften a full match to partial.
fn compare_beds(reference: &[BedCount], supplier: &[BedCount]) -> Outcome {
    let reference_known = has_bed_info(reference);
    let supplier_known = has_bed_info(supplier);
    match (reference_known, supplier_known) {
        (false, false) => Outcome::NoInfo,
        (true, false) => Outcome::RefOnly,
        (false, true) => Outcome::SupplierOnly,
        (true, true) => {
            let reference_counts = bed_counts(reference);
            let supplier_counts = bed_counts(supplier);
            let any_exact = reference_counts
                .iter()
                .any(|(label, count)| supplier_counts.get(label) == Some(count));
            if !any_exact {
                Outcome::Conflict
            } else if supplier_counts.len() > reference_counts.len() {
                Outcome::Partial
            } else {
                Outcome::Full
            }
        }
    }
}

fn has_bed_info(beds: &[BedCount]) -> bool {
    beds.iter().any(|bed| bed.bed_type != UNKNOWN)
}

fn bed_counts(beds: &[BedCount]) -> HashMap<&str, u32> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for bed in beds {
        if bed.bed_type != UNKNOWN {
            *counts.entry(bed.bed_type.as_str()).or_insert(0) += bed.count;
        }
    }
    counts
}
