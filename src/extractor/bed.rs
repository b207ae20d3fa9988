//! Bed configuration extraction. Parenthetical content wins when it carries
//! bed details ("Standard Room (2 Queen Beds)" describes queen beds, not
//! whatever the rest of the name says). Matched spans are consumed so a
//! substring is never counted under two overlapping patterns.

use super::vocab;
use crate::model::BedCount;
use crate::normalizer::parenthetical_spans;

pub fn extract_bed_types(name: &str) -> Vec<BedCount> {
    let spans = parenthetical_spans(name);
    if !spans.is_empty() {
        let from_parens = scan(&spans.join(" "));
        if !from_parens.is_empty() {
            return aggregate(from_parens);
        }
    }

    let found = scan(name);
    if found.is_empty() {
        vec![BedCount::unknown()]
    } else {
        aggregate(found)
    }
}

/// Longest-phrase-first scan; each match consumes its span (quantity digit
/// included) before the next round.
fn scan(text: &str) -> Vec<(String, u32)> {
    let mut remaining = text.to_string();
    let mut found = Vec::new();

    for (phrase, pattern) in vocab::BED_TYPE_PATTERNS.iter() {
        while let Some(caps) = pattern.captures(&remaining) {
            let count = caps
                .get(1)
                .and_then(|quantity| quantity.as_str().parse().ok())
                .unwrap_or(1);
            found.push((canonical_label(phrase), count));

            let span = caps.get(0).unwrap().range();
            remaining.replace_range(span, " ");
        }
    }

    found
}

/// Sums quantities per canonical label, first-seen order.
fn aggregate(found: Vec<(String, u32)>) -> Vec<BedCount> {
    let mut beds: Vec<BedCount> = Vec::new();
    for (bed_type, count) in found {
        if let Some(existing) = beds.iter_mut().find(|bed| bed.bed_type == bed_type) {
            existing.count += count;
        } else {
            beds.push(BedCount { bed_type, count });
        }
    }
    beds
}

/// Collapses matched phrases onto canonical labels: "kingsize", "king bed"
/// and "california king bed" are all king beds.
fn canonical_label(phrase: &str) -> String {
    const FAMILIES: &[(&str, &str)] = &[
        ("sofa", "sofa bed"),
        ("queen", "queen"),
        ("king", "king"),
        ("double", "double"),
        ("single", "single"),
        ("twin", "twin"),
        ("bunk", "bunk"),
    ];
    for (needle, canonical) in FAMILIES {
        if phrase.contains(needle) {
            return (*canonical).to_string();
        }
    }
    phrase.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN;

    fn beds(pairs: &[(&str, u32)]) -> Vec<BedCount> {
        pairs
            .iter()
            .map(|(bed_type, count)| BedCount {
                bed_type: bed_type.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn parenthetical_beds_are_authoritative() {
        assert_eq!(
            extract_bed_types("standard room with 2 double beds (double bed)"),
            beds(&[("double", 1)])
        );
    }

    #[test]
    fn falls_back_to_whole_name_when_parens_carry_no_beds() {
        assert_eq!(
            extract_bed_types("king room (city side)"),
            beds(&[("king", 1)])
        );
    }

    #[test]
    fn leading_quantity_is_parsed() {
        assert_eq!(
            extract_bed_types("room with 2 queen beds"),
            beds(&[("queen", 2)])
        );
    }

    #[test]
    fn quantities_default_to_one_and_sum_per_label() {
        assert_eq!(
            extract_bed_types("queen bed and queensize"),
            beds(&[("queen", 2)])
        );
    }

    #[test]
    fn longest_phrase_is_tried_first() {
        assert_eq!(
            extract_bed_types("1 california king bed"),
            beds(&[("king", 1)])
        );
    }

    #[test]
    fn consumed_spans_are_not_recounted() {
        // "sofa bed" must not also surface as a bare bed entry
        assert_eq!(
            extract_bed_types("double sofa bed"),
            beds(&[("sofa bed", 1)])
        );
    }

    #[test]
    fn mixed_configurations_keep_distinct_labels() {
        assert_eq!(
            extract_bed_types("1 king bed and 1 sofa bed"),
            beds(&[("king", 1), ("sofa bed", 1)])
        );
    }

    #[test]
    fn no_beds_yields_the_unknown_sentinel() {
        assert_eq!(extract_bed_types("panoramic suite"), vec![BedCount::unknown()]);
        assert_eq!(extract_bed_types("")[0].bed_type, UNKNOWN);
    }
}
