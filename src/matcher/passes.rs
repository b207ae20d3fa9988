//! The three strictness tiers. Each later pass accepts a strict superset of
//! the outcome vectors accepted by the one before it; the room type gate is
//! the one requirement that is never relaxed.

use crate::model::{MatchOutcome, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Strict,
    Moderate,
    Lenient,
}

pub const PASSES: [Pass; 3] = [Pass::Strict, Pass::Moderate, Pass::Lenient];

impl Pass {
    pub fn label(self) -> &'static str {
        match self {
            Pass::Strict => "First Pass",
            Pass::Moderate => "Second Pass",
            Pass::Lenient => "Third Pass",
        }
    }

    /// Acceptance predicate over one outcome vector.
    pub fn accepts(self, outcome: &MatchOutcome) -> bool {
        use Outcome::{Full, NoInfo, Partial};

        if outcome.room_type != Full {
            return false;
        }
        match self {
            Pass::Strict => {
                outcome.room_category == Full
                    && matches!(outcome.view, Full | NoInfo)
                    && matches!(outcome.amenities, Full | NoInfo)
                    && matches!(outcome.bed_types, Full | NoInfo)
            }
            Pass::Moderate => {
                matches!(outcome.room_category, Full | Partial)
                    && matches!(outcome.view, Full | NoInfo)
                    && matches!(outcome.amenities, Full | NoInfo | Partial)
                    && matches!(outcome.bed_types, Full | Partial | NoInfo)
            }
            Pass::Lenient => {
                lenient(outcome.room_category)
                    && lenient(outcome.view)
                    && lenient(outcome.amenities)
                    && lenient(outcome.bed_types)
            }
        }
    }
}

/// Supplier-side extra detail is tolerated; reference-side detail the
/// supplier never mentions is not.
fn lenient(outcome: Outcome) -> bool {
    matches!(
        outcome,
        Outcome::Full | Outcome::NoInfo | Outcome::Partial | Outcome::SupplierOnly
    )
}
