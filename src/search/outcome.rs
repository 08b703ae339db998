use serde::Serialize;
use std::fmt::Display;

use crate::grid::Distance;

/// Why a search gave up on reaching its target.
///
/// Both reasons are treated the same by the tour: the leg is infeasible.
/// Only `FrontierExhausted` proves the target unreachable; a stall cutoff may
/// abandon a leg that does have a path.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Infeasibility {
    /// Every reachable position was expanded without meeting the target.
    FrontierExhausted,
    /// Too many expansions went by without the best distance improving.
    StallCutoff,
}

impl Display for Infeasibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Infeasibility::FrontierExhausted => write!(f, "frontier exhausted"),
            Infeasibility::StallCutoff => write!(f, "stall cutoff"),
        }
    }
}

/// Result of one point-to-point search.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LegOutcome {
    Reached(Distance),
    Infeasible(Infeasibility),
}

impl LegOutcome {
    /// Value printed for an infeasible tour.
    pub const INFEASIBLE_SENTINEL: i64 = -1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display_and_json() {
        assert_eq!(Infeasibility::StallCutoff.to_string(), "stall cutoff");
        assert_eq!(
            serde_json::to_string(&Infeasibility::FrontierExhausted).unwrap(),
            "\"frontier_exhausted\""
        );
    }
}
