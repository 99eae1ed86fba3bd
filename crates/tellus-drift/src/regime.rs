//! The two outline regimes and the switch between them.

use std::fmt;

use serde::Serialize;

use crate::Age;

/// Ages at or above this value draw the supercontinent, in Ma.
pub const SUPERCONTINENT_THRESHOLD_MA: f64 = 180.0;

/// Which reference set an outline is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// A single supercontinent silhouette, fixed for every age in the regime.
    Ancient,
    /// Present-day anchors displaced by an age-proportional drift offset.
    Modern,
}

impl Regime {
    /// Select the regime for `age`. The threshold itself is ancient.
    pub fn for_age(age: Age, threshold_ma: f64) -> Self {
        if age.ma() >= threshold_ma {
            Self::Ancient
        } else {
            Self::Modern
        }
    }

    /// Whether outlines of this regime form a closed polygon.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Ancient)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancient => f.write_str("ancient"),
            Self::Modern => f.write_str("modern"),
        }
    }
}
