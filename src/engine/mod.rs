//! Availability engine
//!
//! Pure, synchronous computations over an ingredient/cocktail snapshot:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`IngredientIndex`] | id, base-group and name lookups |
//! | [`resolve`] | which stocked ingredient satisfies one requirement |
//! | [`is_available`] | whether every counted requirement resolves |
//! | [`AvailabilityCache`] | per-ingredient makeable-cocktail counts, rebuilt or patched per stock change |
//! | [`fingerprint`] / [`SnapshotMemo`] | keep derived views stable across unrelated field churn |

pub mod cache;
pub mod fingerprint;
pub mod index;
pub mod memo;
pub mod predicate;
pub mod resolve;

pub use cache::{AvailabilityCache, AvailabilityEntry, EntryMap};
pub use fingerprint::{cocktails_fingerprint, fingerprint};
pub use index::IngredientIndex;
pub use memo::{AvailabilityView, Memo, SnapshotKey, SnapshotMemo};
pub use predicate::{explain, is_available};
pub use resolve::{resolve, Resolution, Substitution};

use serde::{Deserialize, Serialize};

/// User-wide substitution settings, passed into every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Allow base and branded substitution for every requirement
    pub allow_substitutes: bool,

    /// Leave garnish lines out of availability checks
    pub ignore_garnish: bool,
}

impl Policy {
    pub fn new(allow_substitutes: bool, ignore_garnish: bool) -> Self {
        Self {
            allow_substitutes,
            ignore_garnish,
        }
    }
}
