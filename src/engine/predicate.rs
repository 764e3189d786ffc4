//! Cocktail-level availability

use super::index::IngredientIndex;
use super::resolve::{resolve, Resolution};
use super::Policy;
use crate::catalog::{Cocktail, Requirement};

/// Requirements that count towards availability under `policy`
pub fn required<'c>(
    cocktail: &'c Cocktail,
    policy: &Policy,
) -> impl Iterator<Item = &'c Requirement> + 'c {
    let ignore_garnish = policy.ignore_garnish;
    cocktail
        .ingredients
        .iter()
        .filter(move |r| !r.is_excluded(ignore_garnish))
}

/// Whether every counted requirement of `cocktail` resolves to a stocked
/// ingredient. A cocktail with nothing left to count is never available.
pub fn is_available(cocktail: &Cocktail, index: &IngredientIndex<'_>, policy: &Policy) -> bool {
    let mut any = false;
    for requirement in required(cocktail, policy) {
        any = true;
        if !resolve(requirement, index, policy).is_satisfied() {
            return false;
        }
    }
    any
}

/// Resolution of every requirement line, excluded lines included, for display
pub fn explain<'a, 'c>(
    cocktail: &'c Cocktail,
    index: &IngredientIndex<'a>,
    policy: &Policy,
) -> Vec<(&'c Requirement, Resolution<'a>)> {
    cocktail
        .ingredients
        .iter()
        .map(|r| (r, resolve(r, index, policy)))
        .collect()
}
