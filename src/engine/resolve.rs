//! Requirement resolution
//!
//! Decides which stocked ingredient, if any, satisfies one recipe line.
//! Every consumer (listings, explanations, the availability cache) goes
//! through [`resolve`] so the substitution chain is defined in one place.
//!
//! Priority, first success wins:
//! 1. the referenced ingredient itself
//! 2. its base ingredient, when base substitution is allowed
//! 3. the first stocked brand of its base group, when branded substitution is
//!    allowed or the reference is itself a base ingredient
//! 4. the first stocked entry of the requirement's substitute list

use super::index::IngredientIndex;
use super::Policy;
use crate::catalog::{Ingredient, IngredientId, Requirement};
use serde::Serialize;
use std::fmt;

/// How a requirement ended up satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Substitution {
    /// The referenced ingredient is in stock
    Exact,
    /// Its base ingredient stands in
    Base,
    /// A stocked brand of its base stands in
    Brand,
    /// An author-listed substitute stands in
    Listed,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Base => "base",
            Self::Brand => "brand",
            Self::Listed => "substitute",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of resolving one requirement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    /// Ingredient that satisfies the requirement, if any
    pub used: Option<&'a Ingredient>,
    /// Ingredient the requirement points at
    pub reference: Option<&'a Ingredient>,
    /// Base group of the reference
    pub base_id: Option<IngredientId>,
    /// Path taken to `used`
    pub via: Option<Substitution>,
}

impl<'a> Resolution<'a> {
    pub fn is_satisfied(&self) -> bool {
        self.used.is_some()
    }

    fn unsatisfied(reference: Option<&'a Ingredient>) -> Self {
        Self {
            used: None,
            reference,
            base_id: reference.map(Ingredient::base_id),
            via: None,
        }
    }
}

/// Ingredient a requirement points at: by id, else by unique normalized name
pub fn reference_of<'a>(
    requirement: &Requirement,
    index: &IngredientIndex<'a>,
) -> Option<&'a Ingredient> {
    requirement
        .ingredient_id
        .and_then(|id| index.get(id))
        .or_else(|| requirement.name.as_deref().and_then(|name| index.by_name(name)))
}

/// Resolve one requirement against an ingredient snapshot
pub fn resolve<'a>(
    requirement: &Requirement,
    index: &IngredientIndex<'a>,
    policy: &Policy,
) -> Resolution<'a> {
    let Some(reference) = reference_of(requirement, index) else {
        return Resolution::unsatisfied(None);
    };

    let base_id = reference.base_id();
    let done = |used: &'a Ingredient, via: Substitution| Resolution {
        used: Some(used),
        reference: Some(reference),
        base_id: Some(base_id),
        via: Some(via),
    };

    if reference.in_stock {
        return done(reference, Substitution::Exact);
    }

    if policy.allow_substitutes || requirement.allow_base_substitution {
        if let Some(base) = index.base_of(reference).filter(|b| b.in_stock) {
            return done(base, Substitution::Base);
        }
    }

    if policy.allow_substitutes || requirement.allow_branded_substitutes || reference.is_base() {
        if let Some(brand) = index.find_brand(base_id) {
            return done(brand, Substitution::Brand);
        }
    }

    let listed = requirement
        .substitutes
        .iter()
        .filter_map(|id| index.get(*id))
        .find(|i| i.in_stock);
    if let Some(substitute) = listed {
        return done(substitute, Substitution::Listed);
    }

    Resolution::unsatisfied(Some(reference))
}
