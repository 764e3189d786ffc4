//! 32-bit snapshot fingerprints
//!
//! FNV-1a over the fields that influence availability. Ingredients are
//! folded in id order so the list order does not matter; fields such as
//! shopping-list membership, photo and description are left out, so editing
//! them keeps the fingerprint.

use crate::catalog::{Cocktail, Ingredient};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Separates variable-length fields so ("ab", "c") and ("a", "bc") differ
const FIELD_END: u8 = 0xff;

#[derive(Debug, Clone, Copy)]
struct Fnv1a(u32);

impl Fnv1a {
    fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    fn byte(&mut self, byte: u8) {
        self.0 ^= u32::from(byte);
        self.0 = self.0.wrapping_mul(FNV_PRIME);
    }

    fn bytes(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.byte(*b);
        }
    }

    fn int(&mut self, value: i64) {
        self.bytes(&value.to_le_bytes());
    }

    fn flag(&mut self, value: bool) {
        self.byte(u8::from(value));
    }

    fn text(&mut self, value: &str) {
        self.bytes(value.as_bytes());
        self.byte(FIELD_END);
    }

    fn opt_text(&mut self, value: Option<&str>) {
        match value {
            Some(text) => {
                self.byte(1);
                self.text(text);
            }
            None => self.byte(0),
        }
    }

    fn finish(self) -> u32 {
        self.0
    }
}

/// Order-independent fingerprint of the availability-relevant ingredient fields
pub fn fingerprint(ingredients: &[Ingredient]) -> u32 {
    let mut sorted: Vec<&Ingredient> = ingredients.iter().collect();
    sorted.sort_by_key(|i| i.id);

    let mut hash = Fnv1a::new();
    for ingredient in sorted {
        hash.int(ingredient.id);
        hash.int(ingredient.base_id());
        hash.flag(ingredient.base_ingredient_id.is_some());
        hash.flag(ingredient.in_stock);
        hash.text(&ingredient.name);
        hash.opt_text(ingredient.search_name.as_deref());
    }
    hash.finish()
}

/// Fingerprint of a cocktail catalog, in list order
///
/// Derived views list cocktails in catalog order, so reordering counts as a
/// change here.
pub fn cocktails_fingerprint(cocktails: &[Cocktail]) -> u32 {
    let mut hash = Fnv1a::new();
    for cocktail in cocktails {
        hash.int(cocktail.id);
        hash.text(&cocktail.name);
        for line in &cocktail.ingredients {
            match line.ingredient_id {
                Some(id) => {
                    hash.byte(1);
                    hash.int(id);
                }
                None => hash.byte(0),
            }
            hash.opt_text(line.name.as_deref());
            hash.flag(line.optional);
            hash.flag(line.garnish);
            hash.flag(line.allow_base_substitution);
            hash.flag(line.allow_branded_substitutes);
            for substitute in &line.substitutes {
                hash.int(*substitute);
            }
            hash.byte(FIELD_END);
        }
        hash.byte(FIELD_END);
    }
    hash.finish()
}
