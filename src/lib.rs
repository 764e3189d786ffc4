//! Barback - what can I make tonight?
//!
//! Decides which cocktails are makeable from the ingredients in stock,
//! substituting base spirits, sibling brands and listed alternatives where
//! a recipe allows it, and keeps per-ingredient counts up to date as stock
//! flags toggle one at a time.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod ui;

pub use error::{BarbackError, BarbackResult};
