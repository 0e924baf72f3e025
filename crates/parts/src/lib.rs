//! Parts domain module.
//!
//! A part is an individual catalog item, sourced either in-house or from an
//! outside vendor. Parts are plain records: they hold whatever values the
//! caller supplies and perform no validation.

pub mod part;

pub use part::{Part, PartRef, PartSource};
