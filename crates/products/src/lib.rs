//! Products domain module.
//!
//! A product is a sellable assembly that refers to zero or more parts. The
//! references are shared, not owned: the same part may appear in many
//! products, and a part removed from the inventory stays associated.

pub mod product;

pub use product::{Product, ProductRef};
