//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog crates
//! (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod handle;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use handle::Shared;
pub use id::{PartId, ProductId};
