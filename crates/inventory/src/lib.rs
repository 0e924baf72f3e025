//! Inventory store.
//!
//! Holds every part and product known to the running process, in insertion
//! order, and provides add/lookup/update/delete over them. The store carries no
//! business rules beyond list management.

pub mod store;

pub use store::Inventory;
