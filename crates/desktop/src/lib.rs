//! `stockroom-desktop`
//!
//! **Responsibility:** Headless presentation layer over the inventory store.
//!
//! This crate provides:
//! - Screen models for the main window and the add/modify editors
//! - Form validation with user-facing messages
//! - Serializable read-model rows
//! - The demo catalog and startup configuration
//!
//! Screens hold no catalog data of their own; each action takes the
//! [`Inventory`](stockroom_inventory::Inventory) by reference.

pub mod config;
pub mod demo;
pub mod errors;
pub mod forms;
pub mod ids;
pub mod main_screen;
pub mod part_screens;
pub mod product_screens;
pub mod types;

pub use config::{ConfigError, DesktopConfig};
pub use errors::ScreenError;
pub use forms::{FormError, PartForm, ProductForm, SourceKind, StockFields};
pub use main_screen::{MainScreen, SearchOutcome};
pub use part_screens::{AddPartScreen, ModifyPartScreen};
pub use product_screens::{AddProductScreen, ModifyProductScreen};
pub use types::{CatalogSnapshot, PartRow, ProductRow};
