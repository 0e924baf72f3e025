//! Main screen: the parts and products tables with their search boxes and
//! delete buttons.
//!
//! The search here differs from [`Inventory::lookup_parts_by_name`]: a numeric
//! term is an id lookup, anything else is a case-insensitive **prefix** match.

use stockroom_core::{Entity, PartId, ProductId, Shared};
use stockroom_inventory::Inventory;
use stockroom_parts::PartRef;
use stockroom_products::ProductRef;

use crate::errors::ScreenError;
use crate::types::{CatalogSnapshot, PartRow, ProductRow};

/// Result of pressing enter in a search box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank term: the table shows the whole collection again.
    Reset,
    /// The table now shows this many matches.
    Matches(usize),
    /// Nothing matched; the table is empty.
    NoMatches,
}

/// What a table is bound to.
#[derive(Debug)]
enum TableSource<T> {
    /// The store's live collection.
    All,
    /// A fixed result list from the last search.
    Filtered(Vec<Shared<T>>),
}

impl<T> TableSource<T> {
    fn rows(&self, all: &[Shared<T>]) -> Vec<Shared<T>> {
        match self {
            TableSource::All => all.to_vec(),
            TableSource::Filtered(items) => items.clone(),
        }
    }
}

#[derive(Debug)]
pub struct MainScreen {
    parts: TableSource<stockroom_parts::Part>,
    products: TableSource<stockroom_products::Product>,
}

impl Default for MainScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainScreen {
    pub fn new() -> Self {
        Self {
            parts: TableSource::All,
            products: TableSource::All,
        }
    }

    /// Parts currently listed in the parts table.
    pub fn visible_parts(&self, inventory: &Inventory) -> Vec<PartRef> {
        self.parts.rows(inventory.all_parts())
    }

    /// Products currently listed in the products table.
    pub fn visible_products(&self, inventory: &Inventory) -> Vec<ProductRef> {
        self.products.rows(inventory.all_products())
    }

    pub fn part_rows(&self, inventory: &Inventory) -> Vec<PartRow> {
        self.visible_parts(inventory)
            .iter()
            .map(|part| PartRow::from(&*part.borrow()))
            .collect()
    }

    pub fn product_rows(&self, inventory: &Inventory) -> Vec<ProductRow> {
        self.visible_products(inventory)
            .iter()
            .map(|product| ProductRow::from(&*product.borrow()))
            .collect()
    }

    pub fn snapshot(&self, inventory: &Inventory) -> CatalogSnapshot {
        CatalogSnapshot {
            parts: self.part_rows(inventory),
            products: self.product_rows(inventory),
        }
    }

    /// Filter the parts table by id or case-insensitive name prefix.
    pub fn search_parts(&mut self, inventory: &Inventory, term: &str) -> SearchOutcome {
        let term = term.trim();
        if term.is_empty() {
            self.reset_parts();
            return SearchOutcome::Reset;
        }
        let results = search_table(inventory.all_parts(), term, |id| {
            inventory.lookup_part(PartId::new(id))
        });
        tracing::debug!(term, matches = results.len(), "part search");
        apply_results(&mut self.parts, results)
    }

    /// Filter the products table by id or case-insensitive name prefix.
    pub fn search_products(&mut self, inventory: &Inventory, term: &str) -> SearchOutcome {
        let term = term.trim();
        if term.is_empty() {
            self.reset_products();
            return SearchOutcome::Reset;
        }
        let results = search_table(inventory.all_products(), term, |id| {
            inventory.lookup_product(ProductId::new(id))
        });
        tracing::debug!(term, matches = results.len(), "product search");
        apply_results(&mut self.products, results)
    }

    pub fn reset_parts(&mut self) {
        self.parts = TableSource::All;
    }

    pub fn reset_products(&mut self) {
        self.products = TableSource::All;
    }

    /// Delete the selected part. Products that use it keep their reference.
    pub fn delete_part(&mut self, inventory: &mut Inventory, part: &PartRef) -> bool {
        let removed = inventory.delete_part(part);
        self.reset_parts();
        removed
    }

    /// Delete the selected product, unless it still has associated parts.
    pub fn delete_product(
        &mut self,
        inventory: &mut Inventory,
        product: &ProductRef,
    ) -> Result<bool, ScreenError> {
        if product.borrow().has_associated_parts() {
            let product_id = product.id();
            tracing::warn!(%product_id, "refusing to delete product with associated parts");
            return Err(ScreenError::ProductHasAssociatedParts { product_id });
        }
        let removed = inventory.delete_product(product);
        self.reset_products();
        Ok(removed)
    }
}

/// Numeric term: id lookup. Otherwise: case-insensitive name prefix.
fn search_table<T, F>(all: &[Shared<T>], term: &str, lookup_id: F) -> Vec<Shared<T>>
where
    T: Entity,
    F: FnOnce(i32) -> Option<Shared<T>>,
{
    match term.parse::<i32>() {
        Ok(id) => lookup_id(id).into_iter().collect(),
        Err(_) => all
            .iter()
            .filter(|item| name_starts_with_ignore_case(item.borrow().name(), term))
            .cloned()
            .collect(),
    }
}

fn apply_results<T>(table: &mut TableSource<T>, results: Vec<Shared<T>>) -> SearchOutcome {
    let outcome = if results.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(results.len())
    };
    *table = TableSource::Filtered(results);
    outcome
}

fn name_starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}
