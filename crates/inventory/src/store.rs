use stockroom_core::{DomainError, DomainResult, Entity, PartId, ProductId, Shared};
use stockroom_parts::PartRef;
use stockroom_products::ProductRef;

/// In-memory catalog of parts and products.
///
/// One instance lives for the whole application session and is passed by
/// reference to whatever needs it. Nothing is persisted.
///
/// Each mutation uses its own notion of "which element":
/// - updates address a **position** in the collection,
/// - deletes match **handle identity** (two parts with the same id are
///   different parts),
/// - lookups by id return the **first** element with that id.
///
/// Deleting a part does not touch any product's association list, so a
/// product may keep referring to a part the store no longer holds.
#[derive(Debug, Default)]
pub struct Inventory {
    parts: Vec<PartRef>,
    products: Vec<ProductRef>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. Duplicate ids are accepted.
    pub fn add_part(&mut self, part: PartRef) {
        tracing::debug!(part_id = %part.id(), "adding part");
        self.parts.push(part);
    }

    /// Append a product. Duplicate ids are accepted.
    pub fn add_product(&mut self, product: ProductRef) {
        tracing::debug!(product_id = %product.id(), "adding product");
        self.products.push(product);
    }

    /// All parts in insertion order. This borrows the store's own storage.
    pub fn all_parts(&self) -> &[PartRef] {
        &self.parts
    }

    /// All products in insertion order. This borrows the store's own storage.
    pub fn all_products(&self) -> &[ProductRef] {
        &self.products
    }

    /// Mutable access to the part collection itself.
    pub fn all_parts_mut(&mut self) -> &mut Vec<PartRef> {
        &mut self.parts
    }

    /// Mutable access to the product collection itself.
    pub fn all_products_mut(&mut self) -> &mut Vec<ProductRef> {
        &mut self.products
    }

    /// First part whose id equals `id`.
    pub fn lookup_part(&self, id: PartId) -> Option<PartRef> {
        first_with_id(&self.parts, id)
    }

    /// First product whose id equals `id`.
    pub fn lookup_product(&self, id: ProductId) -> Option<ProductRef> {
        first_with_id(&self.products, id)
    }

    /// Parts whose name contains `pattern` (case-sensitive), in store order.
    pub fn lookup_parts_by_name(&self, pattern: &str) -> Vec<PartRef> {
        names_containing(&self.parts, pattern)
    }

    /// Products whose name contains `pattern` (case-sensitive), in store order.
    pub fn lookup_products_by_name(&self, pattern: &str) -> Vec<ProductRef> {
        names_containing(&self.products, pattern)
    }

    /// Position of this exact part instance.
    pub fn index_of_part(&self, part: &PartRef) -> Option<usize> {
        self.parts.iter().position(|p| p.ptr_eq(part))
    }

    /// Position of this exact product instance.
    pub fn index_of_product(&self, product: &ProductRef) -> Option<usize> {
        self.products.iter().position(|p| p.ptr_eq(product))
    }

    /// Replace the part at `index`, returning the one it displaced.
    pub fn update_part(&mut self, index: usize, replacement: PartRef) -> DomainResult<PartRef> {
        tracing::debug!(index, part_id = %replacement.id(), "updating part");
        replace_at(&mut self.parts, index, replacement)
    }

    /// Replace the product at `index`, returning the one it displaced.
    ///
    /// The replacement keeps whatever associations it already has; nothing is
    /// carried over from the displaced product.
    pub fn update_product(
        &mut self,
        index: usize,
        replacement: ProductRef,
    ) -> DomainResult<ProductRef> {
        tracing::debug!(index, product_id = %replacement.id(), "updating product");
        replace_at(&mut self.products, index, replacement)
    }

    /// Remove this exact part instance. Returns `false` if it is not stored.
    pub fn delete_part(&mut self, part: &PartRef) -> bool {
        let removed = remove_identical(&mut self.parts, part);
        tracing::debug!(part_id = %part.id(), removed, "deleting part");
        removed
    }

    /// Remove this exact product instance. Returns `false` if it is not stored.
    pub fn delete_product(&mut self, product: &ProductRef) -> bool {
        let removed = remove_identical(&mut self.products, product);
        tracing::debug!(product_id = %product.id(), removed, "deleting product");
        removed
    }
}

fn first_with_id<T: Entity>(items: &[Shared<T>], id: T::Id) -> Option<Shared<T>> {
    items.iter().find(|item| item.id() == id).cloned()
}

fn names_containing<T: Entity>(items: &[Shared<T>], pattern: &str) -> Vec<Shared<T>> {
    items
        .iter()
        .filter(|item| item.borrow().name().contains(pattern))
        .cloned()
        .collect()
}

fn replace_at<T>(
    items: &mut [Shared<T>],
    index: usize,
    replacement: Shared<T>,
) -> DomainResult<Shared<T>> {
    let len = items.len();
    let slot = items
        .get_mut(index)
        .ok_or_else(|| DomainError::index_out_of_range(index, len))?;
    Ok(core::mem::replace(slot, replacement))
}

fn remove_identical<T>(items: &mut Vec<Shared<T>>, target: &Shared<T>) -> bool {
    match items.iter().position(|item| item.ptr_eq(target)) {
        Some(pos) => {
            items.remove(pos);
            true
        }
        None => false,
    }
}
