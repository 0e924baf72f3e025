//! Add-product and modify-product editors.
//!
//! Both editors stage associated parts in a side list while the form is open
//! and only attach them to a product on save.

use rand::Rng;

use stockroom_core::{Entity, PartId};
use stockroom_inventory::Inventory;
use stockroom_parts::PartRef;
use stockroom_products::ProductRef;

use crate::errors::ScreenError;
use crate::forms::ProductForm;
use crate::ids::random_product_id;

/// Editor for a new product.
#[derive(Debug, Clone, Default)]
pub struct AddProductScreen {
    pub form: ProductForm,
    staged: Vec<PartRef>,
}

impl AddProductScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate parts for the picker table.
    ///
    /// Name substring first (case-sensitive, as the store does it); if nothing
    /// matches and the term is numeric, an id lookup.
    pub fn search_candidates(
        inventory: &Inventory,
        term: &str,
    ) -> Result<Vec<PartRef>, ScreenError> {
        let by_name = inventory.lookup_parts_by_name(term);
        if !by_name.is_empty() {
            return Ok(by_name);
        }
        let id = term
            .trim()
            .parse::<i32>()
            .map_err(|_| ScreenError::NoMatchingPart)?;
        Ok(inventory.lookup_part(PartId::new(id)).into_iter().collect())
    }

    pub fn staged_parts(&self) -> &[PartRef] {
        &self.staged
    }

    pub fn stage_part(&mut self, part: PartRef) {
        self.staged.push(part);
    }

    /// Drop this exact part instance from the staged list.
    pub fn unstage_part(&mut self, part: &PartRef) -> Result<(), ScreenError> {
        let pos = self
            .staged
            .iter()
            .position(|p| p.ptr_eq(part))
            .ok_or(ScreenError::PartNotStaged)?;
        self.staged.remove(pos);
        Ok(())
    }

    /// Validate the form, attach the staged parts and append the product.
    pub fn save<R: Rng>(
        &self,
        inventory: &mut Inventory,
        rng: &mut R,
    ) -> Result<ProductRef, ScreenError> {
        let id = random_product_id(rng);
        let mut product = self
            .form
            .build(id)
            .inspect_err(|err| tracing::warn!(%err, "product form rejected"))?;
        for part in &self.staged {
            product.add_associated_part(part.clone());
        }
        let product = product.into_ref();
        inventory.add_product(product.clone());
        Ok(product)
    }
}

/// Editor for an existing product.
#[derive(Debug, Clone)]
pub struct ModifyProductScreen {
    product: ProductRef,
    index: usize,
    pub form: ProductForm,
    staged: Vec<PartRef>,
}

impl ModifyProductScreen {
    /// Open the editor on `product`, capturing its current position in the
    /// store and a copy of its associated parts.
    pub fn open(inventory: &Inventory, product: &ProductRef) -> Result<Self, ScreenError> {
        let index = inventory
            .index_of_product(product)
            .ok_or_else(|| ScreenError::ProductNotInInventory {
                product_id: product.id(),
            })?;
        let (form, staged) = {
            let current = product.borrow();
            (
                ProductForm::from_product(&current),
                current.associated_parts().to_vec(),
            )
        };
        Ok(Self {
            product: product.clone(),
            index,
            form,
            staged,
        })
    }

    /// Position the saved product will replace.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn staged_parts(&self) -> &[PartRef] {
        &self.staged
    }

    /// Locate a part for the picker: numeric id first, then a case-insensitive
    /// exact name match.
    pub fn find_candidate(
        inventory: &Inventory,
        term: &str,
    ) -> Result<Vec<PartRef>, ScreenError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ScreenError::EmptySearch);
        }
        if let Some(part) = term
            .parse::<i32>()
            .ok()
            .and_then(|id| inventory.lookup_part(PartId::new(id)))
        {
            return Ok(vec![part]);
        }

        let needle = term.to_lowercase();
        let matches: Vec<PartRef> = inventory
            .all_parts()
            .iter()
            .filter(|p| p.borrow().name().to_lowercase() == needle)
            .cloned()
            .collect();
        if matches.is_empty() {
            Err(ScreenError::NoMatchingPart)
        } else {
            Ok(matches)
        }
    }

    pub fn stage_part(&mut self, part: PartRef) {
        self.staged.push(part);
    }

    /// Remove a staged part.
    ///
    /// The product being edited also loses every association sharing the
    /// part's id, immediately and whether or not the editor is saved.
    pub fn remove_staged(&mut self, part: &PartRef) -> Result<(), ScreenError> {
        let pos = self
            .staged
            .iter()
            .position(|p| p.ptr_eq(part))
            .ok_or(ScreenError::PartNotStaged)?;
        self.product.borrow_mut().delete_associated_part(part);
        self.staged.remove(pos);
        Ok(())
    }

    /// Replace the product at the captured position with a revised one, then
    /// re-add the staged parts to it.
    pub fn save(&self, inventory: &mut Inventory) -> Result<ProductRef, ScreenError> {
        let id = self.form.parse_id()?;
        let revised = self
            .form
            .build(id)
            .inspect_err(|err| tracing::warn!(%err, "product form rejected"))?
            .into_ref();

        inventory.update_product(self.index, revised.clone())?;
        for part in &self.staged {
            revised.borrow_mut().add_associated_part(part.clone());
        }

        tracing::debug!(
            index = self.index,
            product_id = %revised.id(),
            associated = self.staged.len(),
            "product modified"
        );
        Ok(revised)
    }
}
