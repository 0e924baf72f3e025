//! Add-part and modify-part editors.

use rand::Rng;

use stockroom_inventory::Inventory;
use stockroom_parts::PartRef;

use crate::errors::ScreenError;
use crate::forms::PartForm;
use crate::ids::random_part_id;

/// Editor for a new part.
#[derive(Debug, Clone, Default)]
pub struct AddPartScreen {
    pub form: PartForm,
}

impl AddPartScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and append the new part under a freshly drawn id.
    pub fn save<R: Rng>(
        &self,
        inventory: &mut Inventory,
        rng: &mut R,
    ) -> Result<PartRef, ScreenError> {
        let id = random_part_id(rng);
        let part = self
            .form
            .build(id)
            .inspect_err(|err| tracing::warn!(%err, "part form rejected"))?
            .into_ref();
        inventory.add_part(part.clone());
        Ok(part)
    }
}

/// Editor for the part at a given position of the parts table.
#[derive(Debug, Clone)]
pub struct ModifyPartScreen {
    index: usize,
    pub form: PartForm,
}

impl ModifyPartScreen {
    /// Open the editor on the part at `index`, pre-filling the form.
    pub fn open(inventory: &Inventory, index: usize) -> Result<Self, ScreenError> {
        let part = inventory
            .all_parts()
            .get(index)
            .ok_or(ScreenError::NothingSelected)?;
        let form = PartForm::from_part(&part.borrow());
        Ok(Self { index, form })
    }

    /// Position the saved part will replace.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Validate the form and replace the part at the captured position.
    ///
    /// The replacement is a new part instance; products that referenced the
    /// old instance keep referring to it.
    pub fn save(&self, inventory: &mut Inventory) -> Result<PartRef, ScreenError> {
        let id = self.form.parse_id()?;
        let part = self
            .form
            .build(id)
            .inspect_err(|err| tracing::warn!(%err, "part form rejected"))?
            .into_ref();
        inventory.update_part(self.index, part.clone())?;
        tracing::debug!(index = self.index, part_id = %part.id(), "part modified");
        Ok(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;
    use stockroom_core::{DomainError, PartId};

    use crate::demo;
    use crate::forms::{FormError, SourceKind, StockFields};

    fn seeded() -> Inventory {
        let mut inventory = Inventory::new();
        demo::seed(&mut inventory);
        inventory
    }

    fn sprocket_form() -> PartForm {
        PartForm {
            fields: StockFields {
                id: String::new(),
                name: "sprocket".to_string(),
                stock: "4".to_string(),
                price: "7.50".to_string(),
                min: "1".to_string(),
                max: "9".to_string(),
            },
            source: Some(SourceKind::Outsourced),
            source_value: "Acme".to_string(),
        }
    }

    #[test]
    fn add_part_appends_with_random_id() {
        let mut inventory = seeded();
        let screen = AddPartScreen {
            form: sprocket_form(),
        };
        let mut rng = StdRng::seed_from_u64(3);

        let part = screen.save(&mut inventory, &mut rng).unwrap();

        assert!((0..1000).contains(&part.id().get()));
        assert_eq!(inventory.all_parts().len(), 4);
        assert!(inventory.all_parts()[3].ptr_eq(&part));
        assert_eq!(part.borrow().price(), dec!(7.50));
    }

    #[test]
    fn add_part_rejects_invalid_form_without_touching_store() {
        let mut inventory = seeded();
        let mut screen = AddPartScreen::new();
        screen.form = sprocket_form();
        screen.form.fields.min = "10".to_string();

        let err = screen
            .save(&mut inventory, &mut StdRng::seed_from_u64(3))
            .unwrap_err();
        assert_eq!(err, ScreenError::Form(FormError::MinExceedsMax));
        assert_eq!(inventory.all_parts().len(), 3);
    }

    #[test]
    fn modify_part_replaces_by_position() {
        let mut inventory = seeded();
        let old_chain = inventory.all_parts()[1].clone();

        let mut screen = ModifyPartScreen::open(&inventory, 1).unwrap();
        assert_eq!(screen.form.fields.name, "chain");
        assert_eq!(screen.form.source_value, "7");
        screen.form.fields.name = "roller chain".to_string();
        screen.form.source = Some(SourceKind::Outsourced);
        screen.form.source_value = "KMC".to_string();

        let saved = screen.save(&mut inventory).unwrap();

        assert_eq!(saved.id(), PartId::new(2));
        assert!(inventory.all_parts()[1].ptr_eq(&saved));
        assert_eq!(saved.borrow().company_name(), Some("KMC"));
        // Products still hold the instance that was replaced.
        let wheel = inventory.all_products()[0].borrow();
        assert!(wheel.associated_parts()[1].ptr_eq(&old_chain));
    }

    #[test]
    fn open_without_a_part_at_index_is_refused() {
        let inventory = seeded();
        let err = ModifyPartScreen::open(&inventory, 3).unwrap_err();
        assert_eq!(err, ScreenError::NothingSelected);
    }

    #[test]
    fn save_after_the_row_disappeared_reports_index_error() {
        let mut inventory = seeded();
        let screen = ModifyPartScreen::open(&inventory, 2).unwrap();
        inventory.all_parts_mut().truncate(1);

        let err = screen.save(&mut inventory).unwrap_err();
        assert_eq!(
            err,
            ScreenError::Domain(DomainError::IndexOutOfRange { index: 2, len: 1 })
        );
    }
}
