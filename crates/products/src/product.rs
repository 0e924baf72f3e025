use rust_decimal::Decimal;

use stockroom_core::{Entity, ProductId, Shared};
use stockroom_parts::PartRef;

/// Shared handle to a product held by the store and screens.
pub type ProductRef = Shared<Product>;

/// Sellable product and its associated parts.
///
/// Like [`stockroom_parts::Part`], the stock range and price sign are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    stock: i32,
    min: i32,
    max: i32,
    associated_parts: Vec<PartRef>,
}

impl Product {
    /// Create a product with no associated parts.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            min,
            max,
            associated_parts: Vec::new(),
        }
    }

    /// Wrap into a shared handle, ready for the store.
    pub fn into_ref(self) -> ProductRef {
        Shared::new(self)
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
    }

    pub fn set_min(&mut self, min: i32) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// Associated parts in insertion order (the live list, not a copy).
    pub fn associated_parts(&self) -> &[PartRef] {
        &self.associated_parts
    }

    /// Mutable access to the live association list.
    pub fn associated_parts_mut(&mut self) -> &mut Vec<PartRef> {
        &mut self.associated_parts
    }

    /// Replace the whole association list.
    pub fn set_associated_parts(&mut self, parts: Vec<PartRef>) {
        self.associated_parts = parts;
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    /// Append a part to the association list. Duplicates are kept.
    pub fn add_associated_part(&mut self, part: PartRef) {
        self.associated_parts.push(part);
    }

    /// Remove every associated entry whose id equals `part`'s id.
    ///
    /// Matching is by id, not by handle identity: distinct part instances that
    /// share the id are removed too. Returns `true` if anything was removed.
    pub fn delete_associated_part(&mut self, part: &PartRef) -> bool {
        let id = part.id();
        let before = self.associated_parts.len();
        self.associated_parts.retain(|p| p.id() != id);
        self.associated_parts.len() != before
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use stockroom_core::PartId;
    use stockroom_parts::Part;

    fn big_wheel() -> Product {
        Product::new(ProductId::new(1), "Big Wheel", dec!(200.00), 5, 1, 5)
    }

    fn part(id: i32, name: &str) -> PartRef {
        Part::in_house(PartId::new(id), name, dec!(10.00), 10, 3, 20, 1).into_ref()
    }

    #[test]
    fn new_product_has_no_associated_parts() {
        let product = big_wheel();
        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.name(), "Big Wheel");
        assert_eq!(product.price(), dec!(200.00));
        assert!(product.associated_parts().is_empty());
        assert!(!product.has_associated_parts());
    }

    #[test]
    fn associated_parts_keep_insertion_order() {
        let belt = part(1, "belt");
        let chain = part(2, "chain");
        let mut product = big_wheel();

        product.add_associated_part(belt.clone());
        product.add_associated_part(chain.clone());

        assert_eq!(product.associated_parts(), &[belt, chain]);
    }

    #[test]
    fn duplicates_are_permitted() {
        let belt = part(1, "belt");
        let mut product = big_wheel();

        product.add_associated_part(belt.clone());
        product.add_associated_part(belt.clone());

        assert_eq!(product.associated_parts().len(), 2);
    }

    #[test]
    fn delete_associated_part_removes_every_entry_with_matching_id() {
        let belt = part(1, "belt");
        let belt_lookalike = part(1, "other belt");
        let chain = part(2, "chain");
        let mut product = big_wheel();
        product.add_associated_part(belt.clone());
        product.add_associated_part(chain.clone());
        product.add_associated_part(belt_lookalike);

        assert!(product.delete_associated_part(&belt));
        assert_eq!(product.associated_parts(), &[chain]);
    }

    #[test]
    fn delete_associated_part_matches_distinct_instance_by_id() {
        let belt = part(1, "belt");
        let mut product = big_wheel();
        product.add_associated_part(belt);

        let unrelated_instance = part(1, "not the stored one");
        assert!(product.delete_associated_part(&unrelated_instance));
        assert!(product.associated_parts().is_empty());
    }

    #[test]
    fn delete_associated_part_returns_false_when_nothing_matches() {
        let mut product = big_wheel();
        product.add_associated_part(part(1, "belt"));

        assert!(!product.delete_associated_part(&part(9, "sprocket")));
        assert_eq!(product.associated_parts().len(), 1);
    }

    #[test]
    fn association_list_is_live() {
        let belt = part(1, "belt");
        let mut product = big_wheel();
        product.add_associated_part(belt.clone());

        belt.borrow_mut().set_name("renamed");
        assert_eq!(product.associated_parts()[0].borrow().name(), "renamed");

        product.associated_parts_mut().clear();
        assert!(product.associated_parts().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: association delete removes exactly the entries sharing the id.
            #[test]
            fn delete_associated_part_is_id_based(
                ids in proptest::collection::vec(0i32..6, 0..20),
                target in 0i32..6
            ) {
                let mut product = big_wheel();
                for (n, id) in ids.iter().enumerate() {
                    product.add_associated_part(part(*id, &format!("p{n}")));
                }

                let removed = product.delete_associated_part(&part(target, "probe"));

                let expected: Vec<i32> = ids.iter().copied().filter(|id| *id != target).collect();
                let remaining: Vec<i32> = product
                    .associated_parts()
                    .iter()
                    .map(|p| p.id().get())
                    .collect();
                prop_assert_eq!(removed, ids.contains(&target));
                prop_assert_eq!(remaining, expected);
            }
        }
    }
}
