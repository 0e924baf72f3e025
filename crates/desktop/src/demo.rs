//! Demo catalog loaded at startup: a few bicycle parts and three products built
//! from them.

use rust_decimal::Decimal;

use stockroom_core::{PartId, ProductId};
use stockroom_inventory::Inventory;
use stockroom_parts::Part;
use stockroom_products::Product;

pub fn seed(inventory: &mut Inventory) {
    let belt =
        Part::in_house(PartId::new(1), "belt", Decimal::new(1000, 2), 10, 3, 20, 1).into_ref();
    let chain =
        Part::in_house(PartId::new(2), "chain", Decimal::new(1500, 2), 10, 3, 10, 7).into_ref();
    let screw = Part::outsourced(
        PartId::new(3),
        "screw",
        Decimal::new(200, 2),
        10,
        3,
        15,
        "Tim's Bike Shack",
    )
    .into_ref();

    inventory.add_part(belt.clone());
    inventory.add_part(chain.clone());
    inventory.add_part(screw);

    for (id, name) in [(1, "Big Wheel"), (2, "Adult Bike"), (3, "Moto Bike")] {
        let product =
            Product::new(ProductId::new(id), name, Decimal::new(20000, 2), 5, 1, 5).into_ref();
        inventory.add_product(product.clone());
        let mut product = product.borrow_mut();
        product.add_associated_part(belt.clone());
        product.add_associated_part(chain.clone());
    }

    tracing::info!(
        parts = inventory.all_parts().len(),
        products = inventory.all_products().len(),
        "seeded demo catalog"
    );
}
