//! End-to-end catalog scenarios exercised through the public store API.

use rust_decimal_macros::dec;

use stockroom_core::{Entity, PartId, ProductId};
use stockroom_inventory::Inventory;
use stockroom_parts::{Part, PartRef};
use stockroom_products::{Product, ProductRef};

fn belt() -> PartRef {
    Part::in_house(PartId::new(1), "belt", dec!(10.00), 10, 3, 20, 1).into_ref()
}

fn chain() -> PartRef {
    Part::in_house(PartId::new(2), "chain", dec!(15.00), 10, 3, 10, 7).into_ref()
}

fn big_wheel() -> ProductRef {
    Product::new(ProductId::new(1), "Big Wheel", dec!(200.00), 5, 1, 5).into_ref()
}

#[test]
fn added_part_is_found_by_id_and_by_name() {
    let mut inventory = Inventory::new();
    let belt = belt();
    inventory.add_part(belt.clone());

    let by_id = inventory.lookup_part(PartId::new(1)).expect("belt by id");
    assert!(by_id.ptr_eq(&belt));

    let by_name = inventory.lookup_parts_by_name("belt");
    assert_eq!(by_name, vec![belt]);
}

#[test]
fn product_lists_associated_parts_in_insertion_order() {
    let belt = belt();
    let chain = chain();
    let wheel = big_wheel();

    wheel.borrow_mut().add_associated_part(belt.clone());
    wheel.borrow_mut().add_associated_part(chain.clone());

    let product = wheel.borrow();
    assert_eq!(product.associated_parts().len(), 2);
    assert_eq!(product.associated_parts(), &[belt, chain]);
}

#[test]
fn deleting_an_associated_part_leaves_a_dangling_association() {
    let mut inventory = Inventory::new();
    let belt = belt();
    let chain = chain();
    let wheel = big_wheel();
    inventory.add_part(belt.clone());
    inventory.add_part(chain.clone());
    inventory.add_product(wheel.clone());
    wheel.borrow_mut().add_associated_part(belt.clone());
    wheel.borrow_mut().add_associated_part(chain.clone());

    assert!(inventory.delete_part(&belt));

    assert_eq!(inventory.all_parts(), &[chain]);
    assert!(inventory.lookup_part(PartId::new(1)).is_none());
    // The product still refers to the part the store no longer holds.
    let product = wheel.borrow();
    assert!(product.associated_parts().iter().any(|p| p.ptr_eq(&belt)));
    assert_eq!(product.associated_parts()[0].borrow().name(), "belt");
}

#[test]
fn update_product_then_repopulate_restores_associations() {
    let mut inventory = Inventory::new();
    let belt = belt();
    let chain = chain();
    let wheel = big_wheel();
    inventory.add_product(wheel.clone());
    wheel.borrow_mut().add_associated_part(belt.clone());
    wheel.borrow_mut().add_associated_part(chain.clone());
    let previous_associations = wheel.borrow().associated_parts().to_vec();

    let revised =
        Product::new(ProductId::new(1), "Big Wheel Deluxe", dec!(250.00), 4, 1, 5).into_ref();
    let displaced = inventory.update_product(0, revised.clone()).unwrap();
    assert!(displaced.ptr_eq(&wheel));

    for part in previous_associations {
        revised.borrow_mut().add_associated_part(part);
    }

    let stored = inventory.lookup_product(ProductId::new(1)).unwrap();
    assert!(stored.ptr_eq(&revised));
    assert_eq!(stored.borrow().name(), "Big Wheel Deluxe");
    assert_eq!(stored.borrow().associated_parts(), &[belt, chain]);
}

#[test]
fn update_product_without_repopulate_leaves_no_associations() {
    let mut inventory = Inventory::new();
    let wheel = big_wheel();
    inventory.add_product(wheel.clone());
    wheel.borrow_mut().add_associated_part(belt());
    wheel.borrow_mut().add_associated_part(chain());

    let revised =
        Product::new(ProductId::new(1), "Big Wheel Deluxe", dec!(250.00), 4, 1, 5).into_ref();
    inventory.update_product(0, revised).unwrap();

    let stored = &inventory.all_products()[0];
    assert!(stored.borrow().associated_parts().is_empty());
    // The displaced product keeps its own list untouched.
    assert_eq!(wheel.borrow().associated_parts().len(), 2);
}

#[test]
fn one_part_can_back_several_products() {
    let mut inventory = Inventory::new();
    let belt = belt();
    inventory.add_part(belt.clone());

    let products: Vec<ProductRef> = ["Big Wheel", "Adult Bike", "Moto Bike"]
        .iter()
        .enumerate()
        .map(|(n, name)| {
            Product::new(ProductId::new(n as i32 + 1), *name, dec!(200.00), 5, 1, 5).into_ref()
        })
        .collect();
    for product in &products {
        product.borrow_mut().add_associated_part(belt.clone());
        inventory.add_product(product.clone());
    }

    belt.borrow_mut().set_stock(4);
    for product in inventory.all_products() {
        assert_eq!(product.borrow().associated_parts()[0].borrow().stock(), 4);
    }
}
