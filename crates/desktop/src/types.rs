//! Table rows shown by the screens (read models of parts and products).

use rust_decimal::Decimal;
use serde::Serialize;

use stockroom_core::{Entity, PartId, ProductId};
use stockroom_parts::{Part, PartSource};
use stockroom_products::Product;

/// One row of a parts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartRow {
    pub id: PartId,
    pub name: String,
    pub stock: i32,
    pub price: Decimal,
    pub source: PartSource,
}

impl From<&Part> for PartRow {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id(),
            name: part.name().to_string(),
            stock: part.stock(),
            price: part.price(),
            source: part.source().clone(),
        }
    }
}

/// One row of a products table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub stock: i32,
    pub price: Decimal,
    pub associated_part_ids: Vec<PartId>,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            stock: product.stock(),
            price: product.price(),
            associated_part_ids: product.associated_parts().iter().map(|p| p.id()).collect(),
        }
    }
}

/// Both main-screen tables at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    pub parts: Vec<PartRow>,
    pub products: Vec<ProductRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn product_row_lists_associated_part_ids_in_order() {
        let mut product = Product::new(ProductId::new(1), "Big Wheel", dec!(200.00), 5, 1, 5);
        product.add_associated_part(
            Part::in_house(PartId::new(2), "chain", dec!(15.00), 10, 3, 10, 7).into_ref(),
        );
        product.add_associated_part(
            Part::in_house(PartId::new(1), "belt", dec!(10.00), 10, 3, 20, 1).into_ref(),
        );

        let row = ProductRow::from(&product);
        assert_eq!(row.associated_part_ids, vec![PartId::new(2), PartId::new(1)]);
    }

    #[test]
    fn part_row_serializes_price_as_string_and_tags_source() {
        let part = Part::outsourced(PartId::new(3), "screw", dec!(2.00), 10, 3, 15, "Acme");
        let json = serde_json::to_value(PartRow::from(&part)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], "2.00");
        assert_eq!(json["source"]["kind"], "outsourced");
        assert_eq!(json["source"]["company_name"], "Acme");
    }
}
