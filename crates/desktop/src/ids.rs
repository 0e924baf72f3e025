//! Id allocation for newly added entities.
//!
//! Ids are drawn at random from a small range and are not checked against the
//! store, so collisions are possible; lookups return the first match.

use rand::Rng;

use stockroom_core::{PartId, ProductId};

const PART_ID_RANGE: core::ops::Range<i32> = 0..1000;
const PRODUCT_ID_RANGE: core::ops::Range<i32> = 0..100;

pub fn random_part_id<R: Rng>(rng: &mut R) -> PartId {
    PartId::new(rng.random_range(PART_ID_RANGE))
}

pub fn random_product_id<R: Rng>(rng: &mut R) -> ProductId {
    ProductId::new(rng.random_range(PRODUCT_ID_RANGE))
}
