use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId, Shared};

/// Shared handle to a part held by the store, product associations and screens.
pub type PartRef = Shared<Part>;

/// Where a part comes from. Exactly one variant applies to a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Produced in-house on the given machine.
    InHouse { machine_id: i32 },
    /// Bought from an outside vendor.
    Outsourced { company_name: String },
}

impl PartSource {
    pub fn label(&self) -> &'static str {
        match self {
            PartSource::InHouse { .. } => "In-House",
            PartSource::Outsourced { .. } => "Outsourced",
        }
    }
}

/// Catalog part.
///
/// `min <= stock <= max` and a non-negative price are expected but not
/// enforced here; the entity stores any combination it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    id: PartId,
    name: String,
    price: Decimal,
    stock: i32,
    min: i32,
    max: i32,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        min: i32,
        max: i32,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            min,
            max,
            source,
        }
    }

    pub fn in_house(
        id: PartId,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        min: i32,
        max: i32,
        machine_id: i32,
    ) -> Self {
        Self::new(id, name, price, stock, min, max, PartSource::InHouse { machine_id })
    }

    pub fn outsourced(
        id: PartId,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        min: i32,
        max: i32,
        company_name: impl Into<String>,
    ) -> Self {
        let source = PartSource::Outsourced {
            company_name: company_name.into(),
        };
        Self::new(id, name, price, stock, min, max, source)
    }

    /// Wrap into a shared handle, ready for the store.
    pub fn into_ref(self) -> PartRef {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    /// Machine id of an in-house part.
    pub fn machine_id(&self) -> Option<i32> {
        match &self.source {
            PartSource::InHouse { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Vendor of an outsourced part.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::InHouse { .. } => None,
            PartSource::Outsourced { company_name } => Some(company_name),
        }
    }

    pub fn set_id(&mut self, id: PartId) {
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

    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }

    /// Mutable access to the variant field (machine id or company name).
    pub fn source_mut(&mut self) -> &mut PartSource {
        &mut self.source
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
