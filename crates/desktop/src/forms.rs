//! Form state and input validation for the part and product editors.
//!
//! Forms hold raw text exactly as typed. Turning that text into an entity is
//! the only place stock ranges, min/max ordering and numeric formats are
//! checked; the domain types accept anything.

use core::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use stockroom_core::{Entity, PartId, ProductId};
use stockroom_parts::{Part, PartSource};
use stockroom_products::Product;

/// Reasons a form cannot be saved. Messages are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("InHouse or Outsourced must be selected.")]
    SourceNotSelected,

    #[error("Name field must be filled in.")]
    MissingName,

    #[error("Min field must be filled in.")]
    MissingMin,

    #[error("Max field must be filled in.")]
    MissingMax,

    #[error("Invalid input format. Please enter valid numeric values.")]
    InvalidNumber { field: &'static str },

    #[error("Minimum must be less than the Maximum.")]
    MinExceedsMax,

    #[error("The inventory must be within the minimum and maximum range.")]
    StockOutOfRange,

    #[error("Price cannot be negative.")]
    NegativePrice,
}

/// Which radio button is selected on the part editor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceKind {
    InHouse,
    Outsourced,
}

impl SourceKind {
    /// Caption of the shared machine-id / company-name field.
    pub fn field_label(self) -> &'static str {
        match self {
            SourceKind::InHouse => "Machine ID",
            SourceKind::Outsourced => "Company Name",
        }
    }
}

/// Fields shared by the part and product editors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockFields {
    pub id: String,
    pub name: String,
    pub stock: String,
    pub price: String,
    pub min: String,
    pub max: String,
}

/// Checked numeric values of [`StockFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct StockValues {
    name: String,
    price: Decimal,
    stock: i32,
    min: i32,
    max: i32,
}

impl StockFields {
    fn prefill(
        id: impl ToString,
        name: &str,
        stock: i32,
        price: Decimal,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    fn validate(&self) -> Result<StockValues, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if self.min.trim().is_empty() {
            return Err(FormError::MissingMin);
        }
        if self.max.trim().is_empty() {
            return Err(FormError::MissingMax);
        }

        let stock = parse_field(&self.stock, "stock")?;
        let price: Decimal = parse_field(&self.price, "price")?;
        let max = parse_field(&self.max, "max")?;
        let min = parse_field(&self.min, "min")?;

        if min > max {
            return Err(FormError::MinExceedsMax);
        }
        if stock < min || stock > max {
            return Err(FormError::StockOutOfRange);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(FormError::NegativePrice);
        }

        Ok(StockValues {
            name: name.to_string(),
            price,
            stock,
            min,
            max,
        })
    }
}

fn parse_field<T: FromStr>(text: &str, field: &'static str) -> Result<T, FormError> {
    text.trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

/// Part editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartForm {
    pub fields: StockFields,
    pub source: Option<SourceKind>,
    /// Machine id or company name, depending on `source`.
    pub source_value: String,
}

impl PartForm {
    /// Form pre-filled from an existing part.
    pub fn from_part(part: &Part) -> Self {
        let (source, source_value) = match part.source() {
            PartSource::InHouse { machine_id } => (SourceKind::InHouse, machine_id.to_string()),
            PartSource::Outsourced { company_name } => {
                (SourceKind::Outsourced, company_name.clone())
            }
        };
        Self {
            fields: StockFields::prefill(
                part.id(),
                part.name(),
                part.stock(),
                part.price(),
                part.min(),
                part.max(),
            ),
            source: Some(source),
            source_value,
        }
    }

    /// The id typed into the (read-only) id field.
    pub fn parse_id(&self) -> Result<PartId, FormError> {
        parse_field::<i32>(&self.fields.id, "id").map(PartId::new)
    }

    /// Validate the form and build a part carrying `id`.
    pub fn build(&self, id: PartId) -> Result<Part, FormError> {
        let source_kind = self.source.ok_or(FormError::SourceNotSelected)?;
        let values = self.fields.validate()?;

        let source = match source_kind {
            SourceKind::InHouse => PartSource::InHouse {
                machine_id: parse_field(&self.source_value, "machine_id")?,
            },
            SourceKind::Outsourced => PartSource::Outsourced {
                company_name: self.source_value.trim().to_string(),
            },
        };

        Ok(Part::new(
            id,
            values.name,
            values.price,
            values.stock,
            values.min,
            values.max,
            source,
        ))
    }
}

/// Product editor state (associated parts are staged by the screen, not here).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub fields: StockFields,
}

impl ProductForm {
    /// Form pre-filled from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            fields: StockFields::prefill(
                product.id(),
                product.name(),
                product.stock(),
                product.price(),
                product.min(),
                product.max(),
            ),
        }
    }

    pub fn parse_id(&self) -> Result<ProductId, FormError> {
        parse_field::<i32>(&self.fields.id, "id").map(ProductId::new)
    }

    /// Validate the form and build a product with no associated parts.
    pub fn build(&self, id: ProductId) -> Result<Product, FormError> {
        let values = self.fields.validate()?;
        Ok(Product::new(
            id,
            values.name,
            values.price,
            values.stock,
            values.min,
            values.max,
        ))
    }
}
