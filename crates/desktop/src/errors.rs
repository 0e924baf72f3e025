use thiserror::Error;

use stockroom_core::{DomainError, ProductId};

use crate::forms::FormError;

/// Why a screen action was refused. Messages are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Select a part first.")]
    NothingSelected,

    #[error("Cannot delete a product with associated parts.")]
    ProductHasAssociatedParts { product_id: ProductId },

    #[error("The selected product is no longer in the inventory.")]
    ProductNotInInventory { product_id: ProductId },

    #[error("Please enter a part ID or name to search.")]
    EmptySearch,

    #[error("No part found with the specified ID or name.")]
    NoMatchingPart,

    #[error("Please select a valid part from the list.")]
    PartNotStaged,
}
