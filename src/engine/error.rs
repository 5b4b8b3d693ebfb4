//! Error types for basket pricing.

use thiserror::Error;

use crate::amount::{Amount, Quantity};

/// Rejected input to an item, discount rule or receipt.
///
/// Pricing itself never fails: every well-formed item collection can be
/// priced, so this is the only error the core surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("product name must not be empty")]
    EmptyName,

    #[error("{name}: quantity must be positive, got {quantity}")]
    NonPositiveQuantity { name: String, quantity: Quantity },

    #[error("{name}: count-based quantity must be whole, got {quantity}")]
    FractionalCount { name: String, quantity: Quantity },

    #[error("{name}: price must not be negative, got {price}")]
    NegativePrice { name: String, price: Amount },

    #[error("{name}: cost of {quantity} at {price} does not fit in an amount")]
    CostOverflow {
        name: String,
        quantity: Quantity,
        price: Amount,
    },

    #[error("{product}: n-for-m requires 0 < m < n, got {n} for {m}")]
    InvalidGroup { product: String, n: u32, m: u32 },

    #[error("{name}: cost {cost} outside of [0, {original}]")]
    CostOutOfRange {
        name: String,
        cost: Amount,
        original: Amount,
    },
}
