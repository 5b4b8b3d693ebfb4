//! Receipts derived from a priced item collection.

use crate::Amount;
use crate::engine::{InvalidArgument, total};
use crate::model::Item;

mod printer;
pub use printer::Printer;

/// Read-only summary of a finalized item collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    items: Vec<Item>,
    subtotal: Amount,
    total: Amount,
}

impl Receipt {
    /// Build a receipt from items priced elsewhere.
    ///
    /// Fails if any item costs less than zero or more than its original cost.
    pub fn new(items: Vec<Item>) -> Result<Self, InvalidArgument> {
        items.iter().try_for_each(Item::validate_cost)?;
        Ok(Self::from_priced(items))
    }

    /// Engine output always satisfies the cost invariant.
    pub(crate) fn from_priced(items: Vec<Item>) -> Self {
        let subtotal = items.iter().map(Item::original_cost).sum();
        let total = total(&items);
        Self {
            items,
            subtotal,
            total,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of the original cost of every item.
    pub fn subtotal(&self) -> Amount {
        self.subtotal
    }

    /// Sum of what is actually charged.
    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn savings(&self) -> Amount {
        self.subtotal - self.total
    }
}
