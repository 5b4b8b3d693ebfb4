//! Core domain types for basket pricing.

use serde::Deserialize;
use std::fmt;

use crate::amount::{Amount, Quantity};
use crate::engine::InvalidArgument;

/// How an item's quantity is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Sold by the piece; quantities are whole numbers.
    #[default]
    Each,
    /// Sold by weight in kilograms.
    Kg,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Each => f.write_str("each"),
            Unit::Kg => f.write_str("kg"),
        }
    }
}

/// Annotation left on an item by the discount rule that priced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppliedDiscount {
    /// Receipt label of the rule, e.g. "Buy 2 pay 1".
    pub label: String,
    /// Cost of the line before the rule was applied.
    pub original_cost: Amount,
}

/// One priced line of a basket.
///
/// Items are values: discounts never edit an item, they produce a new one.
/// Equality is structural, which the engine relies on to detect convergence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    quantity: Quantity,
    unit: Unit,
    unit_price: Amount,
    cost: Amount,
    discount: Option<AppliedDiscount>,
}

impl Item {
    /// Create a full-price item. Its cost is `quantity * unit_price`.
    pub fn new(
        name: impl Into<String>,
        quantity: Quantity,
        unit: Unit,
        unit_price: Amount,
    ) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidArgument::EmptyName);
        }
        if !quantity.is_positive() {
            return Err(InvalidArgument::NonPositiveQuantity { name, quantity });
        }
        if unit == Unit::Each && quantity.as_whole().is_none() {
            return Err(InvalidArgument::FractionalCount { name, quantity });
        }
        if unit_price.is_negative() {
            return Err(InvalidArgument::NegativePrice {
                name,
                price: unit_price,
            });
        }

        let Some(cost) = unit_price.checked_mul(quantity) else {
            return Err(InvalidArgument::CostOverflow {
                name,
                quantity,
                price: unit_price,
            });
        };

        Ok(Self {
            name,
            quantity,
            unit,
            unit_price,
            cost,
            discount: None,
        })
    }

    /// Shorthand for a single piece sold at `price`.
    pub fn each(name: impl Into<String>, price: Amount) -> Result<Self, InvalidArgument> {
        Self::new(name, Quantity::whole(1), Unit::Each, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// The price actually charged for this line.
    pub fn cost(&self) -> Amount {
        self.cost
    }

    /// The price of this line before any discount.
    pub fn original_cost(&self) -> Amount {
        self.unit_price * self.quantity
    }

    pub fn savings(&self) -> Amount {
        self.original_cost() - self.cost
    }

    pub fn discount(&self) -> Option<&AppliedDiscount> {
        self.discount.as_ref()
    }

    /// Whether a rule already priced this line. Such lines are not offered
    /// to any rule again.
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// Whole units on the line: pieces, or kilograms when the weight is a
    /// whole number.
    pub fn units(&self) -> Option<i64> {
        self.quantity.as_whole()
    }

    /// A copy of this line charged `cost` by the rule labelled `label`.
    pub(crate) fn with_discount(&self, cost: Amount, label: &str) -> Self {
        Self {
            cost,
            discount: Some(AppliedDiscount {
                label: label.to_string(),
                original_cost: self.original_cost(),
            }),
            ..self.clone()
        }
    }

    /// Split a line of whole units into `units` pieces and the rest, both at
    /// full price. Returns `None` unless `0 < units < self.units()`.
    pub(crate) fn split(&self, units: i64) -> Option<(Self, Self)> {
        let total = self.units()?;
        if units <= 0 || units >= total {
            return None;
        }
        let piece = |units: i64| Self {
            quantity: Quantity::whole(units),
            cost: self.unit_price * units,
            discount: None,
            ..self.clone()
        };
        Some((piece(units), piece(total - units)))
    }

    /// Check the cost invariant `0 <= cost <= original_cost`.
    pub(crate) fn validate_cost(&self) -> Result<(), InvalidArgument> {
        let original = self.original_cost();
        if self.cost.is_negative() || self.cost > original {
            return Err(InvalidArgument::CostOutOfRange {
                name: self.name.clone(),
                cost: self.cost,
                original,
            });
        }
        Ok(())
    }
}
