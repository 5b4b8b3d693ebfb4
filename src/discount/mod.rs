//! Discount rules.
//!
//! A rule maps an item collection to a possibly cheaper one. Rules are pure:
//! they never touch their input, leave unaffected items as they are, and
//! only consider lines that no rule has priced yet.

use crate::amount::Amount;
use crate::engine::InvalidArgument;
use crate::model::Item;

mod fixed;
mod n_for_m;

pub use fixed::FixedPrice;
pub use n_for_m::NForM;

/// The capability every discount rule provides.
pub trait Rule: Send + Sync {
    /// Label printed on the receipt under affected lines.
    fn label(&self) -> String;

    /// Return a new collection with this rule applied once.
    fn apply(&self, items: &[Item]) -> Vec<Item>;
}

/// The closed set of supported discount rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discount {
    FixedPrice(FixedPrice),
    NForM(NForM),
}

impl Discount {
    pub fn fixed_price(product: impl Into<String>, price: Amount) -> Result<Self, InvalidArgument> {
        FixedPrice::new(product, price).map(Discount::FixedPrice)
    }

    pub fn n_for_m(product: impl Into<String>, n: u32, m: u32) -> Result<Self, InvalidArgument> {
        NForM::new(product, n, m).map(Discount::NForM)
    }

    pub fn product(&self) -> &str {
        match self {
            Discount::FixedPrice(rule) => rule.product(),
            Discount::NForM(rule) => rule.product(),
        }
    }
}

impl Rule for Discount {
    fn label(&self) -> String {
        match self {
            Discount::FixedPrice(rule) => rule.label(),
            Discount::NForM(rule) => rule.label(),
        }
    }

    fn apply(&self, items: &[Item]) -> Vec<Item> {
        match self {
            Discount::FixedPrice(rule) => rule.apply(items),
            Discount::NForM(rule) => rule.apply(items),
        }
    }
}

impl From<FixedPrice> for Discount {
    fn from(rule: FixedPrice) -> Self {
        Discount::FixedPrice(rule)
    }
}

impl From<NForM> for Discount {
    fn from(rule: NForM) -> Self {
        Discount::NForM(rule)
    }
}

/// Shared product-name check for rule constructors.
fn require_product(product: String) -> Result<String, InvalidArgument> {
    if product.trim().is_empty() {
        Err(InvalidArgument::EmptyName)
    } else {
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_validate() {
        assert!(Discount::fixed_price("Butter", Amount::from_float(1.7)).is_ok());
        assert!(Discount::fixed_price("", Amount::from_float(1.7)).is_err());
        assert!(Discount::n_for_m("Bread", 2, 1).is_ok());
        assert!(Discount::n_for_m("Bread", 1, 2).is_err());
    }

    #[test]
    fn enum_dispatches_to_variant() {
        let fixed = Discount::fixed_price("Butter", Amount::from_float(2.5)).unwrap();
        let group = Discount::n_for_m("Bread", 3, 2).unwrap();

        assert_eq!(fixed.label(), "Buy 1 for 2.50");
        assert_eq!(fixed.product(), "Butter");
        assert_eq!(group.label(), "Buy 3 pay 2");
        assert_eq!(group.product(), "Bread");
    }

    #[test]
    fn rules_are_usable_as_trait_objects() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(FixedPrice::new("Butter", Amount::from_float(1.0)).unwrap()),
            Box::new(NForM::new("Bread", 2, 1).unwrap()),
        ];
        let items = vec![Item::each("Butter", Amount::from_float(2.0)).unwrap()];

        let costs: Vec<Amount> = rules
            .iter()
            .map(|rule| rule.apply(&items).iter().map(Item::cost).sum())
            .collect();
        assert_eq!(costs, vec![Amount::from_float(1.0), Amount::from_float(2.0)]);
    }
}
