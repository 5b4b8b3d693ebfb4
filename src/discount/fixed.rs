use crate::amount::Amount;
use crate::engine::InvalidArgument;
use crate::model::Item;

use super::{Rule, require_product};

/// Sell a product at a fixed price per unit of measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPrice {
    product: String,
    price: Amount,
}

impl FixedPrice {
    pub fn new(product: impl Into<String>, price: Amount) -> Result<Self, InvalidArgument> {
        let product = require_product(product.into())?;
        if price.is_negative() {
            return Err(InvalidArgument::NegativePrice {
                name: product,
                price,
            });
        }
        Ok(Self { product, price })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

impl Rule for FixedPrice {
    fn label(&self) -> String {
        format!("Buy 1 for {:.2}", self.price)
    }

    /// Reprice every full-price line of the product, when that is cheaper.
    fn apply(&self, items: &[Item]) -> Vec<Item> {
        let label = self.label();
        items
            .iter()
            .map(|item| {
                if item.is_discounted() || item.name() != self.product {
                    return item.clone();
                }
                let cost = self.price * item.quantity();
                if cost < item.cost() {
                    item.with_discount(cost, &label)
                } else {
                    item.clone()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Quantity;
    use crate::model::Unit;

    fn each(name: &str, price: f64) -> Item {
        Item::each(name, Amount::from_float(price)).unwrap()
    }

    fn total(items: &[Item]) -> Amount {
        items.iter().map(Item::cost).sum()
    }

    #[test]
    fn new_rejects_negative_price() {
        let result = FixedPrice::new("Butter", Amount::from_float(-1.0));
        assert!(matches!(result, Err(InvalidArgument::NegativePrice { .. })));
    }

    #[test]
    fn overrides_matching_items_only() {
        let rule = FixedPrice::new("Butter", Amount::from_float(1.7)).unwrap();
        let items = vec![each("Bread", 2.0), each("Butter", 2.0)];

        let result = rule.apply(&items);

        assert_eq!(result[0], items[0]);
        assert_eq!(result[1].cost(), Amount::from_float(1.7));
        assert_eq!(result[1].savings(), Amount::from_float(0.3));
        assert_eq!(result[1].discount().unwrap().label, "Buy 1 for 1.70");
        assert_eq!(total(&result), Amount::from_float(3.7));
    }

    #[test]
    fn never_raises_a_price() {
        let rule = FixedPrice::new("Butter", Amount::from_float(3.0)).unwrap();
        let items = vec![each("Butter", 2.0)];
        assert_eq!(rule.apply(&items), items);
    }

    #[test]
    fn skips_already_discounted_items() {
        let rule = FixedPrice::new("Butter", Amount::from_float(1.0)).unwrap();
        let items = vec![each("Butter", 2.0).with_discount(Amount::from_float(1.5), "Other")];
        assert_eq!(rule.apply(&items), items);
    }

    #[test]
    fn scales_with_quantity() {
        let rule = FixedPrice::new("Onions", Amount::from_float(0.8)).unwrap();
        let onions = Item::new("Onions", Quantity::from_float(1.5), Unit::Kg, Amount::from_float(1.0)).unwrap();

        let result = rule.apply(&[onions]);

        assert_eq!(result[0].cost(), Amount::from_float(1.2));
        assert_eq!(result[0].original_cost(), Amount::from_float(1.5));
    }

    #[test]
    fn does_not_mutate_input() {
        let rule = FixedPrice::new("Butter", Amount::from_float(1.0)).unwrap();
        let items = vec![each("Butter", 2.0)];
        let snapshot = items.clone();
        let _ = rule.apply(&items);
        assert_eq!(items, snapshot);
    }
}
