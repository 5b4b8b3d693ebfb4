//! Basket pricing engine.
//!
//! The engine repeatedly applies every configured discount to the current
//! items and keeps the cheapest result, until no discount lowers the total
//! any further. Each accepted round strictly lowers a non-negative total,
//! so the search always terminates. It is a greedy search: the fixed point
//! it reaches is not guaranteed to be the global minimum when rules
//! interact.

use tracing::{debug, info};

use crate::Amount;
use crate::basket::Basket;
use crate::discount::{Discount, Rule};
use crate::model::Item;
use crate::receipt::Receipt;

mod error;
pub use error::InvalidArgument;

/// Sum of the actual cost of `items`.
pub fn total(items: &[Item]) -> Amount {
    items.iter().map(Item::cost).sum()
}

/// Result of pricing a collection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pricing {
    /// The cheapest collection found; a fixed point of every discount.
    pub items: Vec<Item>,
    /// Rounds evaluated, including the final one that changed nothing.
    pub rounds: usize,
}

impl Pricing {
    pub fn total(&self) -> Amount {
        total(&self.items)
    }
}

/// A candidate collection produced by one discount during a round.
struct Candidate {
    items: Vec<Item>,
    total: Amount,
    /// Index of the discount that produced it.
    rule: usize,
}

/// The pricing engine, configured once with an ordered set of discounts.
///
/// Discount order only matters to break ties: when two discounts reach the
/// same total, the one configured first wins. Doing nothing beats both.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    discounts: Vec<Discount>,
}

/// Public API
impl Engine {
    pub fn new(discounts: impl IntoIterator<Item = Discount>) -> Self {
        Self {
            discounts: discounts.into_iter().collect(),
        }
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Price a basket and freeze the result into a receipt.
    pub fn checkout(&self, basket: &Basket) -> Receipt {
        let pricing = self.price(basket.items());
        info!(
            items = basket.len(),
            rounds = pricing.rounds,
            total = %pricing.total(),
            "basket checked out"
        );
        Receipt::from_priced(pricing.items)
    }

    /// Find the cheapest collection reachable by applying discounts one
    /// round at a time. `items` is never modified.
    pub fn price(&self, items: &[Item]) -> Pricing {
        let mut current = items.to_vec();
        let mut current_total = total(&current);
        let mut rounds = 0;

        loop {
            rounds += 1;

            match self.best_candidate(&current, current_total) {
                Some(best) if best.items != current => {
                    debug!(
                        round = rounds,
                        rule = %self.discounts[best.rule].label(),
                        from = %current_total,
                        to = %best.total,
                        "discount accepted"
                    );
                    current = best.items;
                    current_total = best.total;
                }
                _ => break,
            }
        }

        info!(
            rounds,
            subtotal = %total(items),
            total = %current_total,
            "pricing converged"
        );
        Pricing {
            items: current,
            rounds,
        }
    }
}

/// Private API
impl Engine {
    /// Apply every discount to `current` and return the cheapest result
    /// strictly below `current_total`, earliest discount first on ties.
    fn best_candidate(&self, current: &[Item], current_total: Amount) -> Option<Candidate> {
        self.discounts
            .iter()
            .enumerate()
            .map(|(rule, discount)| {
                let items = discount.apply(current);
                Candidate {
                    total: total(&items),
                    items,
                    rule,
                }
            })
            .filter(|candidate| {
                let cheaper = candidate.total < current_total;
                if !cheaper {
                    debug!(
                        rule = %self.discounts[candidate.rule].label(),
                        total = %candidate.total,
                        "discount changes nothing"
                    );
                }
                cheaper
            })
            .reduce(|best, candidate| {
                if candidate.total < best.total {
                    candidate
                } else {
                    best
                }
            })
    }
}
