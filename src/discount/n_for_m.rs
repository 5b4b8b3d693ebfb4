use crate::engine::InvalidArgument;
use crate::model::Item;

use super::{Rule, require_product};

/// Buy `n` units of a product, pay for `m`.
///
/// Grouping counts units, not lines: a line of 4 loaves holds 4 units and
/// a 4 kg line holds 4 one-kilogram units. Lines with a fractional weight
/// cannot be divided into units and do not take part. Units are ranked by unit price,
/// most expensive first (ties keep basket order), and chunked into groups
/// of `n`; the last `n - m` units of every group are free, so each group
/// gives away its cheapest units. Leftover units keep their full price and
/// stay available to other rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NForM {
    product: String,
    n: u32,
    m: u32,
}

impl NForM {
    pub fn new(product: impl Into<String>, n: u32, m: u32) -> Result<Self, InvalidArgument> {
        let product = require_product(product.into())?;
        if m == 0 || m >= n {
            return Err(InvalidArgument::InvalidGroup { product, n, m });
        }
        Ok(Self { product, n, m })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn m(&self) -> u32 {
        self.m
    }

    /// Free positions in `[0, end)` of the ranked unit sequence.
    fn free_before(&self, end: i64) -> i64 {
        let (n, m) = (self.n as i64, self.m as i64);
        (end / n) * (n - m) + (end % n - m).max(0)
    }
}

/// Units of one eligible line taken into groups.
#[derive(Debug, Default, Clone, Copy)]
struct Allocation {
    grouped: i64,
    free: i64,
}

impl Rule for NForM {
    fn label(&self) -> String {
        format!("Buy {} pay {}", self.n, self.m)
    }

    fn apply(&self, items: &[Item]) -> Vec<Item> {
        let mut eligible: Vec<(usize, i64)> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_discounted() && item.name() == self.product)
            .filter_map(|(idx, item)| item.units().map(|units| (idx, units)))
            .collect();

        let available: i64 = eligible.iter().map(|(_, units)| units).sum();
        let grouped_total = (available / self.n as i64) * self.n as i64;
        if grouped_total == 0 {
            return items.to_vec();
        }

        // stable: equal prices keep basket order
        eligible.sort_by(|(a, _), (b, _)| items[*b].unit_price().cmp(&items[*a].unit_price()));

        let mut allocations = vec![Allocation::default(); items.len()];
        let mut position = 0;
        for (idx, units) in eligible {
            if position >= grouped_total {
                break;
            }
            let end = (position + units).min(grouped_total);
            allocations[idx] = Allocation {
                grouped: end - position,
                free: self.free_before(end) - self.free_before(position),
            };
            position = end;
        }

        let label = self.label();
        let mut result = Vec::with_capacity(items.len() + 1);
        for (item, allocation) in items.iter().zip(allocations) {
            if allocation.grouped == 0 {
                result.push(item.clone());
                continue;
            }
            let cost = item.unit_price() * (allocation.grouped - allocation.free);
            match item.split(allocation.grouped) {
                Some((grouped, rest)) => {
                    result.push(grouped.with_discount(cost, &label));
                    result.push(rest);
                }
                None => result.push(item.with_discount(cost, &label)),
            }
        }
        result
    }
}
