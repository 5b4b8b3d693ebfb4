use std::io;

use crate::Amount;
use crate::model::{Item, Unit};

use super::Receipt;

/// Renders a [`Receipt`] as fixed-width text.
#[derive(Debug, Clone)]
pub struct Printer {
    width: usize,
    currency: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            width: 30,
            currency: String::new(),
        }
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Symbol printed in front of unit prices, e.g. "£".
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn print(&self, receipt: &Receipt, out: &mut impl io::Write) -> io::Result<()> {
        out.write_all(self.render(receipt).as_bytes())
    }

    pub fn render(&self, receipt: &Receipt) -> String {
        let mut text = String::new();

        for item in receipt.items() {
            self.item_lines(&mut text, item);
        }

        let savings = if receipt.savings().is_zero() {
            format!("{:.2}", Amount::ZERO)
        } else {
            format!("-{:.2}", receipt.savings())
        };

        self.line(&mut text, "", "---");
        self.line(&mut text, "Sub-total", &format!("{:.2}", receipt.subtotal()));
        self.line(&mut text, "Total savings", &savings);
        self.line(&mut text, "", "---");
        self.line(&mut text, "Total to Pay", &format!("{:.2}", receipt.total()));
        text
    }

    fn item_lines(&self, text: &mut String, item: &Item) {
        let original = format!("{:.2}", item.original_cost());
        let price = item.unit_price();

        match (item.unit(), item.units()) {
            (Unit::Each, Some(1)) => self.line(text, item.name(), &original),
            (Unit::Each, units) => {
                text.push_str(&format!("{}\n", item.name()));
                let count = units.map_or_else(|| item.quantity().to_string(), |u| u.to_string());
                let detail = format!("{count} @ {}{:.2}", self.currency, price);
                self.line(text, &detail, &original);
            }
            (Unit::Kg, _) => {
                text.push_str(&format!("{}\n", item.name()));
                let detail = format!("{} kg @ {}{:.2}/kg", item.quantity(), self.currency, price);
                self.line(text, &detail, &original);
            }
        }

        if let Some(discount) = item.discount() {
            let savings = item.savings();
            if !savings.is_zero() {
                self.line(text, &format!("  {}", discount.label), &format!("-{savings:.2}"));
            }
        }
    }

    /// Write `left` and `right` on one line, right-aligned to the width.
    fn line(&self, text: &mut String, left: &str, right: &str) {
        let right_len = right.chars().count();
        let left_len = left.chars().count();
        let gap = self.width.saturating_sub(left_len + right_len).max(usize::from(left_len > 0));
        text.push_str(&format!("{left}{:gap$}{right}\n", ""));
    }
}
