pub mod amount;
pub mod basket;
pub mod csv;
pub mod discount;
pub mod engine;
pub mod model;
pub mod receipt;

pub use amount::{Amount, Quantity};
pub use basket::{Basket, BasketBuilder};
pub use discount::{Discount, FixedPrice, NForM, Rule};
pub use engine::{Engine, InvalidArgument, Pricing};
pub use model::{AppliedDiscount, Item, Unit};
pub use receipt::{Printer, Receipt};
