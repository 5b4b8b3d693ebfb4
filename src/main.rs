use std::env;
use std::io;
use std::process::ExitCode;

use basket_eng::csv::{CsvError, read_discounts, read_items};
use basket_eng::{Basket, Discount, Engine, Printer};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Keep the rows that parsed, warn about the others.
fn valid_rows<T>(rows: impl Iterator<Item = Result<T, CsvError>>) -> impl Iterator<Item = T> {
    rows.filter_map(|row| row.map_err(|e| warn!("{e}")).ok())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(basket_path) = args.next() else {
        eprintln!("usage: basket-eng <basket.csv> [discounts.csv]");
        return ExitCode::from(2);
    };
    let discounts_path = args.next();

    for path in std::iter::once(&basket_path).chain(discounts_path.as_ref()) {
        if !path.ends_with(".csv") {
            warn!(path = %path, "input file seems to not be a csv file");
        }
    }

    let basket: Basket = match read_items(&basket_path) {
        Ok(rows) => valid_rows(rows).collect(),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let discounts: Vec<Discount> = match discounts_path.as_deref().map(read_discounts).transpose() {
        Ok(rows) => rows.map(|rows| valid_rows(rows).collect()).unwrap_or_default(),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let receipt = Engine::new(discounts).checkout(&basket);
    let printer = Printer::new().with_currency(env::var("BASKET_CURRENCY").unwrap_or_default());

    if let Err(e) = printer.print(&receipt, &mut io::stdout().lock()) {
        error!("failed to write receipt: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
