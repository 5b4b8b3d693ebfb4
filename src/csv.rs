use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::amount::{Amount, Quantity};
use crate::discount::Discount;
use crate::engine::InvalidArgument;
use crate::model::{Item, Unit};

/// Errors that can occur when reading basket or discount csv files
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("{path}: failed to open: {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized discount type '{discount_type}'")]
    UnrecognizedType { line: usize, discount_type: String },

    #[error("line {line}: {discount_type} missing {field}")]
    MissingField {
        line: usize,
        discount_type: String,
        field: &'static str,
    },

    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        source: InvalidArgument,
    },
}

#[derive(Debug, Deserialize)]
struct ItemRow {
    name: String,
    quantity: f64,
    unit: Unit,
    unit_price: f64,
}

#[derive(Debug, Deserialize)]
struct DiscountRow {
    r#type: String,
    product: String,
    price: Option<f64>,
    n: Option<u32>,
    m: Option<u32>,
}

fn open<R: for<'de> Deserialize<'de>>(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = (usize, Result<R, csv::Error>)>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    // 1-indexed, skip header
    Ok(reader
        .into_deserialize::<R>()
        .enumerate()
        .map(|(idx, row)| (idx + 2, row)))
}

/// Read basket items from a csv file with header `name,quantity,unit,unit_price`
pub fn read_items(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Item, CsvError>>, CsvError> {
    Ok(open::<ItemRow>(path)?.map(|(line, result)| {
        let row = result.map_err(|source| CsvError::Parse { line, source })?;
        Item::new(
            row.name,
            Quantity::from_float(row.quantity),
            row.unit,
            Amount::from_float(row.unit_price),
        )
        .map_err(|source| CsvError::Invalid { line, source })
    }))
}

/// Read discount rules from a csv file with header `type,product,price,n,m`
pub fn read_discounts(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Discount, CsvError>>, CsvError> {
    Ok(open::<DiscountRow>(path)?.map(|(line, result)| {
        let row = result.map_err(|source| CsvError::Parse { line, source })?;
        let missing = |field| CsvError::MissingField {
            line,
            discount_type: row.r#type.clone(),
            field,
        };
        let discount = match row.r#type.as_str() {
            "fixed" => {
                let price = row.price.ok_or_else(|| missing("price"))?;
                Discount::fixed_price(row.product.clone(), Amount::from_float(price))
            }
            "n_for_m" => {
                let n = row.n.ok_or_else(|| missing("n"))?;
                let m = row.m.ok_or_else(|| missing("m"))?;
                Discount::n_for_m(row.product.clone(), n, m)
            }
            other => {
                return Err(CsvError::UnrecognizedType {
                    line,
                    discount_type: other.to_string(),
                });
            }
        };
        discount.map_err(|source| CsvError::Invalid { line, source })
    }))
}
