use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::{debug, info, warn};
use thiserror::Error;

use super::coerce::{parse_number, parse_yen};
use super::model::{Dish, Nutrient};
use super::normalize::{self, HeaderMap};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every dish from the menu CSV at `path`, in file order.
///
/// Headers are normalized once (see [`normalize::normalize_header`]); cells
/// that cannot be read become `None`. Rows whose name is blank are dropped.
/// The file is re-read on every call.
pub fn load_menu(path: &Path) -> Result<Vec<Dish>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dishes = read_menu(file).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} dishes from {}", dishes.len(), path.display());
    Ok(dishes)
}

/// Parse menu CSV text from any reader. Split out of [`load_menu`] so the row
/// handling can be exercised without touching the filesystem.
pub fn read_menu<R: io::Read>(input: R) -> Result<Vec<Dish>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = HeaderMap::new(reader.headers()?.iter());
    debug!("header map: {headers:?}");
    if !headers.contains(normalize::NAME) {
        warn!("no name column recognised; every row will be skipped");
    }
    debug!(
        "nutrient columns: {:?}",
        headers.nutrients().collect::<Vec<_>>()
    );

    let mut dishes = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        match dish_from_record(&headers, &record) {
            Some(dish) => dishes.push(dish),
            None => debug!("row {row_no}: blank name, skipped"),
        }
    }
    Ok(dishes)
}

// ---------------------------------------------------------------------------
// Row → Dish
// ---------------------------------------------------------------------------

fn dish_from_record(headers: &HeaderMap, record: &StringRecord) -> Option<Dish> {
    // Later columns overwrite earlier ones that share a canonical key.
    let mut row: HashMap<&str, &str> = HashMap::with_capacity(headers.len());
    for (idx, cell) in record.iter().enumerate() {
        if let Some(key) = headers.key(idx) {
            row.insert(key, cell);
        }
    }

    let name = row.get(normalize::NAME).copied().unwrap_or("").trim();
    if name.is_empty() {
        return None;
    }

    let mut dish = Dish::new(name);
    dish.price = parse_yen(row.get(normalize::PRICE).copied());
    dish.url = row
        .get(normalize::URL)
        .map(|u| u.trim().to_string())
        .unwrap_or_default();

    for nutrient in Nutrient::ALL {
        let value = row
            .get(nutrient.key())
            .copied()
            .filter(|cell| !cell.is_empty())
            .and_then(|cell| parse_number(Some(cell)));
        dish.nutrients.set(nutrient, value);
    }
    Some(dish)
}
