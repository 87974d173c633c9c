/// Data layer: menu model, CSV loading, and queries.
///
/// Architecture:
/// ```text
///   menu .csv
///        │
///        ▼
///   ┌──────────┐   normalize: header → canonical key
///   │  loader   │   coerce:    cell   → Option<f64> / Option<u32>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Vec<Dish> │  file order, read-only after load
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  search / exact lookup / resolve targets → totals
///   └──────────┘
/// ```

pub mod coerce;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod query;
