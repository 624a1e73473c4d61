/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, drop incomplete rows → WorldDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ WorldDataset  │  Vec<CountryRow>, country index, column bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply country + range predicates → filtered indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
