/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  header row, name→index map, column-major cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │ Series / WedgeSeries  │  (x, y) points or wedge labels+values
///   └──────────────────────┘
/// ```
pub mod loader;
pub mod model;
