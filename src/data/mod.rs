/// Data layer: the tabular container plus its ingestion, splitting, and
/// persistence operations.
///
/// Architecture:
/// ```text
///   delimited text file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  naive line/delimiter parse → appends to Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  labels, Vec<Record>, class index; inspection queries
///   └──────────┘
///        │                │
///        ▼                ▼
///   ┌──────────┐    ┌──────────┐
///   │  split    │    │  writer   │
///   │ shuffle + │    │ quoted    │
///   │ cut 3-way │    │ CSV out   │
///   └──────────┘    └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod split;
pub mod writer;
