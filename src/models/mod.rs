pub mod columns;
pub mod dataset;
pub mod selection;

pub use columns::{ColumnMap, ResolvedColumn, SemanticRole};
pub use dataset::{Cell, Dataset, GeoPoint};
pub use selection::{Indicator, Selection};
