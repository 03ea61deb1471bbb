//! Media metadata: format catalog, resolved records, and the resolver seam

pub mod catalog;
pub mod reference;
pub mod resolver;

// Re-exports for convenience
pub use catalog::{FormatOption, MediaFormat, FORMAT_CATALOG};
pub use reference::{MediaDetails, MediaReference};
pub use resolver::{MediaResolver, MockResolver};
