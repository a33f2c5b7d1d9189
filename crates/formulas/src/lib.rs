//! Formula metadata catalog.
//!
//! Formulas document how parameters relate: which registry paths (or other formulas) feed them
//! and which paths they produce. The catalog is append-only per id, except for the
//! [`FormulaCatalog::repair_bidirectional_links`] pass, which completes the symmetric
//! `related_formulas` relation in place.

mod catalog;
mod entry;
mod error;
mod links;

pub use catalog::FormulaCatalog;
pub use entry::FormulaEntry;
pub use error::{CatalogError, Result};
pub use links::{LinkRepair, RelatedLink};
