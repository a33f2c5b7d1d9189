/// Catalog insertion errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	/// A formula with this id is already registered and replacement was not requested.
	#[error("duplicate formula id {id:?} (already provided by {existing_source:?})")]
	DuplicateFormula { id: String, existing_source: Option<String> },

	#[error("formula id must not be empty")]
	EmptyId,
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
