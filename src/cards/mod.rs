//! Card system: prompt and answer cards, blank markers, catalogs.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier, unique within a catalog
//! - `CardKind`: `Common` (prompt) or `Private` (answer)
//! - `Card`: Static card data
//! - `PlayedCard`: A submitted answer tagged with its blank slot
//! - `Catalog`: The read-only prompt and answer lists for a game

pub mod blanks;
pub mod catalog;
pub mod definition;

pub use blanks::{count_blanks, fill_blanks};
pub use catalog::{Catalog, CatalogError};
pub use definition::{Card, CardId, CardKind, PlayedCard};
