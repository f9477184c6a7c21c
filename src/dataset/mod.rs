#[allow(clippy::module_inception)]
mod dataset;
mod error;
mod lenient;
mod load;
mod models;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use dataset::{Dataset, Problem, Sheets};
pub use error::LoadError;
pub use load::{load_dataset, read_sheets};
pub use models::{Album, Band, Gig, Performance, Person, SheetName, SheetRow, Song};
