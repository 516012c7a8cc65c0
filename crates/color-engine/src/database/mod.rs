//! Reference color database
//!
//! The dataset is loaded once into a [`ColorDatabase`] and never mutated.

mod database;
mod entry;
mod error;

pub use database::ColorDatabase;
pub use entry::ColorDatabaseEntry;
pub use error::DatasetError;
