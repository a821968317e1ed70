pub mod analyzers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod output;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{ScoreError, StorageError, ValidationError};
pub use record::{Dataset, RatingRecord, Scores};
pub use store::{CsvStore, RecordStore, load_dataset, persist};
pub use validate::{RatingForm, submit_rating};
