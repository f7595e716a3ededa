pub mod fallible;
pub mod fetch;
pub mod file_manager;
pub mod numbers;
pub mod text;
pub mod timing;
pub mod tour;
pub mod words;

pub use crate::domain::model::{FetchResult, Person};
pub use crate::domain::ports::{Fetcher, TourSettings};
pub use crate::utils::error::Result;
