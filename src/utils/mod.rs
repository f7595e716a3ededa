pub mod error;
pub mod logger;
pub mod transcript;
pub mod validation;
