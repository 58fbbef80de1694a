pub mod error;
pub mod health;
pub mod things;

pub use error::AppError;
