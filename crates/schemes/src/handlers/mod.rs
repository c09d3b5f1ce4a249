pub mod error;
pub mod health;
pub mod schemes;

pub use error::AppError;
