pub mod error;
pub mod types;

pub use error::{CodeError, Result};
pub use types::{CodeRecord, NewRecord};
