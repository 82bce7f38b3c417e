use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeError {
    #[error("Name is empty, cannot derive a code prefix")]
    EmptyName,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Code generation exhausted after {attempts} attempts for '{entity}'")]
    Exhausted { entity: String, attempts: u32 },

    #[error("Unique constraint violation: '{entity}' already has code '{code}'")]
    UniqueViolation { entity: String, code: String },

    #[error("Entity kind '{0}' is not registered")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, CodeError>;
