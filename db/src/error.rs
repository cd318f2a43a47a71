use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("{0}")]
    Custom(String),
}

pub type DbResult<T> = Result<T, DbError>;
