use thiserror::Error;

/// Constraint violations (duplicate slug, SKU, coupon code; negative price
/// checks; protected foreign keys) surface as the storage engine's own
/// errors wrapped here, untranslated.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing configuration: {0}")]
    Config(#[from] std::env::VarError),

    #[error("database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("migration error")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
