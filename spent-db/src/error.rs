use rusqlite::ffi;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Sqlite error: {0}")]
    Sqlite(rusqlite::Error),
    #[error("Not found")]
    NotFound,
    #[error("Conflict with existing data. {0}")]
    NonUnique(String),
    #[error("Reference to missing data. {0}")]
    ForeignKey(String),
    #[error("Invalid. {0}")]
    Invalid(String),
    #[error("Parsing version information")]
    VersionError(#[from] semver::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Error::NonUnique(msg.unwrap_or_default())
            }
            rusqlite::Error::SqliteFailure(e, msg)
                if e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                Error::ForeignKey(msg.unwrap_or_default())
            }
            _ => Error::Sqlite(e),
        }
    }
}
