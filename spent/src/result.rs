pub type Result<T> = std::result::Result<T, Error>;

#[derive(derive_more::Error, derive_more::Display, Debug)]
pub enum Error {
    #[display("Not found")]
    NotFound,
    #[display("Conflict with existing data. {_0}")]
    NonUnique(#[error(not(source))] String),
    #[display("Unknown category. {_0}")]
    UnknownCategory(#[error(not(source))] String),
    #[display("Unable to parse date {_0:?}")]
    DateParse(#[error(not(source))] String),
    #[display("Invalid. {_0}")]
    Invalid(#[error(not(source))] String),
    #[display("Aborted!")]
    Aborted,
    #[display("Database error. {_0}")]
    Database(spent_db::Error),
}

impl Error {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Aborted)
    }
}

impl From<spent_db::Error> for Error {
    fn from(e: spent_db::Error) -> Error {
        use spent_db::Error as DbError;

        match e {
            DbError::NotFound => Error::NotFound,
            DbError::NonUnique(message) => Error::NonUnique(message),
            DbError::ForeignKey(message) => Error::UnknownCategory(message),
            DbError::Invalid(message) => Error::Invalid(message),
            _ => Error::Database(e),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Error {
        spent_db::Error::from(e).into()
    }
}
