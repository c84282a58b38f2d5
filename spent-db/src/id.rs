use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, derive_more::From, derive_more::Into, derive_more::Display,
)]
pub struct Id(i64);

impl Id {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromSql for Id {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(value.as_i64()?.into())
    }
}

impl ToSql for Id {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}
