use std::path::Path;

use semver::Version;

pub use rusqlite::{Connection, Transaction};

mod error;
pub use error::{Error, Result};

mod id;
pub use id::Id;

pub trait DatabaseTrait:
    From<Connection>
    + Into<Connection>
    + core::ops::Deref<Target = Connection>
    + core::ops::DerefMut<Target = Connection>
{
    fn open<T: AsRef<Path>>(path: T) -> Result<Self> {
        log::debug!("Opening database {}", path.as_ref().display());
        let connection = Connection::open(path)?;
        enforce_foreign_keys(&connection)?;
        Ok(connection.into())
    }

    fn memory() -> Result<Self> {
        let connection = Connection::open_in_memory()?;
        enforce_foreign_keys(&connection)?;
        Ok(connection.into())
    }

    fn foreign_keys(&self) -> Result<bool> {
        Ok(self.query_row("PRAGMA foreign_keys;", [], |row| {
            row.get::<usize, bool>(0)
        })?)
    }

    fn get<K>(&self, key: K) -> Result<Option<String>>
    where
        K: AsRef<str> + rusqlite::ToSql,
    {
        match self
            .prepare("SELECT value FROM spent WHERE key = ?")?
            .query_row([key], |row| row.get::<usize, String>(0))
        {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set<K, V>(&self, key: K, value: V) -> Result<()>
    where
        K: AsRef<str> + rusqlite::ToSql,
        V: AsRef<str> + rusqlite::ToSql,
    {
        self.execute(
            "INSERT INTO spent(key, value)
                VALUES(:key, :value)
                ON CONFLICT(key)
                DO UPDATE SET value = :value",
            rusqlite::named_params! {":key": key, ":value": value},
        )?;
        Ok(())
    }

    fn reset<K>(&self, key: K) -> Result<()>
    where
        K: AsRef<str> + rusqlite::ToSql,
    {
        self.execute(
            "DELETE FROM spent
            WHERE key = :key",
            rusqlite::named_params! {":key": key},
        )?;
        Ok(())
    }

    fn version(&self) -> Result<Version> {
        let mut statement = self.prepare(
            "
        SELECT
            name
        FROM
            sqlite_schema
        WHERE
            name = 'spent' AND
            type = 'table';",
        )?;

        {
            let mut rows = statement.query([])?;

            if rows.next()?.is_none() {
                return Ok(Version::new(0, 0, 0));
            }
        }

        if let Some(version) = self.get("version")? {
            Ok(Version::parse(&version)?)
        } else {
            Ok(Version::new(0, 0, 0))
        }
    }

    fn current_version(&self) -> Result<Version> {
        Ok(Version::parse(env!("CARGO_PKG_VERSION"))?)
    }

    /// Bring the schema up to date
    ///
    /// Every upgrade step runs on each call, so steps must be idempotent.
    /// Files written by a newer version are refused.
    fn setup(&self) -> Result<()> {
        let version = self.version()?;
        let current = self.current_version()?;

        if version > current {
            return Err(Error::Invalid(format!(
                "database was set up by version {version}, newer than {current}"
            )));
        }

        if version == Version::new(0, 0, 0) {
            self.execute(
                "
            CREATE TABLE IF NOT EXISTS spent (
                key TEXT NOT NULL UNIQUE,
                value TEXT
            );
            ",
                (),
            )?;
        }

        log::debug!("Upgrading database from {version} to {current}");
        self.upgrade_from(&version)?;

        self.set("version", current.to_string())
    }

    fn upgrade_from(&self, version: &Version) -> Result<()>;
}

fn enforce_foreign_keys(connection: &Connection) -> Result<()> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}

pub trait Entity: Sized {
    fn id(&self) -> Option<Id>;

    fn find(db: &Connection, id: Id) -> Result<Self>;
}

pub trait Upgrade<T> {
    fn upgrade_from(&self, version: &Version) -> Result<()>;
}
