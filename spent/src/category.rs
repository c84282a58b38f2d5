use crate::{Database, Error, Result};
use spent_db::{Connection, Entity, Id, Upgrade};

/// Categories every store starts with
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Travel",
    "Home",
    "Charity",
    "Shopping",
    "Other",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    id: Option<Id>,
    pub name: String,
}

impl Category {
    /// Upper-case the first character, leave the rest as typed
    ///
    /// `"HOME"` stays `"HOME"` and `"credit card"` becomes `"Credit card"`.
    pub fn normalize(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether a category with exactly this name exists
    pub fn exists(db: &Connection, name: &str) -> Result<bool> {
        Ok(db
            .prepare("SELECT id FROM category WHERE name = ?")?
            .exists([name])?)
    }

    /// Insert a new category
    ///
    /// Fails with [`Error::NonUnique`] if the name is already taken, in
    /// which case nothing is written.
    pub fn create(db: &Connection, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Invalid("category name is empty".to_owned()));
        }

        db.execute("INSERT INTO category (name) VALUES (?)", [name])?;
        log::info!("Created category {name:?}");

        Ok(Self::find(db, db.last_insert_rowid().into())?)
    }
}

impl TryFrom<&rusqlite::Row<'_>> for Category {
    type Error = rusqlite::Error;

    fn try_from(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }
}

impl Entity for Category {
    fn id(&self) -> Option<Id> {
        self.id
    }

    fn find(db: &Connection, id: Id) -> spent_db::Result<Self> {
        let query = "SELECT * FROM category WHERE id = ? LIMIT 1;";
        Ok(db.prepare(query)?.query_row([id], |row| row.try_into())?)
    }
}

impl Upgrade<Category> for Database {
    fn upgrade_from(&self, _version: &semver::Version) -> spent_db::Result<()> {
        self.execute(
            "
            CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                name TEXT UNIQUE NOT NULL
            );
            ",
            (),
        )?;

        let mut statement =
            self.prepare("INSERT OR IGNORE INTO category (name) VALUES (?)")?;
        for name in DEFAULT_CATEGORIES {
            statement.execute([name])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::prelude::{assert_eq, Result, *};

    #[test]
    fn defaults_are_seeded() -> Result<()> {
        let db = test::db()?;

        let names = test::categories(&db)?
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(DEFAULT_CATEGORIES.to_vec(), names);

        Ok(())
    }

    #[test]
    fn exists() -> Result<()> {
        let db = test::db()?;

        assert!(Category::exists(&db, "Food")?);
        assert!(!Category::exists(&db, "food")?);
        assert!(!Category::exists(&db, "FOOD")?);
        assert!(!Category::exists(&db, "Gadgets")?);

        Ok(())
    }

    #[test]
    fn create() -> Result<()> {
        let db = test::db()?;

        assert!(!Category::exists(&db, "Gadgets")?);
        let category = Category::create(&db, "Gadgets")?;
        assert!(category.id().is_some());
        assert_eq!("Gadgets", category.name);
        assert!(Category::exists(&db, "Gadgets")?);

        let result = Category::create(&db, "Gadgets");
        assert!(matches!(result, Err(Error::NonUnique(_))));
        assert_eq!(DEFAULT_CATEGORIES.len() as i64 + 1, test::count(&db, "category")?);

        assert!(matches!(Category::create(&db, ""), Err(Error::Invalid(_))));

        Ok(())
    }

    #[test]
    fn normalize() {
        assert_eq!("Food", Category::normalize("food"));
        assert_eq!("Food", Category::normalize("Food"));
        assert_eq!("HOME", Category::normalize("HOME"));
        assert_eq!("Credit card", Category::normalize("credit card"));
        assert_eq!("ÉPicerie", Category::normalize("éPicerie"));
        assert_eq!("", Category::normalize(""));
    }
}
