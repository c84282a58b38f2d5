use crate::{date, Database};
use spent_db::{Connection, Entity, Id, Upgrade};

use chrono::NaiveDate;

mod new;
pub use new::{InsertableExpense, NewExpense};

mod query;
pub use query::{QueryExpense, PAGE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: Option<Id>,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl Expense {
    /// Date as listed, e.g. `05-Mar-2024`
    pub fn display_date(&self) -> String {
        date::to_display(&self.date)
    }

    /// Amount with exactly two decimals
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

impl TryFrom<&rusqlite::Row<'_>> for Expense {
    type Error = rusqlite::Error;

    fn try_from(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let text: String = row.get("date")?;
        let date = date::from_canonical(&text).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                row.as_ref().column_index("date").unwrap_or_default(),
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        Ok(Expense {
            id: row.get("id")?,
            date,
            description: row.get("description")?,
            category: row.get("category")?,
            amount: row.get("amount")?,
        })
    }
}

impl Entity for Expense {
    fn id(&self) -> Option<Id> {
        self.id
    }

    fn find(db: &Connection, id: Id) -> spent_db::Result<Self> {
        let query = "SELECT * FROM expense WHERE id = ? LIMIT 1;";
        Ok(db.prepare(query)?.query_row([id], |row| row.try_into())?)
    }
}

impl Upgrade<Expense> for Database {
    fn upgrade_from(&self, _version: &semver::Version) -> spent_db::Result<()> {
        self.execute(
            "
            CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                FOREIGN KEY (category) REFERENCES category (name)
            );
            ",
            (),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::prelude::{assert_eq, Result, *};
    use crate::Error;

    #[test]
    fn insert_and_find() -> Result<()> {
        let db = test::db()?;

        let expense = test::expense(&db, "2024-03-05", "Coffee", "Food", 4.5)?;
        let found = Expense::find(&db, expense.id().unwrap())?;

        assert_eq!(expense, found);
        assert_eq!("05-Mar-2024", found.display_date());
        assert_eq!("4.50", found.display_amount());

        Ok(())
    }

    #[test]
    fn stored_date_is_canonical() -> Result<()> {
        let db = test::db()?;
        test::expense(&db, "March 5, 2024", "Coffee", "Food", 4.5)?;

        let stored: String =
            db.query_row("SELECT date FROM expense", [], |row| row.get(0))?;
        assert_eq!("2024-03-05", stored);

        Ok(())
    }

    #[test]
    fn unknown_category_is_rejected() -> Result<()> {
        let db = test::db()?;

        let result = InsertableExpense {
            date: date::parse("2024-03-05")?,
            description: "Widget",
            category: "Gadgets",
            amount: 10.0,
        }
        .save(&db);

        assert!(matches!(result, Err(Error::UnknownCategory(_))));
        assert_eq!(0, test::count(&db, "expense")?);

        Ok(())
    }

    #[test]
    fn amounts_are_not_validated() -> Result<()> {
        let db = test::db()?;

        let refund = test::expense(&db, "2024-03-05", "Refund", "Other", -12.5)?;
        let free = test::expense(&db, "2024-03-05", "Sample", "Other", 0.0)?;

        assert_eq!("-12.50", refund.display_amount());
        assert_eq!("0.00", free.display_amount());
        assert_eq!(2, test::count(&db, "expense")?);

        Ok(())
    }
}
