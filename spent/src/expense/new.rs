use super::Expense;
use crate::{category::Category, date, Error, Result};
use spent_db::{Connection, Entity};

use chrono::NaiveDate;

/// An expense as entered by the user
///
/// The date is free text and the category is not normalized yet, see
/// [`NewExpense::save`].
#[derive(Debug, Default, Clone)]
pub struct NewExpense<'a> {
    pub date: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub amount: f64,
}

type NewExpenseResult = (Expense, Option<Category>);

impl<'a> NewExpense<'a> {
    pub fn new(date: &'a str, description: &'a str, category: &'a str, amount: f64) -> Self {
        Self {
            date,
            description,
            category,
            amount,
        }
    }

    /// Record the expense
    ///
    /// The date is parsed and the category normalized first. When the
    /// category does not exist, `confirm_creation` is asked whether to
    /// create it: declining returns [`Error::Aborted`] and nothing is
    /// written, an error from it is returned as is. The category creation
    /// and the expense insertion share one transaction.
    ///
    /// Returns the stored expense and the category created for it, if any.
    pub fn save<F, E>(
        self,
        conn: &mut Connection,
        confirm_creation: F,
    ) -> std::result::Result<NewExpenseResult, E>
    where
        F: FnOnce(&str) -> std::result::Result<bool, E>,
        E: From<Error>,
    {
        let NewExpense {
            date,
            description,
            category,
            amount,
        } = self;

        let date = date::parse(date)?;
        if amount.is_nan() {
            return Err(Error::Invalid("amount is not a number".to_owned()).into());
        }
        let category = Category::normalize(category);
        if category.trim().is_empty() {
            return Err(Error::Invalid("category name is empty".to_owned()).into());
        }

        let create = !Category::exists(conn, &category)?;
        if create && !confirm_creation(&category)? {
            log::info!("Creation of category {category:?} declined");
            return Err(Error::Aborted.into());
        }

        let tx = conn.transaction().map_err(Error::from)?;

        let created = if create {
            Some(Category::create(&tx, &category)?)
        } else {
            None
        };

        let expense = InsertableExpense {
            date,
            description,
            category: &category,
            amount,
        }
        .save(&tx)?;

        tx.commit().map_err(Error::from)?;

        Ok((expense, created))
    }
}

/// An expense ready for insertion
///
/// The category must exist, the storage rejects the row otherwise with
/// [`Error::UnknownCategory`].
#[derive(Debug, Clone)]
pub struct InsertableExpense<'a> {
    pub date: NaiveDate,
    pub description: &'a str,
    pub category: &'a str,
    pub amount: f64,
}

impl InsertableExpense<'_> {
    pub fn save(self, conn: &Connection) -> Result<Expense> {
        conn.execute(
            "INSERT INTO expense (date, description, category, amount)
                VALUES (:date, :description, :category, :amount)",
            rusqlite::named_params! {
                ":date": date::to_canonical(&self.date),
                ":description": self.description,
                ":category": self.category,
                ":amount": self.amount,
            },
        )?;
        log::info!(
            "Added expense {:?} of {} in {:?}",
            self.description,
            self.amount,
            self.category
        );

        Ok(Expense::find(conn, conn.last_insert_rowid().into())?)
    }
}
