use super::Expense;
use crate::Result;
use spent_db::Connection;

/// Number of expenses per page
pub const PAGE_SIZE: i64 = 15;

/// One page of expenses, most recent first
///
/// Pages start at 1. Pages past the end are empty. Pages below 1 are not
/// rejected, the negative offset is treated as 0 by SQLite and the first
/// page comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryExpense {
    pub page: i64,
}

impl Default for QueryExpense {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl QueryExpense {
    pub fn page(page: i64) -> Self {
        Self { page }
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(PAGE_SIZE)
    }

    pub fn run(&self, conn: &Connection) -> Result<Vec<Expense>> {
        log::debug!("Listing page {} at offset {}", self.page, self.offset());

        let mut statement = conn.prepare(
            "SELECT * FROM expense
            ORDER BY date DESC
            LIMIT :limit OFFSET :offset",
        )?;
        let expenses = statement
            .query_map(
                rusqlite::named_params! {
                    ":limit": PAGE_SIZE,
                    ":offset": self.offset(),
                },
                |row| row.try_into(),
            )?
            .collect::<rusqlite::Result<Vec<Expense>>>()?;

        Ok(expenses)
    }
}
