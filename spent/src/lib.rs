pub mod category;
pub mod date;
pub mod expense;

mod result;
pub use result::{Error, Result};

pub use category::Category;
pub use expense::Expense;
pub use spent_db::{Connection, DatabaseTrait, Entity, Id, Transaction};

use spent_db::Upgrade;


pub mod prelude {
    pub use crate::{
        category::Category,
        expense::{Expense, NewExpense, QueryExpense},
        Database, DatabaseTrait, Entity, Error, Id, Result,
    };
}

/// Handle on the expense store, opened once per invocation
#[derive(
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::DerefMut,
)]
pub struct Database(Connection);

impl DatabaseTrait for Database {
    fn current_version(&self) -> spent_db::Result<semver::Version> {
        Ok(semver::Version::parse(env!("CARGO_PKG_VERSION"))?)
    }

    fn upgrade_from(&self, version: &semver::Version) -> spent_db::Result<()> {
        Upgrade::<Category>::upgrade_from(self, version)?;
        Upgrade::<Expense>::upgrade_from(self, version)?;

        Ok(())
    }
}
