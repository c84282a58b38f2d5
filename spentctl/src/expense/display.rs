use std::borrow::Cow;

use spent::Expense;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(derive_more::From)]
pub struct ExpenseToDisplay(Expense);

impl Tabled for ExpenseToDisplay {
    const LENGTH: usize = 4;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            self.0.display_date().into(),
            self.0.description.as_str().into(),
            self.0.category.as_str().into(),
            self.0.display_amount().into(),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            "Date".into(),
            "Description".into(),
            "Category".into(),
            "Amount".into(),
        ]
    }
}

/// Render expenses with the header ruled off and amounts right-aligned
pub fn table<I>(expenses: I) -> Table
where
    I: IntoIterator<Item = Expense>,
{
    let mut table = Table::new(expenses.into_iter().map(ExpenseToDisplay::from));
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()));
    table
}
