use std::io::{BufRead, Write};

use anyhow::Result;

use crate::cli::{Add, Commands, List};
use crate::config::Config;
use crate::utils::Prompt;

use spent::{
    date,
    expense::{NewExpense, QueryExpense},
    Connection,
};

pub mod display;

struct CommandContext<'a, R, W> {
    conn: &'a mut Connection,
    prompt: Prompt<R, W>,
}

pub fn run(config: &Config, command: &Commands) -> Result<()> {
    let conn = &mut config.database()?;
    let mut cmd = CommandContext {
        conn,
        prompt: Prompt::stdio(),
    };

    match command {
        Commands::Add(args) => cmd.add(args),
        Commands::List(args) => cmd.list(args),
    }
}

impl<R: BufRead, W: Write> CommandContext<'_, R, W> {
    fn add(&mut self, args: &Add) -> Result<()> {
        let date = match &args.date {
            Some(date) => date.clone(),
            None => date::to_canonical(&chrono::Local::now().date_naive()),
        };
        let description = match &args.description {
            Some(description) => description.clone(),
            None => self.prompt.text("Description")?,
        };
        let category = match &args.category {
            Some(category) => category.clone(),
            None => self.prompt.text("Category")?,
        };
        let amount = match args.amount {
            Some(amount) => amount,
            None => self.prompt.amount("Amount")?,
        };

        let prompt = &mut self.prompt;
        let (_, created) = NewExpense::new(&date, &description, &category, amount)
            .save(self.conn, |name| {
                prompt.confirm(&format!("{name} category does not exist. Create it?"))
            })?;

        if let Some(category) = created {
            self.prompt
                .say(&format!("Category '{}' created.", category.name))?;
        }
        self.prompt.say("Expense added.")
    }

    fn list(&mut self, args: &List) -> Result<()> {
        let expenses = QueryExpense::page(args.page).run(self.conn)?;

        self.prompt.say(&display::table(expenses).to_string())
    }
}
