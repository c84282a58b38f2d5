use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use toml::{Table, Value};

use spent::{Database, DatabaseTrait};

use crate::cli::{Cli, Commands};

const DEFAULT_DB_FILENAME: &str = "expenses.db";

#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub data_dir: PathBuf,
    cli: Cli,
    table: Table,
}

impl Config {
    pub fn try_parse() -> Result<Self> {
        Self::try_parse_from(std::env::args_os())
    }

    pub fn try_parse_from<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::Parser;

        let cli = Cli::try_parse_from(iter)?;

        let dir = match cli.config.clone() {
            Some(dir) => dir,
            None => config_home()?,
        };
        let table = match std::fs::read_to_string(dir.join("config.toml")) {
            Ok(content) => content.parse::<Table>()?,
            Err(_) => Table::new(),
        };

        let data_dir = match cli.data.clone() {
            Some(dir) => dir,
            None => match table.get("data_dir").and_then(Value::as_str) {
                Some(dir) => PathBuf::from(dir),
                None => data_home()?,
            },
        };

        if !data_dir.is_dir() {
            return Err(anyhow!(
                "Data directory is not a dir: {}",
                data_dir.display()
            ));
        }

        Ok(Config {
            dir,
            data_dir,
            cli,
            table,
        })
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.cli.verbose.log_level_filter()
    }

    pub fn command(&self) -> Option<&Commands> {
        self.cli.command.as_ref()
    }

    pub fn database_path(&self) -> PathBuf {
        let db_filename = self
            .table
            .get("db")
            .and_then(Value::as_table)
            .and_then(|db_table| db_table.get("filename"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_DB_FILENAME);

        self.data_dir.join(db_filename)
    }

    /// Open the database and make sure its schema is ready
    pub fn database(&self) -> Result<Database> {
        let path = self.database_path();
        let db = Database::open(&path)
            .with_context(|| format!("Unable to open {}", path.display()))?;
        db.setup()?;
        Ok(db)
    }
}

fn config_home() -> Result<PathBuf> {
    match std::env::var("SPENT_CONFIG") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("spent")?.get_config_home();
            if !path.exists() {
                std::fs::create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}

fn data_home() -> Result<PathBuf> {
    match std::env::var("SPENT_DATA") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("spent")?.get_data_home();
            if !path.exists() {
                std::fs::create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}
