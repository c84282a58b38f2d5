use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Keep track of everyday expenses
#[derive(Default, Clone, Debug, Parser)]
#[command(version, infer_subcommands = true)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Sets a custom config directory
    ///
    /// The default value is $SPENT_CONFIG if it is set, or
    /// $XDG_CONFIG_HOME/spent otherwise
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        global = true,
        help_heading = "Global options"
    )]
    pub config: Option<PathBuf>,

    /// Sets a custom data directory
    ///
    /// The default value is $SPENT_DATA if it is set, or
    /// $XDG_DATA_HOME/spent otherwise
    #[arg(
        short = 'D',
        long,
        value_name = "DIR",
        global = true,
        help_heading = "Global options"
    )]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Add a new expense
    ///
    /// Missing description, category and amount are asked for
    Add(Add),
    /// List expenses, most recent first
    List(List),
}

#[derive(Args, Clone, Debug, Default)]
pub struct Add {
    /// Date of the expense, defaults to today
    ///
    /// Most common formats are understood, e.g. 2024-03-05, 03/05/2024,
    /// 5 Mar 2024 or "March 5, 2024"
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Describe the expense
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Name of the category
    ///
    /// The first letter is capitalized. Unknown categories can be created
    /// after confirmation
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Amount spent, without currency
    #[arg(
        long,
        value_name = "NUMBER",
        allow_negative_numbers = true,
        value_parser = parse_amount
    )]
    pub amount: Option<f64>,
}

#[derive(Args, Clone, Debug)]
pub struct List {
    /// Page to show, 15 expenses per page
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
}

/// Any number but NaN, which cannot be stored
pub fn parse_amount(text: &str) -> Result<f64, String> {
    match text.trim().parse::<f64>() {
        Ok(amount) if !amount.is_nan() => Ok(amount),
        _ => Err(format!("'{text}' is not a valid number.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from([
            "spentctl",
            "add",
            "--date",
            "2024-03-05",
            "--category",
            "food",
            "--amount",
            "-4.5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add(add)) => {
                assert_eq!(Some("2024-03-05"), add.date.as_deref());
                assert_eq!(None, add.description);
                assert_eq!(Some("food"), add.category.as_deref());
                assert_eq!(Some(-4.5), add.amount);
            }
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(Ok(4.5), parse_amount("4.5"));
        assert_eq!(Ok(-3.0), parse_amount(" -3 "));
        assert_eq!(Ok(f64::INFINITY), parse_amount("inf"));
        assert!(parse_amount("four").is_err());
        assert!(parse_amount("NaN").is_err());

        assert!(Cli::try_parse_from(["spentctl", "add", "--amount", "nan"]).is_err());
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["spentctl", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(List { page: 1 }))));

        let cli = Cli::try_parse_from(["spentctl", "list", "--page", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(List { page: 3 }))));
    }
}
