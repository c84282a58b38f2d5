use std::io::{BufRead, Write};

use anyhow::Result;

/// Questions asked on the terminal
///
/// Reading past the end of the input aborts the command.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(spent::Error::Aborted.into());
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }

    /// Ask until a non-blank answer is given
    pub fn text(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask until the answer reads as a number
    pub fn amount(&mut self, question: &str) -> Result<f64> {
        loop {
            let answer = self.ask(question)?;
            match crate::cli::parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(error) => writeln!(self.output, "Error: {error}")?,
            }
        }
    }

    /// Yes/no question, anything but an explicit yes is a no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"))?;

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::prelude::{assert_eq, *};

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    fn output(prompt: Prompt<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompt.output).unwrap()
    }

    #[test]
    fn text() -> Result<()> {
        let mut p = prompt("\n  \nCoffee beans\n");

        assert_eq!("Coffee beans", p.text("Description")?);
        assert_eq!("Description: Description: Description: ", output(p));

        Ok(())
    }

    #[test]
    fn amount() -> Result<()> {
        let mut p = prompt("four\n4.5\n");

        assert_eq!(4.5, p.amount("Amount")?);
        assert_eq!(
            "Amount: Error: 'four' is not a valid number.\nAmount: ",
            output(p)
        );

        let mut p = prompt("-3\n");
        assert_eq!(-3.0, p.amount("Amount")?);

        let mut p = prompt("NaN\n12\n");
        assert_eq!(12.0, p.amount("Amount")?);
        assert_eq!(
            "Amount: Error: 'NaN' is not a valid number.\nAmount: ",
            output(p)
        );

        Ok(())
    }

    #[test]
    fn confirm() -> Result<()> {
        for (input, expected) in [
            ("y\n", true),
            ("Yes\n", true),
            ("n\n", false),
            ("\n", false),
            ("whatever\n", false),
        ] {
            assert_eq!(expected, prompt(input).confirm("Create it?")?, "{input:?}");
        }

        Ok(())
    }

    #[test]
    fn end_of_input() {
        let error = prompt("").text("Description").unwrap_err();

        assert!(matches!(
            error.downcast_ref::<spent::Error>(),
            Some(spent::Error::Aborted)
        ));
    }
}
