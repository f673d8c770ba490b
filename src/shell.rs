//! Interactive order shell.
//!
//! Greets the customer, then repeatedly prompts for an order line, processes
//! it with [`process_order`] and prints the outcome, until the exit keyword
//! is entered or input ends.
//!
//! A refused order prints its partial receipt and then the message on the
//! following line. A meal time that is not recognized has no receipt, so its
//! receipt line is left empty. Every processed order is followed by an empty
//! line.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use kitchen::config::ShellConfig;
//! use kitchen::shell::Shell;
//!
//! let shell = Shell::new(ShellConfig::default());
//! let mut output = Vec::new();
//! shell.run(Cursor::new("morning, 1, 3, 3\nexit\n"), &mut output).unwrap();
//!
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("eggs, coffee(2x)\n"));
//! ```

use std::io::{self, BufRead, Write};

use crate::config::ShellConfig;
use crate::workflow::{InvalidOrder, process_order};

/// What the shell does after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellStep {
    /// Prompt for another order.
    Continue,
    /// End the session.
    Exit,
}

/// The interactive order loop.
#[derive(Clone, Debug)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell with the given settings.
    #[must_use]
    pub const fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    /// Returns the shell settings.
    #[must_use]
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Returns `true` if `line` is the exit keyword, ignoring case and
    /// surrounding whitespace.
    #[must_use]
    pub fn is_exit(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(self.config.exit_keyword())
    }

    /// Handles one input line.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to `output`.
    pub fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> io::Result<ShellStep> {
        if self.is_exit(line) {
            return Ok(ShellStep::Exit);
        }

        let outcome = process_order(line);
        write_outcome(&outcome, output)?;
        writeln!(output)?;
        Ok(ShellStep::Continue)
    }

    /// Runs the session until the exit keyword or the end of `input`.
    ///
    /// # Errors
    ///
    /// Returns any error raised while reading `input` or writing `output`.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "Welcome to {}.", self.config.kitchen_name())?;

        let mut line = String::new();
        loop {
            writeln!(
                output,
                "Please enter your order, or enter '{}' to exit.",
                self.config.exit_keyword()
            )?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed");
                break;
            }
            if self.handle_line(&line, output)? == ShellStep::Exit {
                break;
            }
        }

        writeln!(output, "Thank you for visiting {}!", self.config.kitchen_name())?;
        output.flush()
    }
}

/// Writes the outcome of one order.
///
/// # Errors
///
/// Returns any error raised while writing to `output`.
pub fn write_outcome<W: Write>(
    outcome: &Result<String, InvalidOrder>,
    output: &mut W,
) -> io::Result<()> {
    match outcome {
        Ok(receipt) => writeln!(output, "{receipt}"),
        Err(error) => {
            writeln!(output, "{}", error.partial_output().unwrap_or_default())?;
            writeln!(output, "{}", error.message())
        }
    }
}
