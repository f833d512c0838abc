
use crate::errors::SystemError;
use crate::system::SquareSystem;
use std::io::{BufRead, Write};
use thiserror::Error as ThisError;

/// the smallest system order the console session accepts
pub const MIN_ORDER: usize = 1;
/// the largest system order the console session accepts
pub const MAX_ORDER: usize = 100;

/// An error structure for failures of the interactive console session.
///
/// Malformed numeric input is not an error at this level: the session
/// re-prompts for it. Only a broken or exhausted input stream ends a session
/// abnormally.
#[derive(Debug, ThisError)]
pub enum SessionError {
    /// reading from the input handle or writing to the output handle failed
    #[error("Console input/output failed: {}", source)]
    Io {
        /// the underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// the input stream ended before a complete system was entered
    #[error("Input ended before a complete system was entered.")]
    EndOfInput,
}

/// An interactive console session for entering and solving a square system.
///
/// The session drives a prompt/parse/solve loop over explicitly provided input
/// and output handles rather than ambient process-global streams, so it can be
/// run against locked stdin/stdout just as well as against in-memory buffers.
/// All numeric entry is double precision.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a session over the given input and output handles.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full console interaction: greet, ask for the dimension once,
    /// then repeatedly read a system until one is entered that parses and has
    /// a unique solution. The entered system and its solved state are rendered
    /// to the output handle as they become available.
    ///
    /// # Errors
    /// Fails with [`SessionError`] only if the input or output handle breaks,
    /// or if input ends mid-interaction. Parse failures and singular systems
    /// are reported to the user and re-prompted instead.
    pub fn run(&mut self) -> Result<(), SessionError> {
        writeln!(
            self.output,
            "Hello, friend. This is a Square System Solver!\nSSS!\n"
        )?;
        let order = self.prompt_dimension()?;
        loop {
            let system = match self.read_system(order)? {
                Some(system) => system,
                None => continue,
            };
            writeln!(self.output, "{}", system)?;
            match system.solve() {
                Ok(solved) => {
                    writeln!(self.output, "{}", solved)?;
                    break;
                }
                Err(SystemError::SingularMatrix { .. }) => {
                    writeln!(
                        self.output,
                        "This system has infinitely many solutions. Try Again."
                    )?;
                }
                // dimensions were validated while parsing
                Err(error @ SystemError::InvalidDimension { .. }) => {
                    writeln!(self.output, "{} Try Again.", error)?;
                }
            }
        }
        writeln!(self.output, "Goodbye, friend")?;
        Ok(())
    }

    /// Prompt for the system dimension until an integer within
    /// [`MIN_ORDER`]..=[`MAX_ORDER`] is entered. Anything else gets a
    /// "try again" nudge and another prompt.
    pub fn prompt_dimension(&mut self) -> Result<usize, SessionError> {
        writeln!(
            self.output,
            "Enter n, the dimension of your square system. ({} <= n <= {})",
            MIN_ORDER, MAX_ORDER
        )?;
        loop {
            let line = self.prompted_line()?;
            match line.trim().parse::<usize>() {
                Ok(order) if (MIN_ORDER..=MAX_ORDER).contains(&order) => return Ok(order),
                _ => writeln!(self.output, "Lets try that again...")?,
            }
        }
    }

    /// Read one system of the given order: the matrix as a single line of
    /// `order * order` whitespace-separated entries, then the right hand side
    /// as a single line of `order` entries. Returns `None` after notifying the
    /// user if either line is malformed, so the caller can start over.
    pub fn read_system(
        &mut self,
        order: usize,
    ) -> Result<Option<SquareSystem<f64>>, SessionError> {
        let matrix_entries = match self.read_entries(
            "Enter the rows of your matrix as a single row with spaces between each entry.",
            order * order,
        )? {
            Some(entries) => entries,
            None => return Ok(None),
        };
        let rhs = match self.read_entries(
            "Enter your righthand-side vector as a single row with spaces between each entry.",
            order,
        )? {
            Some(entries) => entries,
            None => return Ok(None),
        };
        let rows = matrix_entries
            .chunks_exact(order)
            .map(|chunk| chunk.to_vec())
            .collect();
        match SquareSystem::from_rows(rows, rhs) {
            Ok(system) => Ok(Some(system)),
            Err(_) => {
                writeln!(self.output, "Invalid input. Try again.")?;
                Ok(None)
            }
        }
    }

    /// Prompt for and parse exactly `count` whitespace-separated numbers from
    /// one line of input. A line with a different count or an unparseable
    /// entry yields `None` after printing a retry notice.
    fn read_entries(
        &mut self,
        prompt: &str,
        count: usize,
    ) -> Result<Option<Vec<f64>>, SessionError> {
        writeln!(self.output, "{}", prompt)?;
        let line = self.prompted_line()?;
        let parsed: Result<Vec<f64>, _> = line
            .split_whitespace()
            .map(|entry| entry.parse::<f64>())
            .collect();
        match parsed {
            Ok(entries) if entries.len() == count => Ok(Some(entries)),
            _ => {
                writeln!(self.output, "Invalid input. Try again.")?;
                Ok(None)
            }
        }
    }

    /// Print the `>> ` marker and read one line of input.
    fn prompted_line(&mut self) -> Result<String, SessionError> {
        write!(self.output, ">> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line)
    }
}
