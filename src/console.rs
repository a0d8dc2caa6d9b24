//! Line-based terminal console.

use std::io::{self, BufRead, Write};

use crate::session::Console;

/// A [`Console`] over a line reader and a writer, normally stdin and stdout.
///
/// Answers that cannot be understood are re-prompted here, so the session
/// only ever sees a parsed value or the end of input.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.writer, "{prompt}");
        let _ = self.writer.flush();

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_owned()),
            Err(err) => {
                log::warn!("failed to read input: {err}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn report(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{message}");
    }

    fn prompt_integer(&mut self, prompt: &str) -> Option<i64> {
        loop {
            let input = self.prompt_line(prompt)?;
            match input.parse::<i64>() {
                Ok(value) => return Some(value),
                Err(_) => self.report("Please enter a number."),
            }
        }
    }

    fn prompt_choice(&mut self, prompt: &str) -> Option<char> {
        loop {
            let input = self.prompt_line(prompt)?;
            if let Some(choice) = input.chars().next() {
                return Some(choice.to_ascii_lowercase());
            }
        }
    }
}
