// Console abstraction used by the UI flows.
//
// `TermConsole` is the interactive terminal (dialoguer prompts, indicatif
// spinner). `LineConsole` reads plain lines from any `BufRead` and writes
// to any `Write`, so the same flows run from a pipe or from a test.

use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end of file before an answer was given.
    #[error("input closed")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Everything the menus need from the operator's console.
pub trait Console {
    /// Print one line of text.
    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Show `prompt` and return the line typed, without the newline.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Like `ask`, but the answer should not be echoed.
    fn ask_secret(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Show a short "working" message.
    fn busy(&mut self, message: &str) -> Result<(), ConsoleError>;
}

/// Interactive terminal console.
pub struct TermConsole {
    busy_delay: Duration,
}

impl TermConsole {
    pub fn new() -> Self {
        TermConsole {
            busy_delay: Duration::from_millis(300),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let answer = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(answer)
    }

    fn busy(&mut self, message: &str) -> Result<(), ConsoleError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        // keep the spinner on screen long enough to be seen
        thread::sleep(self.busy_delay);
        spinner.finish_with_message(message.to_string());
        Ok(())
    }
}

/// Line-oriented console over arbitrary reader/writer pairs.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    /// Consume the console and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConsoleError::Closed);
        }
        while bytes.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
            bytes.pop();
        }
        // undecodable bytes become U+FFFD so the caller can re-prompt
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask(prompt)
    }

    fn busy(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.say(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_writes_prompt_and_strips_line_ending() {
        let mut console = LineConsole::new(Cursor::new("Dark\r\nLight\n"), Vec::new());
        assert_eq!(console.ask("Enter theme").unwrap(), "Dark");
        assert_eq!(console.ask_secret("Again").unwrap(), "Light");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Enter theme: Again: ");
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut console = LineConsole::new(Cursor::new("12"), Vec::new());
        assert_eq!(console.ask("Font").unwrap(), "12");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let mut console = LineConsole::new(Cursor::new(vec![0xff, b'7', b'\n']), Vec::new());
        assert_eq!(console.ask("Choice").unwrap(), "\u{fffd}7");
    }

    #[test]
    fn end_of_input_is_reported_as_closed() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.ask("Anything"), Err(ConsoleError::Closed)));
    }

    #[test]
    fn busy_prints_the_message_as_a_line() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.busy("Logging in...").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Logging in...\n");
    }
}
