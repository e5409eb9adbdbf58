//! Player input reaching the driver.

use crate::game::Button;
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    Press(Button),
    Reset,
    ToggleStrict,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),
}

impl FromStr for Input {
    type Err = InputError;

    /// Parses one line of terminal input: a button (`red`, `r`, `btn-red`),
    /// `reset`, `strict` or `quit`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let word = line.trim();
        if word.is_empty() {
            return Err(InputError::Empty);
        }
        match word.to_ascii_lowercase().as_str() {
            "reset" | "restart" => Ok(Self::Reset),
            "strict" | "s" => Ok(Self::ToggleStrict),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => word
                .parse::<Button>()
                .map(Self::Press)
                .map_err(|_| InputError::Unknown(word.to_string())),
        }
    }
}

/// Parse a line that may hold several space-separated inputs.
pub fn parse_line(line: &str) -> Result<Vec<Input>, InputError> {
    let inputs = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Input>, _>>()?;
    if inputs.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(inputs)
}

/// Forward every input read from `reader` to `tx`, blocking.
///
/// Meant for a dedicated thread: a blocking read of an interactive stdin
/// cannot be cancelled, so it must not live on the async runtime. Stops at
/// end of input, after forwarding [`Input::Quit`], or once the receiver is
/// gone. Lines that fail to parse go to `report`; blank lines are skipped.
pub fn forward_inputs<R: BufRead>(
    reader: R,
    tx: &mpsc::Sender<Input>,
    mut report: impl FnMut(InputError),
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(error = %err, "reading input failed");
                return;
            }
        };

        let inputs = match parse_line(&line) {
            Ok(inputs) => inputs,
            Err(InputError::Empty) => continue,
            Err(err) => {
                report(err);
                continue;
            }
        };
        for input in inputs {
            if tx.blocking_send(input).is_err() {
                return;
            }
            if input == Input::Quit {
                return;
            }
        }
    }
}
