use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SyntaxError { expected, found } => ErrorTip::Suggestion(format!(
                "Unexpected {}, expected {}",
                found,
                join_expected(expected)
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
        }
    }

    /// Formats the error against the source it came from.
    ///
    /// ```text
    /// Error: SyntaxError (Unexpected "=", expected an identifier)
    /// -> main.ael:1:5
    ///   |
    /// 1 | let = 5
    ///   | ----^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let (line, line_text, line_pos) = get_line_at_position(source, self.position.0);

        let line_string = line.to_string();
        let padding = line_string.len() + 2;
        let arrows = line_text[..line_pos].chars().count() + 1;

        let mut out = String::new();
        if let ErrorTip::None = self.get_tip() {
            out.push_str(&format!("Error: {}\n", self.get_error_name()));
        } else {
            out.push_str(&format!(
                "Error: {} ({})\n",
                self.get_error_name(),
                self.get_tip()
            ));
        }
        out.push_str(&format!("-> {}:{}:{}\n", self.position.1, line, arrows));
        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
        out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
        out
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.get_error_name(),
            self.position.1,
            self.position.0,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {}, found {}", join_expected(.expected), .found)]
    SyntaxError { expected: Vec<String>, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

/// Joins expectations the way a reader would list them: `a, b or c`.
pub fn join_expected(expected: &[String]) -> String {
    match expected {
        [] => String::from("nothing"),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
