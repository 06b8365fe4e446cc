//! Yes/no questioning over line-oriented streams.
//!
//! The exchange is a fixed protocol: write the question as one line, read
//! one answer line, and either return a boolean or print a diagnostic and
//! re-ask. Unrecognised answers loop forever; only a recognised answer or
//! an exhausted input source ends the exchange.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::LazyLock;

use regex::Regex;

// Recognised answers, matched case-insensitively against the full line
// after the line terminator is stripped. " y " is not an answer.
static AFFIRMATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^y(es)?$").expect("AFFIRMATIVE regex is valid"));
static NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^no?$").expect("NEGATIVE regex is valid"));

/// Diagnostic line written when an answer matches neither pattern.
pub const UNRECOGNISED_RESPONSE: &str = "I don't understand your response.";

/// Question asked by [`AnswerSource::inquire_about_happiness`].
const HAPPINESS_QUESTION: &str = "Are you happy?";

/// Result type for questioning operations.
pub type AskResult<T> = Result<T, AskError>;

/// Error type for questioning operations.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Reading the answer or writing the question failed.
    #[error("Failed to exchange a line: {0}")]
    Io(#[from] io::Error),

    /// The input source was exhausted before a recognised answer arrived.
    #[error("Input closed before a recognised answer")]
    InputClosed,
}

/// Something that can answer yes/no questions.
///
/// [`Questioner`] implements this over real streams; tests substitute a
/// fixed-answer implementation so logic built on top of `ask` can be
/// exercised without any I/O.
pub trait AnswerSource {
    /// Ask a yes/no question and block until it is answered.
    fn ask(&mut self, question: &str) -> AskResult<bool>;

    /// Ask "Are you happy?" and map the answer to a verdict line.
    fn inquire_about_happiness(&mut self) -> AskResult<&'static str> {
        Ok(if self.ask(HAPPINESS_QUESTION)? {
            "Good I'm glad."
        } else {
            "That's too bad."
        })
    }
}

/// Asks yes/no questions over a line-oriented input source and output sink.
///
/// Both handles are supplied at construction and never reassigned.
pub struct Questioner<R, W> {
    input: R,
    output: W,
}

impl Questioner<BufReader<Stdin>, Stdout> {
    /// Construct a questioner bound to the process's standard streams.
    pub fn from_stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Questioner<R, W> {
    /// Construct a questioner over explicit handles.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> AnswerSource for Questioner<R, W> {
    /// Print the question, read one line, and interpret it as a boolean.
    ///
    /// An unrecognised line prints [`UNRECOGNISED_RESPONSE`] and re-asks
    /// the same question. There is no retry cap; the loop ends only on a
    /// recognised answer or on [`AskError::InputClosed`].
    fn ask(&mut self, question: &str) -> AskResult<bool> {
        let mut line = String::new();
        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AskError::InputClosed);
            }

            let answer = trim_line_terminator(&line);
            if AFFIRMATIVE.is_match(answer) {
                return Ok(true);
            }
            if NEGATIVE.is_match(answer) {
                return Ok(false);
            }

            writeln!(self.output, "{UNRECOGNISED_RESPONSE}")?;
        }
    }
}

/// Strip a trailing `\n` or `\r\n`. Other whitespace is part of the answer.
fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
