use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::data::model::PeakRecord;

pub const PATH_QUESTION: &str =
    "Enter the path containing lab data (This should be the GENESYS30Data) directory: ";
pub const TITLE_QUESTION: &str = "What would you like to name this graph? ";

// ---------------------------------------------------------------------------
// Collaborators the batch run asks for operator input
// ---------------------------------------------------------------------------

/// Supplies the directory holding the instrument exports.
pub trait PathProvider {
    fn input_dir(&mut self) -> Result<PathBuf>;
}

/// Supplies a title per file. The title is the chart caption stem and the
/// image file name.
pub trait TitleProvider {
    fn graph_title(&mut self, file: &Path, peak: &PeakRecord) -> Result<String>;
}

// ---------------------------------------------------------------------------
// Line input
// ---------------------------------------------------------------------------

/// Source of operator answers, one per line.
///
/// `BufRead` on `StdinLock` would fit, but the path and title prompts are two
/// separate values and holding two stdin locks on one thread deadlocks.
/// `Stdin::read_line` locks per call and shares one buffer between handles.
pub trait ReadLine {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl ReadLine for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

// ---------------------------------------------------------------------------
// Console prompt
// ---------------------------------------------------------------------------

/// Asks questions on `output` and reads answers from `input`.
///
/// Answers are used verbatim apart from the line terminator.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::Stdin, io::Stdout> {
    /// Prompt on the process's stdin/stdout. Several instances may coexist;
    /// they share the stdin buffer.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: ReadLine, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and return the answer line.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("reading operator input")?;
        if n == 0 {
            bail!("input closed while waiting for an answer to: {}", question.trim_end());
        }
        Ok(strip_line_ending(line))
    }
}

impl<R: ReadLine, W: Write> PathProvider for ConsolePrompt<R, W> {
    fn input_dir(&mut self) -> Result<PathBuf> {
        self.ask(PATH_QUESTION).map(PathBuf::from)
    }
}

impl<R: ReadLine, W: Write> TitleProvider for ConsolePrompt<R, W> {
    fn graph_title(&mut self, _file: &Path, _peak: &PeakRecord) -> Result<String> {
        self.ask(TITLE_QUESTION)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
