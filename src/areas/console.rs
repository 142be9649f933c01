use crate::domain::triage::TriageChoice;
use colored::Colorize;
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Blocking operator prompts over an injected reader (stdin by default).
///
/// Reaching end of input answers every prompt with its safe default: a
/// declined confirmation, a skipped triage choice.
pub struct Console {
    input: RefCell<Box<dyn BufRead>>,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>) -> Self {
        Console {
            input: RefCell::new(input),
        }
    }

    pub fn stdin() -> Self {
        Console::new(Box::new(std::io::BufReader::new(std::io::stdin())))
    }

    fn read_reply(&self) -> anyhow::Result<String> {
        let mut line = String::new();
        self.input.borrow_mut().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only a single affirmative character counts as
    /// consent, everything else declines.
    pub fn confirm(&self, question: &str, out: &mut dyn Write) -> anyhow::Result<bool> {
        write!(out, "{} [y/N] ", question.yellow())?;
        out.flush()?;

        let reply = self.read_reply()?;
        Ok(reply == "y" || reply == "Y")
    }

    /// Present the 4-way menu for one untracked path and parse the reply.
    pub fn triage(&self, path: &str, out: &mut dyn Write) -> anyhow::Result<TriageChoice> {
        writeln!(out, "Untracked path: {}", path.cyan())?;
        writeln!(out, "  1) ignore permanently (append to .gitignore)")?;
        writeln!(out, "  2) track as a large file")?;
        writeln!(out, "  3) track normally")?;
        writeln!(out, "  4) skip for now")?;
        write!(out, "Choice [1-4, default 4]: ")?;
        out.flush()?;

        let reply = self.read_reply()?;
        Ok(TriageChoice::from_reply(&reply))
    }
}
