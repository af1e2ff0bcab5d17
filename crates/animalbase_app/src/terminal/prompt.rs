use std::io::{self, BufRead, Write};

use animal_logging::animal_warn;
use animalbase_core::{ConflictPrompt, SingleChoice, TwoChoice};

use super::SharedTerminal;

/// Asks conflict questions on the terminal. Anything but an explicit
/// replace answer, including end of input, dismisses.
pub struct TerminalPrompt<I, W> {
    terminal: SharedTerminal<I, W>,
}

impl<I, W> TerminalPrompt<I, W> {
    pub fn new(terminal: SharedTerminal<I, W>) -> Self {
        Self { terminal }
    }
}

impl<I: BufRead, W: Write> TerminalPrompt<I, W> {
    fn ask(&mut self, question: &str) -> String {
        let mut terminal = self.terminal.borrow_mut();
        let answer = write_question(terminal.output(), question).and_then(|()| terminal.read_line());
        match answer {
            Ok(Some(line)) => line.to_ascii_lowercase(),
            Ok(None) => String::new(),
            Err(err) => {
                animal_warn!("Prompt failed, dismissing: {}", err);
                String::new()
            }
        }
    }
}

fn write_question<W: Write>(out: &mut W, question: &str) -> io::Result<()> {
    write!(out, "{question}")?;
    out.flush()
}

impl<I: BufRead, W: Write> ConflictPrompt for TerminalPrompt<I, W> {
    fn prompt_single(&mut self, incumbent: &str) -> SingleChoice {
        let question = format!(
            "There can only be one winner of each type!\n  [r] remove {incumbent}  [Enter] ignore\n> "
        );
        match self.ask(&question).as_str() {
            "r" | "remove" | "replace" => SingleChoice::Replace,
            _ => SingleChoice::Dismiss,
        }
    }

    fn prompt_two(&mut self, first: &str, second: &str) -> TwoChoice {
        let question = format!(
            "There can only be two winners!\n  [a] remove {first}  [b] remove {second}  [Enter] ignore\n> "
        );
        match self.ask(&question).as_str() {
            "a" => TwoChoice::ReplaceFirst,
            "b" => TwoChoice::ReplaceSecond,
            _ => TwoChoice::Dismiss,
        }
    }
}
