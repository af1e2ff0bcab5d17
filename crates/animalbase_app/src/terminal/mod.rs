//! Terminal adapter: draws the table on an output stream and reads intents
//! and prompt answers from an input stream.
pub mod commands;
pub mod prompt;
pub mod render;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub use prompt::TerminalPrompt;
pub use render::TerminalRenderer;

/// One input and one output stream, shared by the renderer, the prompt and
/// the command loop.
pub struct Terminal<I, W> {
    input: I,
    output: W,
}

pub type SharedTerminal<I, W> = Rc<RefCell<Terminal<I, W>>>;

impl<I: BufRead, W: Write> Terminal<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn shared(input: I, output: W) -> SharedTerminal<I, W> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    /// Next trimmed line, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
