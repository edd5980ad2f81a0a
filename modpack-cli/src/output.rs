//! Output abstraction for command handlers.
//!
//! Handlers write through [`Output`] so tests can capture what a command
//! prints.

use console::style;

pub trait Output {
    fn println(&self, msg: &str);

    fn newline(&self) {
        self.println("");
    }

    fn header(&self, msg: &str);

    fn subheader(&self, msg: &str);

    fn indented(&self, msg: &str) {
        self.println(&format!("  {}", msg));
    }

    fn success(&self, msg: &str);

    fn warning(&self, msg: &str);
}

/// Writes to stdout with terminal styling.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn println(&self, msg: &str) {
        println!("{}", msg);
    }

    fn header(&self, msg: &str) {
        println!("{}", style(msg).bold().underlined());
    }

    fn subheader(&self, msg: &str) {
        println!("{}", style(msg).bold());
    }

    fn success(&self, msg: &str) {
        println!("{}", style(msg).green());
    }

    fn warning(&self, msg: &str) {
        println!("{}", style(msg).yellow());
    }
}

/// Collects lines without styling.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    lines: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn text(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn println(&self, msg: &str) {
        self.lines.borrow_mut().push(msg.to_string());
    }

    fn header(&self, msg: &str) {
        self.println(msg);
    }

    fn subheader(&self, msg: &str) {
        self.println(msg);
    }

    fn success(&self, msg: &str) {
        self.println(msg);
    }

    fn warning(&self, msg: &str) {
        self.println(msg);
    }
}
