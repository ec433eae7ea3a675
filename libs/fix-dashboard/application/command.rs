//! Terminal input and command submission

use std::sync::Arc;

use tracing::info;

/// Destination for submitted commands
///
/// `emit` must not block and reports nothing back: there is no
/// acknowledgement, retry, or correlation with later server events.
pub trait CommandSink: Send + Sync {
    fn emit(&self, command: String);
}

impl<S: CommandSink + ?Sized> CommandSink for Arc<S> {
    fn emit(&self, command: String) {
        (**self).emit(command)
    }
}

/// Owns the terminal input line
pub struct CommandEmitter {
    input: String,
    sink: Box<dyn CommandSink>,
    submitted: u64,
}

impl CommandEmitter {
    pub fn new(sink: impl CommandSink + 'static) -> Self {
        Self {
            input: String::new(),
            sink: Box::new(sink),
            submitted: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Send the input verbatim and clear it
    ///
    /// No validation: empty or malformed commands are the server's problem.
    /// The field is cleared as soon as the request is handed off.
    pub fn submit(&mut self) -> String {
        let command = std::mem::take(&mut self.input);
        info!("Submitting command: {}", command);
        self.sink.emit(command.clone());
        self.submitted += 1;
        command
    }
}
