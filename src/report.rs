/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use model::{print_error, print_warning};

/// The name shown in the warnings and errors of a run
const MODULE_NAME: &str = "Create Typical";

/// How important a message is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Something the user may want to know
    Info,
    /// Something went not quite as asked, but the run goes on
    Warning,
    /// The run cannot go on
    Error,
}

/// The messages produced while running the measure.
///
/// Every message is also forwarded to `tracing`, so whoever installs a
/// subscriber sees them as they happen.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    messages: Vec<(MessageLevel, String)>,
}

impl RunReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an informative message
    pub fn info<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        tracing::info!("{}", msg);
        self.messages.push((MessageLevel::Info, msg));
    }

    /// Registers a warning
    pub fn warning<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        print_warning(MODULE_NAME, &msg);
        self.messages.push((MessageLevel::Warning, msg));
    }

    /// Registers an error
    pub fn error<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        print_error(MODULE_NAME, &msg);
        self.messages.push((MessageLevel::Error, msg));
    }

    /// Borrows every message, in the order they were registered
    pub fn messages(&self) -> &[(MessageLevel, String)] {
        &self.messages
    }

    /// The messages of a certain level
    pub fn messages_of(&self, level: MessageLevel) -> Vec<&String> {
        self.messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// Checks whether an error was registered
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|(l, _)| *l == MessageLevel::Error)
    }
}
