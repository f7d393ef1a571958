//! Diagnostic emission.

use crate::diagnostics::{Diagnostic, format_message, get_message_template};
use crate::state::CheckerState;
use tracing::debug;

impl<'a> CheckerState<'a> {
    /// Emit a templated diagnostic at a source line.
    pub(crate) fn error_at_line_msg(&mut self, line: u32, code: u32, args: &[&str]) {
        let template = get_message_template(code).unwrap_or("Unexpected checker diagnostic code.");
        let message = format_message(template, args);
        debug!(line, code, %message, "report");
        self.ctx.diagnostics.push(Diagnostic::error(
            self.ctx.file_name.clone(),
            line,
            message,
            code,
        ));
    }
}
