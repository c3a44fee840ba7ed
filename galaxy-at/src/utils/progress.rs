//! Progress indicator for bounded waits.
//!
//! Renders `label.`, `label..`, `label...` on stderr, rewriting the same
//! line, so the user can see the tool is still polling. Hidden progress
//! only logs at trace level.

use std::io::Write;

const DOT_CYCLE: usize = 4;

#[derive(Debug, Clone)]
pub struct Progress {
    visible: bool,
    ticks: usize,
}

impl Progress {
    pub fn visible() -> Self {
        Self {
            visible: true,
            ticks: 0,
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: false,
            ticks: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of ticks rendered so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Advance the indicator by one step.
    pub fn tick(&mut self, label: &str) {
        let line = Self::render(label, self.ticks);
        self.ticks += 1;
        log::trace!("{}", line.trim_end());
        if self.visible {
            let mut err = std::io::stderr().lock();
            let _ = write!(err, "\r{}", line);
            let _ = err.flush();
        }
    }

    /// Finish the current progress line with a status word.
    pub fn finish(&mut self, status: &str) {
        log::debug!("{}", status);
        if self.visible {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "\t{}", status);
        }
    }

    fn render(label: &str, tick: usize) -> String {
        let dots = tick % DOT_CYCLE;
        format!("{}{}{}", label, ".".repeat(dots), " ".repeat(DOT_CYCLE + 1 - dots))
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::hidden()
    }
}
