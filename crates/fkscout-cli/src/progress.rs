//! Stderr progress reporting for the matching loop.

use is_terminal::IsTerminal;
use std::io::{self, Write};

/// A fixed-width progress bar rendered to stderr while columns are matched.
///
/// Disabled when quiet, when there is nothing to do, or when stderr is not a
/// terminal. Purely cosmetic; it never touches stdout or the result.
pub struct MatchProgressBar {
    enabled: bool,
    total: usize,
    current: usize,
}

impl MatchProgressBar {
    const WIDTH: usize = 30;

    pub fn new(total: usize, quiet: bool) -> Self {
        let enabled = !quiet && total > 0 && io::stderr().is_terminal();
        let progress = Self {
            enabled,
            total,
            current: 0,
        };

        if progress.enabled {
            progress.render();
        }

        progress
    }

    /// Advance to `done` of `total` processed columns.
    pub fn update(&mut self, done: usize, total: usize) {
        if !self.enabled {
            return;
        }

        self.total = total;
        self.current = done.min(total);
        self.render();
    }

    pub fn finish(&self) {
        if self.enabled {
            eprintln!();
        }
    }

    fn render(&self) {
        let filled = if self.total == 0 {
            0
        } else {
            self.current * Self::WIDTH / self.total
        };
        let empty = Self::WIDTH - filled;

        eprint!(
            "\rMatching [{:=>filled$}{:empty$}] {}/{}",
            "", "", self.current, self.total
        );
        let _ = io::stderr().flush();
    }
}
