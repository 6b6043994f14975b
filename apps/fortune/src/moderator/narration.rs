//! One-way sink for human-readable progress messages.
//!
//! Narration never feeds back into the game; a quiet sink produces exactly
//! the same outcome as a chatty one.

/// Receives narration lines from the moderator.
pub trait Narrator {
    fn say(&mut self, line: &str);
}

/// Prints every line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietNarrator;

impl Narrator for QuietNarrator {
    fn say(&mut self, _line: &str) {}
}

impl<F: FnMut(&str)> Narrator for F {
    fn say(&mut self, line: &str) {
        self(line)
    }
}

/// Pick the console or quiet sink from a `quiet` flag.
pub fn narrator_for(quiet: bool) -> Box<dyn Narrator> {
    if quiet {
        Box::new(QuietNarrator)
    } else {
        Box::new(ConsoleNarrator)
    }
}
