//! Human seat: reads guesses line by line from a terminal or any reader.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use super::trait_def::{GuessPolicy, PolicyError};

/// Console adapter for a human player.
///
/// Shows the masked phrase and the letters tried so far, then reads one
/// line. The line is trimmed but otherwise passed through unchecked; the
/// moderator re-prompts on anything that is not a single new letter.
pub struct HumanPlayer<R, W> {
    label: String,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio(label: impl Into<String>) -> Self {
        Self::new(label, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(label: impl Into<String>, input: R, output: W) -> Self {
        Self {
            label: label.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GuessPolicy for HumanPlayer<R, W> {
    fn label(&self) -> &str {
        &self.label
    }

    fn guess_letter(
        &mut self,
        already_guessed: &[char],
        masked_phrase: &str,
    ) -> Result<String, PolicyError> {
        writeln!(self.output, "Phrase: {masked_phrase}")?;
        if !already_guessed.is_empty() {
            let tried: String = already_guessed.iter().collect();
            writeln!(self.output, "Tried:  {tried}")?;
        }
        write!(self.output, "{}, guess a letter: ", self.label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PolicyError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
