//! Interactive confirmation prompt
//!
//! Implements the [`Confirm`] capability over stdin: a blocking yes/no loop
//! that re-prompts until it gets a valid answer.

use std::io::{self, BufRead, Write};

use crate::services::Confirm;

/// Blocking stdin yes/no prompt
///
/// Accepts `y`/`yes`/`n`/`no` (case-insensitive). An empty line and end of
/// input both answer no; anything else re-prompts.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{} ", prompt);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF or read failure: treat as declined
                _ => return false,
            };

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" | "" => return false,
                _ => println!("Please enter a valid response: 'y' or 'n' (or 'yes'/'no')."),
            }
        }
    }
}
