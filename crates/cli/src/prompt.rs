//! Interactive yes/no confirmation
//!
//! Destructive and overwriting operations confirm on standard input before
//! proceeding. The --yes flag bypasses prompts for non-interactive use.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Anything other than an affirmative answer counts as "no".
pub fn confirm(question: &str) -> bool {
    print!("{question}");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    is_affirmative(&answer)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
