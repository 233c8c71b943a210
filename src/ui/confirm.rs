use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user.
/// Anything but "y"/"yes" (including a closed stdin) means no.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
