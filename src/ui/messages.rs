use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}

/// Section header, underlined with `separator`.
pub fn header<T: fmt::Display>(msg: T, separator: &str) -> String {
    let text = msg.to_string();
    let width = text.chars().count().max(1);
    let sep = separator.chars().next().unwrap_or('-').to_string();
    format!(
        "{}\n{}",
        Style::new().bold().paint(text),
        sep.repeat(width)
    )
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
pub fn ask_confirmation(prompt: &str) -> bool {
    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), prompt)
}

/// Same as [`ask_confirmation`], reading the answer from `input`.
pub fn confirm_from<R: BufRead>(input: &mut R, prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
