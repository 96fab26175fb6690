use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Kind of user-facing line; decides color, icon and stream.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => BLUE,
            Tone::Success => GREEN,
            Tone::Warning => YELLOW,
            Tone::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let line = format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg);
    match tone {
        Tone::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Section title above a printed table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}=== {msg} ==={RESET}");
}
