use std::fmt;

use colored::Colorize;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Info,
    Success,
    Warning,
    Error,
}

/// Styles shell output. Colour is dropped in plain mode so scripted runs
/// produce stable text.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, title)
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Info, message));
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Success, message));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Warning, message));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        eprintln!("{}", self.apply_style(Style::Error, message));
    }

    /// Green for growth, red for decline.
    pub fn change_text(&self, text: &str, positive: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if positive {
            text.green().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        let text = match style {
            Style::Header => format!("=== {} ===", message),
            Style::Success => format!("OK: {}", message),
            Style::Warning => format!("WARNING: {}", message),
            Style::Error => format!("ERROR: {}", message),
            Style::Info => message.to_string(),
        };
        if !self.color {
            return text;
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
            Style::Info => text,
        }
    }
}
