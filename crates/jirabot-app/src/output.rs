//! Terminal presentation: banner, prompt and speaker labels.

use std::io::{self, IsTerminal as _};

use crossterm::style::Stylize as _;

pub const BANNER: &str = "Welcome to AI-powered Jira Chatbot!";
pub const GOODBYE: &str = "Goodbye!";

const HELP_HINT: &str = "Type 'help' for available commands or 'exit' to quit.";
const NATURAL_LANGUAGE_HINT: &str = "You can use natural language to query your issues!";

/// Styles chat output, or passes it through untouched when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Decide on color from the `--no-color` flag, `NO_COLOR`, and whether
    /// stdout is a terminal.
    pub fn detect(no_color_flag: bool) -> Self {
        let env_disabled = std::env::var("NO_COLOR").is_ok_and(|v| !v.is_empty());
        Self::new(!no_color_flag && !env_disabled && io::stdout().is_terminal())
    }

    pub fn banner(&self) -> String {
        if self.color {
            format!(
                "{}\n{}\n{}",
                BANNER.green().bold(),
                HELP_HINT,
                NATURAL_LANGUAGE_HINT.yellow()
            )
        } else {
            format!("{}\n{}\n{}", BANNER, HELP_HINT, NATURAL_LANGUAGE_HINT)
        }
    }

    pub fn prompt(&self) -> String {
        if self.color {
            format!("{} ", "You:".blue().bold())
        } else {
            "You: ".to_string()
        }
    }

    pub fn reply(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", "Bot:".green().bold(), text)
        } else {
            format!("Bot: {}", text)
        }
    }

    pub fn goodbye(&self) -> String {
        if self.color {
            GOODBYE.green().to_string()
        } else {
            GOODBYE.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", "Error:".red().bold(), text)
        } else {
            format!("Error: {}", text)
        }
    }
}
