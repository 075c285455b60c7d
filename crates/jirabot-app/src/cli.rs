//! CLI argument definitions for the jirabot binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Jirabot: ask about your Jira issues in plain English.
#[derive(Parser, Debug)]
#[command(name = "jirabot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Run a single command and exit instead of starting a chat session.
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > JIRABOT_CONFIG env var > ~/.jirabot/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_with(|key| std::env::var(key).ok())
    }

    fn resolve_config_path_with<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = lookup("JIRABOT_CONFIG").filter(|p| !p.is_empty()) {
            return PathBuf::from(p);
        }
        default_config_path(&lookup)
    }

    /// Whether the user pointed at a config file explicitly. An explicit file
    /// that cannot be read is a startup error rather than a silent default.
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some() || std::env::var("JIRABOT_CONFIG").is_ok_and(|p| !p.is_empty())
    }

    /// Resolve the log level: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// The one-shot command, if any words were given after the flags.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

fn default_config_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    #[cfg(target_os = "windows")]
    let home_var = "USERPROFILE";
    #[cfg(not(target_os = "windows"))]
    let home_var = "HOME";

    match lookup(home_var) {
        Some(home) => PathBuf::from(home).join(".jirabot").join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_args() {
        let args = parse(&["jirabot"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.no_color);
        assert_eq!(args.one_shot(), None);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["jirabot", "-c", "/tmp/j.toml", "-l", "debug", "--no-color"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/j.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_color);
    }

    #[test]
    fn test_one_shot_words_are_joined() {
        let args = parse(&["jirabot", "--no-color", "details", "abc-1"]);
        assert_eq!(args.one_shot().as_deref(), Some("details abc-1"));
    }

    #[test]
    fn test_one_shot_keeps_hyphenated_words() {
        let args = parse(&["jirabot", "show", "-me", "bugs"]);
        assert_eq!(args.one_shot().as_deref(), Some("show -me bugs"));
    }

    #[test]
    fn test_config_path_flag_wins() {
        let args = parse(&["jirabot", "--config", "a.toml"]);
        let path = args.resolve_config_path_with(|_| Some("b.toml".to_string()));
        assert_eq!(path, PathBuf::from("a.toml"));
    }

    #[test]
    fn test_config_path_from_env() {
        let args = parse(&["jirabot"]);
        let path = args.resolve_config_path_with(|key| {
            (key == "JIRABOT_CONFIG").then(|| "/etc/jirabot.toml".to_string())
        });
        assert_eq!(path, PathBuf::from("/etc/jirabot.toml"));
    }

    #[test]
    fn test_config_path_default_under_home() {
        let args = parse(&["jirabot"]);
        let path = args.resolve_config_path_with(|key| match key {
            "HOME" | "USERPROFILE" => Some("/home/dev".to_string()),
            _ => None,
        });
        assert_eq!(
            path,
            PathBuf::from("/home/dev").join(".jirabot").join("config.toml")
        );
    }

    #[test]
    fn test_config_path_without_home() {
        let args = parse(&["jirabot"]);
        assert_eq!(args.resolve_config_path_with(|_| None), PathBuf::from("config.toml"));
    }

    #[test]
    fn test_log_level_priority() {
        assert_eq!(parse(&["jirabot", "-l", "trace"]).resolve_log_level("warn"), "trace");
        assert_eq!(parse(&["jirabot"]).resolve_log_level("error"), "error");
    }
}
