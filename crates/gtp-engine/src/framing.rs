use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub id: Option<String>,
    pub command: String,
    pub args: Vec<String>,
}

/// Applies GTP line preprocessing: control characters other than HT are
/// dropped, HT becomes a space and everything from `#` on is discarded.
pub fn sanitize_line(raw: &str) -> String {
    let without_controls = control_char_regex().replace_all(raw, "");
    let without_comment = comment_regex().replace(&without_controls, "");
    without_comment.replace('\t', " ")
}

/// Returns `None` for lines that carry no command.
pub fn parse_command_line(raw: &str) -> Option<CommandLine> {
    let sanitized = sanitize_line(raw);
    let mut tokens = sanitized.split_whitespace();
    let first = tokens.next()?;

    let (id, command) = if command_id_regex().is_match(first) {
        (
            Some(first.to_string()),
            tokens.next().unwrap_or_default().to_string(),
        )
    } else {
        (None, first.to_string())
    };

    Some(CommandLine {
        id,
        command,
        args: tokens.map(str::to_string).collect(),
    })
}

fn control_char_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\x00-\x08\x0A-\x1F\x7F]").expect("control char regex"))
}

fn comment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#.*").expect("comment regex"))
}

fn command_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("command id regex"))
}
