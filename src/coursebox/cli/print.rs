use colored::Colorize;
use coursebox::api::{CmdMessage, MessageLevel};
use coursebox::commands::CmdResult;
use coursebox::error::BoxError;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy)]
pub(super) struct OutputOptions {
    pub route_only: bool,
    pub width: usize,
}

pub(super) fn print_result(result: &CmdResult, options: OutputOptions) {
    if let (true, Some(route)) = (options.route_only, &result.route) {
        println!("{}", route);
        return;
    }
    print_messages(&result.messages, options.width);
    for line in &result.listing {
        for part in wrap(line, options.width) {
            println!("{}", part);
        }
    }
}

pub(super) fn print_messages(messages: &[CmdMessage], width: usize) {
    for message in messages {
        for line in message.content.lines() {
            for part in wrap(line, width) {
                match message.level {
                    MessageLevel::Info => println!("{}", part),
                    MessageLevel::Success => println!("{}", part.green()),
                    MessageLevel::Warning => println!("{}", part.yellow()),
                    MessageLevel::Error => println!("{}", part.red()),
                }
            }
        }
    }
}

/// Rejected input is part of the conversation and goes to stdout.
pub(super) fn print_rejection(error: &BoxError, width: usize) {
    println!("{}", error.title().red().bold());
    print_messages(&[CmdMessage::error(error.to_string())], width);
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(super) fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap("1. [T][NOT DONE] read", 40), vec!["1. [T][NOT DONE] read"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wraps_on_spaces() {
        assert_eq!(
            wrap("Noted. I've removed these tasks:", 14),
            vec!["Noted. I've", "removed these", "tasks:"]
        );
    }

    #[test]
    fn splits_overlong_words_by_width() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        // Wide characters count double.
        assert_eq!(wrap("日本語テキスト", 6), vec!["日本語", "テキス", "ト"]);
    }
}
