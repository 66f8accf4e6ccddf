use crate::commands::{CmdMessage, CmdResult};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const GENERAL: &str = "Commands take the form '<action> <pageContent> / <content>'.
<pageContent> is optional and defaults to the page you are on.
Actions: add, remove, update, remove-*, update-*, set-name, set-date, score, find, export, view, populate, bye.
Type 'help / <action>' for details on one action.";

static TOPICS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "add",
            "add <pageContent> / module <code> <name>
add <pageContent> / todo <name>
add <pageContent> / deadline <name> at: dd/mm/yyyy HH:MM
add <pageContent> / <event|exam|lab|lecture|tutorial> <name> at: <start> to <end>
add <pageContent> / file <name>
add <pageContent> / grade <name> weightage: <percent>
add <pageContent> / note <text>",
        ),
        (
            "remove",
            "remove <pageContent> / <task|file|grade|note> <index>
remove / module <code>",
        ),
        (
            "update",
            "update <pageContent> / <task|file> <index> <done|notdone>",
        ),
        (
            "remove-*",
            "remove-* <pageContent> / <task|file|note> <i1>,<i2>,...
Indexes are separated by ',' without spaces and refer to the list as currently shown.",
        ),
        (
            "update-*",
            "update-* <pageContent> / <task|file> <i1>,<i2>,... <done|notdone>",
        ),
        (
            "set-name",
            "set-name <pageContent> / <task|file|grade> <index> to: <new name>",
        ),
        (
            "set-date",
            "set-date <pageContent> / task <index> to: <date>
set-date <pageContent> / task <index> to: <start> to <end>",
        ),
        (
            "score",
            "score <pageContent> / grade <index> <achieved>/<maximum>",
        ),
        (
            "find",
            "find <pageContent> / [<task|file|grade|note>] <keyword>
Without a type, the tab you are on is searched.",
        ),
        (
            "export",
            "export <pageContent> / <task|file|grade|note>
export <pageContent> / all",
        ),
        (
            "view",
            "view / main
view / calendar
view / modules [<moduleCode> [tasks|files|grades|notes]]
Missing parts are taken from the page you are on.",
        ),
        ("populate", "populate\nAdds sample modules that do not exist yet."),
        ("bye", "bye\nEnds the session."),
    ])
});

/// `help` or `help / <action>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand {
    topic: Option<String>,
}

impl HelpCommand {
    pub fn general() -> Self {
        Self { topic: None }
    }

    pub fn topic(topic: &str) -> Self {
        let topic = topic.trim().to_lowercase();
        Self {
            topic: (!topic.is_empty()).then_some(topic),
        }
    }

    pub fn run(&self) -> CmdResult {
        let Some(topic) = &self.topic else {
            return CmdResult::default().with_message(CmdMessage::info(GENERAL));
        };
        match TOPICS.get(topic.as_str()) {
            Some(text) => CmdResult::default().with_message(CmdMessage::info(*text)),
            None => CmdResult::default()
                .with_message(CmdMessage::warning(format!("There is no help for '{}'.", topic)))
                .with_message(CmdMessage::info(format!(
                    "Help topics: {}",
                    TOPICS.keys().copied().collect::<Vec<_>>().join(", ")
                ))),
        }
    }
}
