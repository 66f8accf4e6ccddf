use crate::collection::OrderedCollection;
use crate::commands::batch;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::model::grade::parse_weightage;
use crate::model::{parse_date, validate_text, FileEntry, Grade, Item, Kind, Module, Note, Task, TaskKind};
use crate::store::DataStore;
use crate::trace::PageAddress;

const INVALID_FORMAT: &str = "Please use valid add format: add <pageContent> / <type> <details>. Types: module, todo, deadline, event, exam, lab, lecture, tutorial, file, grade, note.";
const DATE_MARKER: &str = " at: ";
const RANGE_MARKER: &str = " to ";
const WEIGHTAGE_MARKER: &str = " weightage: ";

#[derive(Debug, Clone, PartialEq)]
pub enum NewEntry {
    Module { code: String, name: String },
    Task(Task),
    File(FileEntry),
    Grade(Grade),
    Note(Note),
}

/// `add <page> / <type> <details>`
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    module_code: Option<String>,
    entry: NewEntry,
}

impl AddCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let content = content.trim();
        let (kind_word, rest) = content
            .split_once(char::is_whitespace)
            .map(|(k, r)| (k, r.trim()))
            .unwrap_or((content, ""));

        let entry = match kind_word.to_lowercase().as_str() {
            "module" => parse_module(rest)?,
            "file" => NewEntry::File(FileEntry::new(validate_text(Kind::File, rest)?)),
            "note" => NewEntry::Note(Note::new(validate_text(Kind::Note, rest)?)),
            "grade" => parse_grade(rest)?,
            other => match other.parse::<TaskKind>() {
                Ok(task_kind) => NewEntry::Task(parse_task(task_kind, rest)?),
                Err(_) => return Err(BoxError::Parse(INVALID_FORMAT.to_string())),
            },
        };

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            entry,
        })
    }

    pub fn entry(&self) -> &NewEntry {
        &self.entry
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let sort = ctx.config.sort_on_add;
        let target = self.module_code.as_deref();
        let (kind, shown) = match &self.entry {
            NewEntry::Module { code, name } => return add_module(ctx, code, name),
            NewEntry::Task(task) => {
                let module = ctx.registry.require(target)?;
                (Kind::Task, insert(&mut module.tasks, task, sort))
            }
            NewEntry::File(file) => {
                let module = ctx.registry.require(target)?;
                (Kind::File, insert(&mut module.files, file, sort))
            }
            NewEntry::Grade(grade) => {
                let module = ctx.registry.require(target)?;
                (Kind::Grade, insert(&mut module.grades, grade, sort))
            }
            NewEntry::Note(note) => {
                let module = ctx.registry.require(target)?;
                (Kind::Note, insert(&mut module.notes, note, sort))
            }
        };

        let module = ctx.registry.require(target)?;
        let summary = batch::summary(module, kind);
        let code = module.code().to_string();
        ctx.save(&code, kind)?;
        tracing::info!(module = %code, %kind, "added item");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Noted. I've added this {}:", kind)))
            .with_message(CmdMessage::info(shown))
            .with_message(CmdMessage::info(summary)))
    }
}

/// Appends a copy of `item` and returns how it displays.
fn insert<T: Item>(collection: &mut OrderedCollection<T>, item: &T, sort: bool) -> String {
    let shown = item.to_string();
    collection.add(item.clone());
    if sort {
        collection.sort();
    }
    shown
}

fn add_module<S: DataStore>(
    ctx: &mut CmdContext<'_, S>,
    code: &str,
    name: &str,
) -> Result<CmdResult> {
    let module = Module::new(code, name);
    let message = format!("Added module {}: {}", module.code(), module.name());
    ctx.registry.insert(module)?;
    ctx.registry.save_index(ctx.store)?;
    tracing::info!(module = code, "added module");
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

fn parse_module(rest: &str) -> Result<NewEntry> {
    let (code, name) = rest.split_once(char::is_whitespace).ok_or_else(|| {
        BoxError::Parse("Please provide a module code and name: add / module <code> <name>".to_string())
    })?;
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BoxError::Validation(
            "Module codes may only contain letters and digits.".to_string(),
        ));
    }
    let name = name.trim();
    if name.is_empty() || name.contains('|') {
        return Err(BoxError::Parse("Please provide a valid module name.".to_string()));
    }
    Ok(NewEntry::Module {
        code: code.to_uppercase(),
        name: name.to_string(),
    })
}

fn parse_grade(rest: &str) -> Result<NewEntry> {
    let (name, weightage) =
        split_marker(rest, WEIGHTAGE_MARKER, "add / grade <name> weightage: <percent>")?;
    let name = validate_text(Kind::Grade, name)?;
    Ok(NewEntry::Grade(Grade::new(name, parse_weightage(weightage)?)))
}

fn parse_task(kind: TaskKind, rest: &str) -> Result<Task> {
    match kind {
        TaskKind::Todo => Ok(Task::todo(validate_text(Kind::Task, rest)?)),
        TaskKind::Deadline => {
            let (name, due) = split_marker(rest, DATE_MARKER, "add / deadline <name> at: <date>")?;
            Ok(Task::deadline(validate_text(Kind::Task, name)?, parse_date(due)?))
        }
        _ => {
            let usage = "add / <event|exam|lab|lecture|tutorial> <name> at: <start> to <end>";
            let (name, when) = split_marker(rest, DATE_MARKER, usage)?;
            let (start, end) = split_marker(when, RANGE_MARKER, usage)?;
            Task::ranged(
                kind,
                validate_text(Kind::Task, name)?,
                parse_date(start)?,
                parse_date(end)?,
            )
        }
    }
}

/// Splits `rest` on `marker`, accepting the marker's leading space as optional.
pub(crate) fn split_marker<'a>(rest: &'a str, marker: &str, usage: &str) -> Result<(&'a str, &'a str)> {
    rest.split_once(marker)
        .or_else(|| rest.split_once(marker.trim_start()))
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| BoxError::Parse(format!("Please use the format: {}", usage)))
}
