use super::{corrupted, decode_flag, encode_flag, format_date, parse_date, split_fields, Item, Kind};
use crate::error::{BoxError, Result};
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
    Exam,
    Lab,
    Lecture,
    Tutorial,
}

impl TaskKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline => "D",
            TaskKind::Event => "E",
            TaskKind::Exam => "EXAM",
            TaskKind::Lab => "LAB",
            TaskKind::Lecture => "LEC",
            TaskKind::Tutorial => "TUT",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(TaskKind::Todo),
            "D" => Some(TaskKind::Deadline),
            "E" => Some(TaskKind::Event),
            "EXAM" => Some(TaskKind::Exam),
            "LAB" => Some(TaskKind::Lab),
            "LEC" => Some(TaskKind::Lecture),
            "TUT" => Some(TaskKind::Tutorial),
            _ => None,
        }
    }

    /// Events, exams, labs, lectures and tutorials span a start and end date.
    pub fn is_ranged(&self) -> bool {
        !matches!(self, TaskKind::Todo | TaskKind::Deadline)
    }
}

impl FromStr for TaskKind {
    type Err = BoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskKind::Todo),
            "deadline" => Ok(TaskKind::Deadline),
            "event" => Ok(TaskKind::Event),
            "exam" => Ok(TaskKind::Exam),
            "lab" => Ok(TaskKind::Lab),
            "lecture" => Ok(TaskKind::Lecture),
            "tutorial" => Ok(TaskKind::Tutorial),
            _ => Err(BoxError::Parse(format!("'{}' is not a task type.", s))),
        }
    }
}

/// When a task happens. Todos have no date, deadlines a single due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    None,
    Due(NaiveDateTime),
    Span {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    kind: TaskKind,
    name: String,
    done: bool,
    schedule: Schedule,
}

impl Task {
    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            kind: TaskKind::Todo,
            name: name.into(),
            done: false,
            schedule: Schedule::None,
        }
    }

    pub fn deadline(name: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            kind: TaskKind::Deadline,
            name: name.into(),
            done: false,
            schedule: Schedule::Due(due),
        }
    }

    /// A task with a start and end date. `kind` must be a ranged kind.
    pub fn ranged(
        kind: TaskKind,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        if !kind.is_ranged() {
            return Err(BoxError::Validation(format!(
                "A {} cannot have a start and end date.",
                kind.tag()
            )));
        }
        check_span(&start, &end)?;
        Ok(Self {
            kind,
            name: name.into(),
            done: false,
            schedule: Schedule::Span { start, end },
        })
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Sort key: the due date of a deadline or the start of a span.
    pub fn start_date(&self) -> Option<NaiveDateTime> {
        match self.schedule {
            Schedule::None => None,
            Schedule::Due(due) => Some(due),
            Schedule::Span { start, .. } => Some(start),
        }
    }

    pub fn set_due(&mut self, due: NaiveDateTime) -> Result<()> {
        match self.kind {
            TaskKind::Deadline => {
                self.schedule = Schedule::Due(due);
                Ok(())
            }
            TaskKind::Todo => Err(BoxError::Validation(
                "A todo does not have a date.".to_string(),
            )),
            _ => Err(BoxError::Validation(
                "Please provide both a start and end date: 'to: <start> to <end>'.".to_string(),
            )),
        }
    }

    pub fn set_span(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
        if !self.kind.is_ranged() {
            return Err(BoxError::Validation(
                "Only events, exams, labs, lectures and tutorials have a start and end date."
                    .to_string(),
            ));
        }
        check_span(&start, &end)?;
        self.schedule = Schedule::Span { start, end };
        Ok(())
    }
}

fn check_span(start: &NaiveDateTime, end: &NaiveDateTime) -> Result<()> {
    if end < start {
        return Err(BoxError::Validation(
            "The end date cannot be before the start date.".to_string(),
        ));
    }
    Ok(())
}

impl Item for Task {
    const KIND: Kind = Kind::Task;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_done(&mut self, done: bool) -> Result<()> {
        self.done = done;
        Ok(())
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        // Incomplete tasks first, then dated before undated.
        self.done
            .cmp(&other.done)
            .then_with(|| match (self.start_date(), other.start_date()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
    }

    fn encode(&self) -> String {
        let mut fields = vec![
            self.kind.tag().to_string(),
            encode_flag(self.done).to_string(),
            self.name.clone(),
        ];
        match &self.schedule {
            Schedule::None => {}
            Schedule::Due(due) => fields.push(format_date(due)),
            Schedule::Span { start, end } => {
                fields.push(format_date(start));
                fields.push(format_date(end));
            }
        }
        fields.join(super::DELIMITER)
    }

    fn decode(line: &str) -> Result<Self> {
        let fields = split_fields(line);
        let kind = fields
            .first()
            .and_then(|tag| TaskKind::from_tag(tag))
            .ok_or_else(|| corrupted(Kind::Task, line))?;
        let date = |i: usize| -> Result<NaiveDateTime> {
            let field = fields.get(i).ok_or_else(|| corrupted(Kind::Task, line))?;
            parse_date(field).map_err(|_| corrupted(Kind::Task, line))
        };

        let expected = match kind {
            TaskKind::Todo => 3,
            TaskKind::Deadline => 4,
            _ => 5,
        };
        if fields.len() != expected {
            return Err(corrupted(Kind::Task, line));
        }

        let done = decode_flag(Kind::Task, line, fields[1])?;
        let name = fields[2].to_string();
        let schedule = match kind {
            TaskKind::Todo => Schedule::None,
            TaskKind::Deadline => Schedule::Due(date(3)?),
            _ => {
                let (start, end) = (date(3)?, date(4)?);
                check_span(&start, &end).map_err(|_| corrupted(Kind::Task, line))?;
                Schedule::Span { start, end }
            }
        };

        Ok(Self {
            kind,
            name,
            done,
            schedule,
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { "DONE" } else { "NOT DONE" };
        write!(f, "[{}][{}] {}", self.kind.tag(), status, self.name)?;
        match &self.schedule {
            Schedule::None => Ok(()),
            Schedule::Due(due) => write!(f, " (by: {})", format_date(due)),
            Schedule::Span { start, end } => write!(
                f,
                " (at: {} to {})",
                format_date(start),
                format_date(end)
            ),
        }
    }
}
