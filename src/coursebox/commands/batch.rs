//! Shared engine behind `remove-*` and `update-*`.
//!
//! Every check runs before the first mutation, so a rejected batch leaves the
//! collection exactly as it was. Removals are applied from the highest index
//! down ([`removal_order`]): removing index `i` only shifts items above `i`,
//! and none of those are still pending.

use crate::collection::INVALID_INDEX;
use crate::error::{BoxError, Result};
use crate::index::{parse_position_list, Position};
use crate::model::{Kind, Module};
use std::collections::HashSet;

pub const INDEX_SEPARATION: &str = "Ensure that the indexes are separated by ',' without any spacing. E.g. remove-* <pageContent> / <type> 2,3,4";
pub const INVALID_DONE_VALUE: &str = "Please provide a valid done status to be updated to.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOp {
    Remove,
    Update,
}

impl BatchOp {
    fn verb(&self) -> &'static str {
        match self {
            BatchOp::Remove => "removed",
            BatchOp::Update => "updated",
        }
    }

    fn provide_indexes(&self) -> String {
        match self {
            BatchOp::Remove => "Please provide the indexes to be removed.".to_string(),
            BatchOp::Update => "Please provide the indexes to be updated.".to_string(),
        }
    }

    fn invalid_format(&self) -> String {
        match self {
            BatchOp::Remove => {
                "Please use valid multiple removal format: remove-* <pageContent> / <type> <i1>,<i2>,..."
                    .to_string()
            }
            BatchOp::Update => {
                "Please use valid multiple update format: update-* <pageContent> / <type> <i1>,<i2>,... <done status>"
                    .to_string()
            }
        }
    }

    fn single_redirect(&self) -> String {
        match self {
            BatchOp::Remove => "To remove a single item, provide the input in this format instead: remove <pageContent> / <type> <one index in integer form>.".to_string(),
            BatchOp::Update => "To update a single item, provide the input in this format instead: update <pageContent> / <type> <one index in integer form> <done status>".to_string(),
        }
    }

    /// `Noted. I've removed these tasks:`
    pub fn header(&self, kind: Kind) -> String {
        format!("Noted. I've {} these {}:", self.verb(), kind.plural())
    }
}

/// A validated `<kind> <i1>,<i2>,... [done|notdone]`. Grades are not
/// batch targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub kind: Kind,
    pub positions: Vec<Position>,
    pub done: Option<bool>,
}

impl BatchRequest {
    pub fn parse(content: &str, op: BatchOp) -> Result<Self> {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let max_tokens = match op {
            BatchOp::Remove => 2,
            BatchOp::Update => 3,
        };

        if tokens.len() < 2 {
            return Err(BoxError::Parse(op.provide_indexes()));
        }
        if tokens.len() > max_tokens {
            return Err(BoxError::Parse(INDEX_SEPARATION.to_string()));
        }

        let positions = parse_position_list(tokens[1])?;

        let kind = tokens[0]
            .to_lowercase()
            .parse::<Kind>()
            .ok()
            .filter(|kind| *kind != Kind::Grade)
            .ok_or_else(|| BoxError::Parse(op.invalid_format()))?;

        if positions.len() == 1 {
            return Err(BoxError::Parse(op.single_redirect()));
        }

        let done = match op {
            BatchOp::Remove => None,
            BatchOp::Update => {
                let status = tokens.get(2).map(|s| s.to_lowercase());
                let done = match status.as_deref() {
                    Some("done") => true,
                    Some("notdone") => false,
                    _ => return Err(BoxError::Validation(INVALID_DONE_VALUE.to_string())),
                };
                if !kind.has_status() {
                    return Err(BoxError::Validation(format!(
                        "The {} do not have a done status.",
                        kind.plural()
                    )));
                }
                Some(done)
            }
        };

        reject_duplicates(&positions)?;

        Ok(Self {
            kind,
            positions,
            done,
        })
    }
}

fn reject_duplicates(positions: &[Position]) -> Result<()> {
    let mut seen = HashSet::new();
    for position in positions {
        if !seen.insert(position) {
            return Err(BoxError::Validation(format!(
                "Index {} was given more than once.",
                position
            )));
        }
    }
    Ok(())
}

/// Zero-based indexes, highest first.
pub fn removal_order(positions: &[Position]) -> Vec<usize> {
    let mut indexes: Vec<usize> = positions.iter().map(Position::zero_based).collect();
    indexes.sort_unstable_by(|a, b| b.cmp(a));
    indexes
}

/// Zero-based indexes in the order updated items are reported:
/// ascending when marking done, descending when marking not done.
pub fn update_order(positions: &[Position], done: bool) -> Vec<usize> {
    let mut indexes = removal_order(positions);
    if done {
        indexes.reverse();
    }
    indexes
}

/// Every index must address an existing item.
pub fn check_bounds(module: &Module, kind: Kind, indexes: &[usize]) -> Result<()> {
    if indexes.iter().all(|&i| i < module.len(kind)) {
        Ok(())
    } else {
        Err(BoxError::Index(INVALID_INDEX.to_string()))
    }
}

/// Removes every requested item and returns how each displayed, in removal order.
pub fn remove_at(module: &mut Module, request: &BatchRequest) -> Result<Vec<String>> {
    let order = removal_order(&request.positions);
    check_bounds(module, request.kind, &order)?;
    order
        .into_iter()
        .map(|index| module.remove(request.kind, index))
        .collect()
}

/// Sets the done flag on every requested item and returns how each displays afterwards.
pub fn update_at(module: &mut Module, request: &BatchRequest, done: bool) -> Result<Vec<String>> {
    let order = update_order(&request.positions, done);
    check_bounds(module, request.kind, &order)?;
    order
        .into_iter()
        .map(|index| module.set_done(request.kind, index, done))
        .collect()
}

/// `You currently have 3 tasks in the list.`
pub fn summary(module: &Module, kind: Kind) -> String {
    format!("You currently have {} in the list.", kind.count(module.len(kind)))
}
