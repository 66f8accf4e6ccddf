use super::{corrupted, split_fields, Item, Kind, DELIMITER};
use crate::error::{BoxError, Result};
use std::cmp::Ordering;
use std::fmt;

const TAG: &str = "G";

/// An achieved score out of a maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub achieved: f64,
    pub maximum: f64,
}

impl Score {
    pub fn new(achieved: f64, maximum: f64) -> Result<Self> {
        if !maximum.is_finite() || maximum <= 0.0 {
            return Err(BoxError::Validation(
                "The maximum score must be greater than zero.".to_string(),
            ));
        }
        if !achieved.is_finite() || achieved < 0.0 || achieved > maximum {
            return Err(BoxError::Validation(
                "The score achieved must be between zero and the maximum score.".to_string(),
            ));
        }
        Ok(Self { achieved, maximum })
    }

    /// Parses `45/50`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || {
            BoxError::Validation(
                "Please provide the score in the format <achieved>/<maximum>, e.g. 45/50."
                    .to_string(),
            )
        };
        let (achieved, maximum) = input.trim().split_once('/').ok_or_else(invalid)?;
        let achieved: f64 = achieved.trim().parse().map_err(|_| invalid())?;
        let maximum: f64 = maximum.trim().parse().map_err(|_| invalid())?;
        Self::new(achieved, maximum)
    }

    /// Share of `weightage` earned, e.g. 45/50 of 30% is 27.
    pub fn weighted(&self, weightage: f64) -> f64 {
        self.achieved / self.maximum * weightage
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            format_number(self.achieved),
            format_number(self.maximum)
        )
    }
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn parse_weightage(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| {
            BoxError::Validation(format!("'{}' is not a valid weightage.", input.trim()))
        })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(BoxError::Validation(
            "The weightage must be between 0 and 100.".to_string(),
        ));
    }
    Ok(value)
}

/// An assessment component with its weightage in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    name: String,
    weightage: f64,
    score: Option<Score>,
}

impl Grade {
    pub fn new(name: impl Into<String>, weightage: f64) -> Self {
        Self {
            name: name.into(),
            weightage,
            score: None,
        }
    }

    pub fn weightage(&self) -> f64 {
        self.weightage
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn graded(&self) -> bool {
        self.score.is_some()
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = Some(score);
    }
}

impl Item for Grade {
    const KIND: Kind = Kind::Grade;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_done(&mut self, _done: bool) -> Result<()> {
        Err(BoxError::Validation(
            "Grades are marked as graded by scoring them: 'score / grade <index> <achieved>/<maximum>'."
                .to_string(),
        ))
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }

    fn encode(&self) -> String {
        let mut fields = vec![
            TAG.to_string(),
            self.name.clone(),
            format_number(self.weightage),
        ];
        if let Some(score) = &self.score {
            fields.push(format_number(score.achieved));
            fields.push(format_number(score.maximum));
        }
        fields.join(DELIMITER)
    }

    fn decode(line: &str) -> Result<Self> {
        let bad = || corrupted(Kind::Grade, line);
        let number = |field: &str| field.parse::<f64>().map_err(|_| bad());
        match split_fields(line).as_slice() {
            [TAG, name, weightage] => Ok(Self::new(*name, number(*weightage)?)),
            [TAG, name, weightage, achieved, maximum] => {
                let mut grade = Self::new(*name, number(*weightage)?);
                let score =
                    Score::new(number(*achieved)?, number(*maximum)?).map_err(|_| bad())?;
                grade.set_score(score);
                Ok(grade)
            }
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weightage = format_number(self.weightage);
        match &self.score {
            Some(score) => write!(
                f,
                "[GRADED] {} (weightage: {}%): {}",
                self.name, weightage, score
            ),
            None => write!(f, "[NOT GRADED] {} (weightage: {}%)", self.name, weightage),
        }
    }
}
