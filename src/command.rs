//! Commands the robot understands and how they are read from console text.

use crate::error::CommandError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation for the robot, together with its argument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Walk to a destination.
    Move(Point),
    /// Walk to an object and pick it up.
    Lift(Point),
    /// Play a message over the speaker.
    Speak(String),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(p) => write!(f, "move to ({}, {})", p.x, p.y),
            Self::Lift(p) => write!(f, "lift at ({}, {})", p.x, p.y),
            Self::Speak(message) => write!(f, "speak {message:?}"),
        }
    }
}

/// The command sub-menu entries, without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Builds [`Command::Move`] (`1`).
    Move,
    /// Builds [`Command::Lift`] (`2`).
    Lift,
    /// Builds [`Command::Speak`] (`3`).
    Speak,
}

impl CommandKind {
    /// Entries in menu order. The selector is the 1-based position.
    pub const ALL: [CommandKind; 3] = [Self::Move, Self::Lift, Self::Speak];

    /// Resolves a sub-menu selector ("1", "2" or "3").
    pub fn from_selector(selector: &str) -> Result<Self, CommandError> {
        match selector.trim() {
            "1" => Ok(Self::Move),
            "2" => Ok(Self::Lift),
            "3" => Ok(Self::Speak),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// Menu text for this entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Lift => "Lift",
            Self::Speak => "Speak",
        }
    }

    /// What to ask the operator for before building the command.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Move => "Enter destination in the format x,y, e.g. 1,2",
            Self::Lift => "Enter object location in the format x,y, e.g. 1,2",
            Self::Speak => "Enter message to speak",
        }
    }

    /// Builds the command from the operator's answer to [`prompt`](Self::prompt).
    pub fn build(self, argument: &str) -> Result<Command, CommandError> {
        Ok(match self {
            Self::Move => Command::Move(parse_point(argument)?),
            Self::Lift => Command::Lift(parse_point(argument)?),
            Self::Speak => Command::Speak(argument.trim_end_matches(['\r', '\n']).to_string()),
        })
    }
}

/// Parses `x,y` into a point. Whitespace around either field is ignored.
pub fn parse_point(text: &str) -> Result<Point, CommandError> {
    let text = text.trim();
    let mut fields = text.split(',');
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(CommandError::MalformedPoint(text.to_string()));
    };
    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(field: &str) -> Result<f64, CommandError> {
    let field = field.trim();
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidCoordinate(field.to_string()))
}
