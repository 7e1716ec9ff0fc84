use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MegaverseError;

/// Cell label marking an empty position in the goal map.
pub const SPACE: &str = "SPACE";

const POLYANET: &str = "POLYANET";
const SOLOON_MARKER: &str = "SOLOON";
const COMETH_MARKER: &str = "COMETH";

/// Colors a soloon may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Purple,
    White,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = MegaverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "red" => Ok(Color::Red),
            "purple" => Ok(Color::Purple),
            "white" => Ok(Color::White),
            _ => Err(MegaverseError::InvalidColor(s.to_string())),
        }
    }
}

/// Directions a cometh may face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = MegaverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(MegaverseError::InvalidDirection(s.to_string())),
        }
    }
}

/// First-pass classification of a raw cell label.
///
/// The attribute of a variant label is the token before the first underscore,
/// still unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind<'a> {
    Primary,
    Colored(&'a str),
    Directional(&'a str),
    Unknown,
}

impl<'a> EntityKind<'a> {
    pub fn classify(label: &'a str) -> Self {
        let attribute = || label.split('_').next().unwrap_or(label);

        if label == POLYANET {
            EntityKind::Primary
        } else if label.contains(SOLOON_MARKER) {
            EntityKind::Colored(attribute())
        } else if label.contains(COMETH_MARKER) {
            EntityKind::Directional(attribute())
        } else {
            EntityKind::Unknown
        }
    }
}

/// A validated astral object, ready to be sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Polyanet,
    Soloon(Color),
    Cometh(Direction),
}

impl Entity {
    /// Parses a raw cell label, validating any attribute it carries.
    pub fn from_label(label: &str) -> Result<Self, MegaverseError> {
        match EntityKind::classify(label) {
            EntityKind::Primary => Ok(Entity::Polyanet),
            EntityKind::Colored(color) => Ok(Entity::Soloon(color.parse()?)),
            EntityKind::Directional(direction) => Ok(Entity::Cometh(direction.parse()?)),
            EntityKind::Unknown => Err(MegaverseError::UnknownLabel(label.to_string())),
        }
    }

    /// API collection this entity is created in.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Entity::Polyanet => "polyanets",
            Entity::Soloon(_) => "soloons",
            Entity::Cometh(_) => "comeths",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Polyanet => write!(f, "polyanet"),
            Entity::Soloon(color) => write!(f, "{} soloon", color.as_str()),
            Entity::Cometh(direction) => write!(f, "{} cometh", direction.as_str()),
        }
    }
}

/// A non-empty goal map cell waiting to be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub label: String,
    pub row: usize,
    pub column: usize,
}

impl Placement {
    pub fn new(label: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            label: label.into(),
            row,
            column,
        }
    }
}
