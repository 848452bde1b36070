//! Handle identifiers: four corners, four sides and the rotate grip.
//!
//! Identifiers are the compass codes used in markup (`"nw"`, `"e"`, ...)
//! plus `"rotate"`. Parsing anything else fails with
//! [`EditorError::UnknownHandle`].

use super::geometry::Edges;
use crate::error::EditorError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Corner handles, used for resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

/// Side handles, used for cropping along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    N,
    E,
    S,
    W,
}

/// Any grabbable handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Corner(Corner),
    Side(Side),
    Rotate,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::Nw, Corner::Ne, Corner::Sw, Corner::Se];

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::Nw => "nw",
            Corner::Ne => "ne",
            Corner::Sw => "sw",
            Corner::Se => "se",
        }
    }

    /// The row edge (n/s) and column edge (w/e) this corner drags.
    pub fn edges(self) -> Edges {
        Edges {
            north: matches!(self, Corner::Nw | Corner::Ne),
            south: matches!(self, Corner::Sw | Corner::Se),
            west: matches!(self, Corner::Nw | Corner::Sw),
            east: matches!(self, Corner::Ne | Corner::Se),
        }
    }
}

impl Side {
    pub const ALL: [Side; 4] = [Side::N, Side::E, Side::S, Side::W];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::N => "n",
            Side::E => "e",
            Side::S => "s",
            Side::W => "w",
        }
    }

    /// The single edge this side drags.
    pub fn edges(self) -> Edges {
        Edges {
            north: self == Side::N,
            south: self == Side::S,
            west: self == Side::W,
            east: self == Side::E,
        }
    }
}

impl Handle {
    /// Every handle in paint order: corners and sides clockwise from the
    /// top-left, then the rotate grip.
    pub const ALL: [Handle; 9] = [
        Handle::Corner(Corner::Nw),
        Handle::Side(Side::N),
        Handle::Corner(Corner::Ne),
        Handle::Side(Side::E),
        Handle::Corner(Corner::Se),
        Handle::Side(Side::S),
        Handle::Corner(Corner::Sw),
        Handle::Side(Side::W),
        Handle::Rotate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Handle::Corner(c) => c.as_str(),
            Handle::Side(s) => s.as_str(),
            Handle::Rotate => "rotate",
        }
    }
}

impl FromStr for Corner {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Handle>()? {
            Handle::Corner(c) => Ok(c),
            _ => Err(EditorError::UnknownHandle(s.to_string())),
        }
    }
}

impl FromStr for Side {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Handle>()? {
            Handle::Side(side) => Ok(side),
            _ => Err(EditorError::UnknownHandle(s.to_string())),
        }
    }
}

impl FromStr for Handle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Handle::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| EditorError::UnknownHandle(s.to_string()))
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Handles cross into JS as their markup ids
impl Serialize for Handle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
