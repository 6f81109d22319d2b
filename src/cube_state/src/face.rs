use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// One of the six faces of the cube.
///
/// The same enum labels stickers: a sticker's [`ColorIndex`] is the face it started on, so a solved
/// face is one whose every sticker equals the face itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Face {
    #[default]
    Front = 0,
    Right = 1,
    Back = 2,
    Left = 3,
    Up = 4,
    Down = 5,
}

/// The label of a sticker; which face it belonged to on a fresh cube. Not a position.
pub type ColorIndex = Face;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown face `{0}`, expected one of front, right, back, left, up, down")]
pub struct ParseFaceError(pub String);

impl Face {
    /// Every face in canonical order, so that `Face::ALL[i] as usize == i`
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Right, Back, Left, Up, Down];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face on the other side of the cube
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Right => "right",
            Face::Back => "back",
            Face::Left => "left",
            Face::Up => "up",
            Face::Down => "down",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.name() == s)
            .ok_or_else(|| ParseFaceError(s.to_owned()))
    }
}
