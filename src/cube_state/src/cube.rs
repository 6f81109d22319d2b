use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    face::{ColorIndex, Face},
    grid::{Axis, Grid, GridError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must have a side length of at least 1")]
    InvalidSize,
    #[error("Rotation depth is out of bounds, expected a value below {size} but got {depth}")]
    InvalidDepth { depth: usize, size: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Whether a neighbouring line sits `depth` or `size - 1 - depth` from the start of its face
#[derive(Debug, Clone, Copy)]
enum Offset {
    Near,
    Far,
}

/// What happens to a line on its way into the next face of the ring
#[derive(Debug, Clone, Copy)]
enum LineTransform {
    Identity,
    Flip,
    RotateClockwise,
    RotateCounterclockwise,
}

impl LineTransform {
    fn apply(self, line: &Grid<ColorIndex>) -> Grid<ColorIndex> {
        match self {
            LineTransform::Identity => line.clone(),
            LineTransform::Flip => line.flip_columns(),
            LineTransform::RotateClockwise => line.rotate_clockwise(),
            LineTransform::RotateCounterclockwise => line.rotate_counterclockwise(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    face: Face,
    axis: Axis,
    offset: Offset,
    onward: LineTransform,
}

const fn slot(face: Face, axis: Axis, offset: Offset, onward: LineTransform) -> Slot {
    Slot {
        face,
        axis,
        offset,
        onward,
    }
}

impl Slot {
    fn index(self, depth: usize, last: usize) -> usize {
        match self.offset {
            Offset::Near => depth,
            Offset::Far => last - depth,
        }
    }

    fn read(
        self,
        faces: &[Grid<ColorIndex>; 6],
        index: usize,
    ) -> Result<Grid<ColorIndex>, GridError> {
        let grid = &faces[self.face.index()];

        match self.axis {
            Axis::Row => grid.get_row(index),
            Axis::Column => grid.get_column(index),
        }
    }

    fn write(
        self,
        faces: &mut [Grid<ColorIndex>; 6],
        line: &Grid<ColorIndex>,
        index: usize,
    ) -> Result<(), GridError> {
        let grid = &mut faces[self.face.index()];

        match self.axis {
            Axis::Row => grid.set_row(line, index),
            Axis::Column => grid.set_column(line, index),
        }
    }
}

/// For a clockwise turn of each face (indexed by `Face`), the four neighbouring lines the turn
/// moves. The line in slot `i` moves into slot `i + 1` (wrapping around), after passing through
/// the `onward` transform of slot `i`.
const RINGS: [[Slot; 4]; 6] = {
    use Axis::{Column, Row};
    use Face::{Back, Down, Front, Left, Right, Up};
    use LineTransform::{Flip, Identity, RotateClockwise, RotateCounterclockwise};
    use Offset::{Far, Near};

    [
        // Front
        [
            slot(Left, Column, Far, RotateClockwise),
            slot(Up, Row, Far, RotateClockwise),
            slot(Right, Column, Near, RotateClockwise),
            slot(Down, Row, Near, RotateClockwise),
        ],
        // Right
        [
            slot(Front, Column, Far, Identity),
            slot(Up, Column, Far, Flip),
            slot(Back, Column, Near, Flip),
            slot(Down, Column, Far, Identity),
        ],
        // Back
        [
            slot(Right, Column, Far, RotateCounterclockwise),
            slot(Up, Row, Near, RotateCounterclockwise),
            slot(Left, Column, Near, RotateCounterclockwise),
            slot(Down, Row, Far, RotateCounterclockwise),
        ],
        // Left
        [
            slot(Back, Column, Far, Flip),
            slot(Up, Column, Near, Identity),
            slot(Front, Column, Near, Identity),
            slot(Down, Column, Near, Flip),
        ],
        // Up
        [
            slot(Right, Row, Near, Identity),
            slot(Front, Row, Near, Identity),
            slot(Left, Row, Near, Identity),
            slot(Back, Row, Near, Identity),
        ],
        // Down
        [
            slot(Left, Row, Far, Identity),
            slot(Front, Row, Far, Identity),
            slot(Right, Row, Far, Identity),
            slot(Back, Row, Far, Identity),
        ],
    ]
};

/// The sticker state of an N×N×N cube.
///
/// Each face is a `size × size` grid of the labels of the stickers currently on it. Faces are laid
/// out as seen when looking straight at them with the cube in its default orientation; up is
/// viewed with back at the top edge, down with front at the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: usize,
    faces: [Grid<ColorIndex>; 6],
}

impl CubeState {
    /// Create a solved cube with the given side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero.
    pub fn new(size: usize) -> Result<CubeState, CubeError> {
        if size == 0 {
            return Err(CubeError::InvalidSize);
        }

        debug!("Creating a {size}x{size}x{size} cube");

        Ok(CubeState {
            size,
            faces: Face::ALL.map(|face| Grid::filled(size, size, face)),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The current stickers of a face
    #[must_use]
    pub fn face_values(&self, face: Face) -> &Grid<ColorIndex> {
        &self.faces[face.index()]
    }

    /// How many stickers of each label are on the cube, indexed by `Face`.
    ///
    /// Turns only move stickers around, so every entry stays at `size * size`.
    #[must_use]
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];

        for sticker in self.faces.iter().flat_map(Grid::values) {
            counts[sticker.index()] += 1;
        }

        counts
    }

    /// Whether every face shows a single colour
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| face.values().all_equal())
    }

    /// Turn the layer `depth` deep behind `face` a quarter turn clockwise, as seen looking at
    /// `face`.
    ///
    /// Depth 0 also spins `face` itself, and depth `size - 1` spins the opposite face, which sees
    /// the same turn as counterclockwise. On a 1×1×1 cube both happen at once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDepth` if `depth >= size`. The cube is left untouched on error.
    pub fn rotate_clockwise(&mut self, face: Face, depth: usize) -> Result<(), CubeError> {
        self.check_depth(depth)?;

        trace!("Turning {face} clockwise at depth {depth}");

        let last = self.size - 1;
        let mut faces = self.faces.clone();

        if depth == 0 {
            faces[face.index()] = faces[face.index()].rotate_clockwise();
        }

        if depth == last {
            let opposite = face.opposite().index();
            faces[opposite] = faces[opposite].rotate_counterclockwise();
        }

        let ring = &RINGS[face.index()];

        // Read all four lines before writing any of them
        let lines = ring
            .iter()
            .map(|slot| slot.read(&faces, slot.index(depth, last)))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, line) in lines.iter().enumerate() {
            let from = ring[i];
            let to = ring[(i + 1) % ring.len()];

            to.write(&mut faces, &from.onward.apply(line), to.index(depth, last))?;
        }

        self.faces = faces;

        Ok(())
    }

    /// Turn the layer `depth` deep behind `face` a quarter turn counterclockwise.
    ///
    /// This is three clockwise turns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDepth` if `depth >= size`. The cube is left untouched on error.
    pub fn rotate_counterclockwise(&mut self, face: Face, depth: usize) -> Result<(), CubeError> {
        self.check_depth(depth)?;

        for _ in 0..3 {
            self.rotate_clockwise(face, depth)?;
        }

        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<(), CubeError> {
        if depth < self.size {
            Ok(())
        } else {
            Err(CubeError::InvalidDepth {
                depth,
                size: self.size,
            })
        }
    }
}

macro_rules! named_turns {
    ($($face:ident: $values:ident, $clockwise:ident, $counterclockwise:ident;)*) => {
        impl CubeState {
            $(
                #[must_use]
                pub fn $values(&self) -> &Grid<ColorIndex> {
                    self.face_values(Face::$face)
                }

                /// See [`CubeState::rotate_clockwise`]
                ///
                /// # Errors
                ///
                /// Returns `InvalidDepth` if `depth >= size`.
                pub fn $clockwise(&mut self, depth: usize) -> Result<(), CubeError> {
                    self.rotate_clockwise(Face::$face, depth)
                }

                /// See [`CubeState::rotate_counterclockwise`]
                ///
                /// # Errors
                ///
                /// Returns `InvalidDepth` if `depth >= size`.
                pub fn $counterclockwise(&mut self, depth: usize) -> Result<(), CubeError> {
                    self.rotate_counterclockwise(Face::$face, depth)
                }
            )*
        }
    };
}

named_turns! {
    Front: front_values, rotate_front_clockwise, rotate_front_counterclockwise;
    Right: right_values, rotate_right_clockwise, rotate_right_counterclockwise;
    Back: back_values, rotate_back_clockwise, rotate_back_counterclockwise;
    Left: left_values, rotate_left_clockwise, rotate_left_counterclockwise;
    Up: up_values, rotate_up_clockwise, rotate_up_counterclockwise;
    Down: down_values, rotate_down_clockwise, rotate_down_counterclockwise;
}

impl Index<Face> for CubeState {
    type Output = Grid<ColorIndex>;

    fn index(&self, index: Face) -> &Self::Output {
        self.face_values(index)
    }
}

impl Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (face, grid) in Face::ALL.iter().zip(&self.faces) {
            writeln!(f, "{face}:")?;

            for row in grid.iter_rows() {
                writeln!(f, "{}", row.iter().map(|sticker| sticker.index()).join(" "))?;
            }
        }

        Ok(())
    }
}
