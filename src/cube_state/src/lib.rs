//! Sticker-level state of an N×N×N cube and the layer turns that permute it.
//!
//! [`Grid`] is the two-dimensional container every face is stored in, and [`CubeState`] owns the
//! six faces and implements the turns.

mod cube;
mod face;
mod grid;

pub use cube::{CubeError, CubeState};
pub use face::{ColorIndex, Face, ParseFaceError};
pub use grid::{Axis, Grid, GridError};
