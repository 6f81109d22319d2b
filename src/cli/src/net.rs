use cube_state::{ColorIndex, CubeState, Face};
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::config::Palette;

/// Lay the six faces out as an unfolded cube:
///
/// ```text
///       up
/// left front right back
///       down
/// ```
///
/// Without a palette every sticker is printed as its label number.
pub fn render(cube: &CubeState, palette: Option<&Palette>) -> String {
    let size = cube.size();
    let indent = " ".repeat(size * 2 + 1);

    let face_row = |face: Face, row: usize| {
        cube[face]
            .iter_rows()
            .nth(row)
            .into_iter()
            .flatten()
            .map(|&sticker| cell(sticker, palette))
            .join("")
    };

    let mut lines = Vec::with_capacity(size * 3);

    for row in 0..size {
        lines.push(format!("{indent}{}", face_row(Face::Up, row)));
    }

    for row in 0..size {
        lines.push(
            [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| face_row(face, row))
                .join(" "),
        );
    }

    for row in 0..size {
        lines.push(format!("{indent}{}", face_row(Face::Down, row)));
    }

    lines
        .iter()
        .map(|line| format!("{}\n", line.trim_end()))
        .collect()
}

fn cell(sticker: ColorIndex, palette: Option<&Palette>) -> String {
    match palette {
        Some(palette) => {
            let (r, g, b) = palette[sticker].rgb();
            "  ".on_truecolor(r, g, b).to_string()
        }
        None => format!("{} ", sticker.index()),
    }
}
