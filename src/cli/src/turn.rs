use std::str::FromStr;

use cube_state::{CubeError, CubeState, Face};

/// A turn given on the command line as `face:depth` or `face:depth:ccw`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub face: Face,
    pub depth: usize,
    pub clockwise: bool,
}

impl Turn {
    pub fn apply(self, cube: &mut CubeState) -> Result<(), CubeError> {
        if self.clockwise {
            cube.rotate_clockwise(self.face, self.depth)
        } else {
            cube.rotate_counterclockwise(self.face, self.depth)
        }
    }
}

impl FromStr for Turn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');

        let face = parts
            .next()
            .unwrap_or_default()
            .parse::<Face>()
            .map_err(|e| e.to_string())?;

        let depth = parts
            .next()
            .ok_or_else(|| format!("Missing depth in `{s}`, expected `face:depth`"))?
            .parse::<usize>()
            .map_err(|e| format!("Invalid depth in `{s}`: {e}"))?;

        let clockwise = match parts.next() {
            None | Some("cw") => true,
            Some("ccw") => false,
            Some(other) => {
                return Err(format!(
                    "Unknown direction `{other}` in `{s}`, expected `cw` or `ccw`"
                ));
            }
        };

        if parts.next().is_some() {
            return Err(format!("Too many parts in `{s}`"));
        }

        Ok(Turn {
            face,
            depth,
            clockwise,
        })
    }
}
