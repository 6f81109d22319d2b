use std::{fs, ops::Index, path::Path};

use color_eyre::eyre::WrapErr;
use cube_state::Face;
use serde::{Deserialize, Serialize};

/// Settings read from the optional `--config` file. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub size: Option<usize>,
    pub palette: Palette,
}

impl CliConfig {
    pub fn load(path: &Path) -> color_eyre::Result<CliConfig> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the configuration file {path:?}"))?;

        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse the configuration file {path:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerColor {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    Grey,
    Purple,
}

impl StickerColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StickerColor::White => (255, 255, 255),
            StickerColor::Yellow => (255, 255, 0),
            StickerColor::Red => (255, 0, 0),
            StickerColor::Orange => (255, 128, 0),
            StickerColor::Blue => (0, 0, 255),
            StickerColor::Green => (0, 255, 0),
            StickerColor::Grey => (127, 127, 127),
            StickerColor::Purple => (255, 0, 255),
        }
    }
}

/// The colour each sticker label is drawn with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub front: StickerColor,
    pub right: StickerColor,
    pub back: StickerColor,
    pub left: StickerColor,
    pub up: StickerColor,
    pub down: StickerColor,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            front: StickerColor::Green,
            right: StickerColor::Red,
            back: StickerColor::Blue,
            left: StickerColor::Orange,
            up: StickerColor::White,
            down: StickerColor::Yellow,
        }
    }
}

impl Index<Face> for Palette {
    type Output = StickerColor;

    fn index(&self, index: Face) -> &Self::Output {
        match index {
            Face::Front => &self.front,
            Face::Right => &self.right,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Up => &self.up,
            Face::Down => &self.down,
        }
    }
}
