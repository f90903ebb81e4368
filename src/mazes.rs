use crate::error::MazeError;
use crate::grid::Grid;
use std::fmt;

type Layout = [[u8; 6]; 6];

const SIMPLE: Layout = [
    [1, 1, 1, 1, 0, 1],
    [1, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1],
    [1, 1, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1],
];

const HORIZONTAL_BARS: Layout = [
    [1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1],
];

const VERTICAL_BARS: Layout = [
    [1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1, 0],
    [1, 1, 1, 1, 1, 1],
];

const OPEN_CENTER: Layout = [
    [1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1],
];

/// Hand-authored 6x6 mazes. 1 is passable, 0 is blocked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazePreset {
    #[default]
    Simple,
    HorizontalBars,
    VerticalBars,
    OpenCenter,
}

impl MazePreset {
    pub const ALL: [MazePreset; 4] = [
        MazePreset::Simple,
        MazePreset::HorizontalBars,
        MazePreset::VerticalBars,
        MazePreset::OpenCenter,
    ];

    /// Looks a preset up by name. Unknown names get the simple maze.
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple" => MazePreset::Simple,
            "horizontal_bars" => MazePreset::HorizontalBars,
            "vertical_bars" => MazePreset::VerticalBars,
            "open_center" => MazePreset::OpenCenter,
            _ => MazePreset::Simple,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MazePreset::Simple => "simple",
            MazePreset::HorizontalBars => "horizontal_bars",
            MazePreset::VerticalBars => "vertical_bars",
            MazePreset::OpenCenter => "open_center",
        }
    }

    fn layout(&self) -> &'static Layout {
        match self {
            MazePreset::Simple => &SIMPLE,
            MazePreset::HorizontalBars => &HORIZONTAL_BARS,
            MazePreset::VerticalBars => &VERTICAL_BARS,
            MazePreset::OpenCenter => &OPEN_CENTER,
        }
    }
}

impl fmt::Display for MazePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn create_maze(preset: MazePreset) -> Result<Grid, MazeError> {
    Grid::from_rows(preset.layout())
}
