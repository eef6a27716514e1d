//! West-to-east topographic profile lines.
//!
//! A transect is one row of an elevation [`Grid`] paired with a display
//! label and a draw style. Three fixed transects are cut from every
//! grid: the north edge, the south edge, and the middle row.

mod error;

pub use crate::error::TransectError;
use log::debug;
use num_traits::Float;
use topogrid::Grid;

/// Which grid row a profile is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// First row of the grid.
    North,
    /// Last row of the grid.
    South,
    /// Middle row.
    Mid,
}

impl Line {
    /// All lines, in chart order.
    pub const ALL: [Line; 3] = [Line::North, Line::South, Line::Mid];

    /// Returns the legend label for this line.
    pub fn label(self) -> &'static str {
        match self {
            Line::North => "North",
            Line::South => "South",
            Line::Mid => "Mid",
        }
    }

    /// Returns the draw style for this line.
    pub fn style(self) -> LineStyle {
        match self {
            Line::North => LineStyle {
                color: (0, 0, 255),
                stroke: Stroke::Solid,
                width: 1,
            },
            Line::South => LineStyle {
                color: (255, 0, 0),
                stroke: Stroke::Dashed,
                width: 1,
            },
            Line::Mid => LineStyle {
                color: (0, 128, 0),
                stroke: Stroke::Dotted,
                width: 3,
            },
        }
    }

    /// Returns the grid row this line selects from a grid with `rows`
    /// rows. `rows` must be nonzero.
    ///
    /// Mid uses floor division, so the selected row is stable for odd
    /// and even row counts.
    pub fn row_index(self, rows: usize) -> usize {
        match self {
            Line::North => 0,
            Line::South => rows - 1,
            Line::Mid => rows / 2,
        }
    }
}

/// How a profile is stroked when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    /// RGB color.
    pub color: (u8, u8, u8),
    pub stroke: Stroke,
    /// Stroke width in pixels.
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
    Dotted,
}

/// One west-to-east elevation profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<T: Float = f64> {
    /// Which row this profile was cut from.
    pub line: Line,

    /// Elevation at each column, west to east.
    pub elevations: Vec<T>,
}

impl<T: Float> Profile<T> {
    /// Cuts the three fixed profile lines from `grid`.
    ///
    /// Returned in chart order: North, South, Mid. Each profile has
    /// exactly `grid.cols()` samples. For a one-row grid all three
    /// profiles are copies of row 0.
    pub fn extract_all(grid: &Grid<T>) -> Result<[Profile<T>; 3], TransectError> {
        if grid.rows() == 0 {
            return Err(TransectError::EmptyGrid);
        }

        let profiles = Line::ALL.map(|line| Profile {
            line,
            elevations: grid.row_unchecked(line.row_index(grid.rows())).to_vec(),
        });

        debug!(
            "cut {} profiles of {} samples each",
            profiles.len(),
            grid.cols()
        );

        Ok(profiles)
    }

    /// Returns the number of samples in this profile.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.elevations.len()
    }
}
