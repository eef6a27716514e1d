//! Comma-delimited ASCII elevation grids.
//!
//! A grid is a rectangular, row-major matrix of elevation samples, one
//! row per line, fields separated by commas. Row 0 is the northernmost
//! scan line; columns run west to east.
//!
//! # References
//!
//! 1. [CSDMS example topography dataset](http://bit.ly/csdms_topo)

mod error;

pub use crate::error::GridError;
use log::debug;
use num_traits::Float;
use std::{
    fmt::Display,
    fs,
    io::{self, Read, Write},
    path::Path,
    str::FromStr,
    time::Instant,
};

/// A rectangular, row-major matrix of elevation samples.
///
/// Immutable once constructed. Generic over the sample type so callers
/// can trade precision for memory; `f64` is the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Float = f64> {
    /// Number of rows (scan lines).
    rows: usize,

    /// Number of samples per row.
    cols: usize,

    /// Elevation samples, row-major.
    samples: Vec<T>,
}

impl<T> Grid<T>
where
    T: Float + FromStr,
{
    /// Parses comma-delimited text into a grid, one row per non-empty
    /// line.
    ///
    /// Fields are trimmed before conversion. A non-numeric field or a
    /// row whose field count differs from the first row's is an error,
    /// never a silently truncated or NaN-padded grid.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let now = Instant::now();
        let mut samples = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0;

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = 0;
            for (col_idx, field) in line.split(',').enumerate() {
                let field = field.trim();
                let value = field.parse::<T>().map_err(|_| GridError::Field {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    field: field.to_owned(),
                })?;
                samples.push(value);
                fields += 1;
            }
            match cols {
                None => cols = Some(fields),
                Some(expected) if fields != expected => {
                    return Err(GridError::Ragged {
                        line: line_idx + 1,
                        expected,
                        got: fields,
                    })
                }
                Some(_) => (),
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(GridError::Empty);
        };

        debug!("parsed {rows}x{cols} grid in {:?}", now.elapsed());

        Ok(Self {
            rows,
            cols,
            samples,
        })
    }

    /// Returns a grid read from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GridError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Returns a grid read from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Fetches `url` and parses the response body as a grid.
    ///
    /// Blocks until the whole body has been received. Redirects are
    /// followed; a non-success status is an error.
    pub fn fetch(url: &str) -> Result<Self, GridError> {
        let now = Instant::now();
        let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
        debug!(
            "fetched {} bytes from {url} in {:?}",
            body.len(),
            now.elapsed()
        );
        Self::parse(&body)
    }
}

impl<T: Float> Grid<T> {
    /// Builds a grid from row vectors.
    ///
    /// All rows must have the same length. An empty `rows` yields a
    /// zero-row grid; rejecting it is the caller's concern.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if !rows.is_empty() && cols == 0 {
            return Err(GridError::Empty);
        }
        let mut samples = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    line: idx + 1,
                    expected: cols,
                    got: row.len(),
                });
            }
            samples.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            samples,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of samples per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of samples in this grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the row at `index`, if in range.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index < self.rows {
            Some(self.row_unchecked(index))
        } else {
            None
        }
    }

    /// Returns the row at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn row_unchecked(&self, index: usize) -> &[T] {
        &self.samples[index * self.cols..(index + 1) * self.cols]
    }

    /// Returns an iterator over row slices, north to south.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(|index| self.row_unchecked(index))
    }

    /// Returns the lowest elevation sample in this grid.
    pub fn min_elevation(&self) -> T {
        self.samples.iter().copied().fold(T::infinity(), T::min)
    }

    /// Returns the highest elevation sample in this grid.
    pub fn max_elevation(&self) -> T {
        self.samples.iter().copied().fold(T::neg_infinity(), T::max)
    }
}

impl<T: Float + Display> Grid<T> {
    /// Writes the grid back out as comma-delimited text, one row per
    /// line. Re-parsing the output reproduces this grid.
    pub fn to_csv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in self.iter() {
            for (idx, sample) in row.iter().enumerate() {
                if idx > 0 {
                    write!(writer, ",")?;
                }
                write!(writer, "{sample}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridError};
    use approx::assert_relative_eq;

    const TOPO_3X4: &str = "1,2,3,4\n5,6,7,8\n9,10,11,12\n";

    #[test]
    fn test_parse_dimensions() {
        let grid: Grid = Grid::parse(TOPO_3X4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_row_access() {
        let grid: Grid = Grid::parse(TOPO_3X4).unwrap();
        assert_eq!(grid.row(0), Some(&[1.0, 2.0, 3.0, 4.0][..]));
        assert_eq!(grid.row(2), Some(&[9.0, 10.0, 11.0, 12.0][..]));
        assert_eq!(grid.row(3), None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid: Grid = Grid::parse("1,2\n\n3,4\n\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let grid: Grid = Grid::parse(" 1.5 , 2.5 \n 3.5 , 4.5 \n").unwrap();
        assert_eq!(grid.row_unchecked(1), &[3.5, 4.5][..]);
    }

    #[test]
    fn test_parse_rejects_bad_field() {
        match Grid::<f64>::parse("1,2\n3,oops\n") {
            Err(GridError::Field {
                line,
                column,
                field,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(field, "oops");
            }
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_ragged_row() {
        match Grid::<f64>::parse("1,2,3\n4,5\n") {
            Err(GridError::Ragged {
                line,
                expected,
                got,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected ragged error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(Grid::<f64>::parse(""), Err(GridError::Empty)));
        assert!(matches!(
            Grid::<f64>::parse("\n   \n"),
            Err(GridError::Empty)
        ));
    }

    #[test]
    fn test_parse_f32() {
        let grid: Grid<f32> = Grid::parse(TOPO_3X4).unwrap();
        assert_eq!(grid.row_unchecked(1), &[5.0_f32, 6.0, 7.0, 8.0][..]);
    }

    #[test]
    fn test_from_reader() {
        let grid: Grid = Grid::from_reader("1,2\n3,4\n".as_bytes()).unwrap();
        assert_eq!(grid.rows(), 2);
    }

    #[test]
    fn test_min_max_elevation() {
        let grid: Grid = Grid::parse(TOPO_3X4).unwrap();
        assert_relative_eq!(grid.min_elevation(), 1.0);
        assert_relative_eq!(grid.max_elevation(), 12.0);
    }

    #[test]
    fn test_csv_round_trip() {
        let grid: Grid = Grid::parse("1.25,-2.5,3.75\n40.125,5.0625,-6.5\n").unwrap();
        let mut csv = Vec::new();
        grid.to_csv(&mut csv).unwrap();
        let reparsed: Grid = Grid::parse(std::str::from_utf8(&csv).unwrap()).unwrap();
        assert_eq!(grid.rows(), reparsed.rows());
        assert_eq!(grid.cols(), reparsed.cols());
        for (a, b) in grid.iter().flatten().zip(reparsed.iter().flatten()) {
            assert_relative_eq!(*a, *b);
        }
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.row_unchecked(0), &[1.0, 2.0][..]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(matches!(
            Grid::from_rows(vec![vec![1.0], vec![2.0, 3.0]]),
            Err(GridError::Ragged { line: 2, .. })
        ));
    }

    #[test]
    fn test_from_rows_empty_is_zero_rows() {
        let grid: Grid = Grid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.len(), 0);
    }
}
