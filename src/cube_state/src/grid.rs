use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

/// Which dimension of a grid an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("The {axis} index is out of bounds, expected a value below {bound} but got {index}")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    #[error("The line does not fit, expected a {axis} count of {expected} but got {actual}")]
    DimensionMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },
}

/// A fixed-size two-dimensional grid stored in row-major order.
///
/// The shape never changes after construction; only the values do. Every transform returns a new
/// grid that owns its own storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    data: Box<[T]>,
}

impl<T: Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid::from_fn(rows, columns, |_, _| T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    #[must_use]
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        Grid {
            rows,
            columns,
            data: vec![value; rows * columns].into_boxed_slice(),
        }
    }

    /// Build a grid from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if any row differs in length from the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, Vec::len);

        if let Some(bad) = rows.iter().find(|row| row.len() != columns) {
            return Err(GridError::DimensionMismatch {
                axis: Axis::Column,
                expected: columns,
                actual: bad.len(),
            });
        }

        Ok(Grid {
            rows: rows.len(),
            columns,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data.fill(value);
        self
    }

    /// Copy out row `row` as a `1 × columns` grid.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `row` is not below the row count.
    pub fn get_row(&self, row: usize) -> Result<Grid<T>, GridError> {
        if row >= self.rows {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }

        Ok(Grid::from_fn(1, self.columns, |_, column| {
            self.at(row, column).clone()
        }))
    }

    /// Copy out column `column` as a `rows × 1` grid.
    ///
    /// # Errors
    ///
    /// The index is first checked against the *row* count, the same check `get_row` does. On a
    /// grid with more rows than columns, an index between the two counts gets past that check and
    /// then fails on the per-cell column bound instead.
    pub fn get_column(&self, column: usize) -> Result<Grid<T>, GridError> {
        if column >= self.rows {
            return Err(GridError::IndexOutOfBounds {
                axis: Axis::Column,
                index: column,
                bound: self.rows,
            });
        }

        let cells = (0..self.rows)
            .map(|row| self.get(row, column).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid {
            rows: self.rows,
            columns: 1,
            data: cells.into_boxed_slice(),
        })
    }

    /// Overwrite row `index` with the first row of `line`, which must be `columns` wide.
    ///
    /// Nothing is written unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is not a valid row and `DimensionMismatch` if `line`
    /// has the wrong number of columns.
    pub fn set_row(&mut self, line: &Grid<T>, index: usize) -> Result<(), GridError> {
        check_index(Axis::Row, index, self.rows)?;

        if line.columns != self.columns {
            return Err(GridError::DimensionMismatch {
                axis: Axis::Column,
                expected: self.columns,
                actual: line.columns,
            });
        }

        let cells = (0..line.columns)
            .map(|column| line.get(0, column).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        for (column, value) in cells.into_iter().enumerate() {
            self.set(index, column, value)?;
        }

        Ok(())
    }

    /// Overwrite column `index` with the first column of `line`, which must be `rows` tall.
    ///
    /// Nothing is written unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is not a valid column and `DimensionMismatch` if
    /// `line` has the wrong number of rows.
    pub fn set_column(&mut self, line: &Grid<T>, index: usize) -> Result<(), GridError> {
        check_index(Axis::Column, index, self.columns)?;

        if line.rows != self.rows {
            return Err(GridError::DimensionMismatch {
                axis: Axis::Row,
                expected: self.rows,
                actual: line.rows,
            });
        }

        let cells = (0..line.rows)
            .map(|row| line.get(row, 0).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        for (row, value) in cells.into_iter().enumerate() {
            self.set(row, index, value)?;
        }

        Ok(())
    }

    /// Mirror top to bottom: row `r` becomes row `rows - 1 - r`
    #[must_use]
    pub fn flip_columns(&self) -> Grid<T> {
        Grid::from_fn(self.rows, self.columns, |row, column| {
            self.at(self.rows - 1 - row, column).clone()
        })
    }

    /// Mirror left to right: column `c` becomes column `columns - 1 - c`
    #[must_use]
    pub fn flip_rows(&self) -> Grid<T> {
        Grid::from_fn(self.rows, self.columns, |row, column| {
            self.at(row, self.columns - 1 - column).clone()
        })
    }

    #[must_use]
    pub fn transpose(&self) -> Grid<T> {
        Grid::from_fn(self.columns, self.rows, |row, column| {
            self.at(column, row).clone()
        })
    }

    #[must_use]
    pub fn rotate_clockwise(&self) -> Grid<T> {
        self.transpose().flip_rows()
    }

    #[must_use]
    pub fn rotate_counterclockwise(&self) -> Grid<T> {
        self.flip_rows().transpose()
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `f(row, column)` for every cell in row-major order
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let data = (0..rows)
            .cartesian_product(0..columns)
            .map(|(row, column)| f(row, column))
            .collect();

        Grid {
            rows,
            columns,
            data,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` naming the first axis whose index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Result<&T, GridError> {
        check_index(Axis::Row, row, self.rows)?;
        check_index(Axis::Column, column, self.columns)?;

        Ok(self.at(row, column))
    }

    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` naming the first axis whose index is out of range.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<(), GridError> {
        check_index(Axis::Row, row, self.rows)?;
        check_index(Axis::Column, column, self.columns)?;

        self.data[row * self.columns + column] = value;

        Ok(())
    }

    /// Every value in row-major order.
    ///
    /// The iterator borrows the grid, so the grid cannot change underneath it. Clone the iterator
    /// to walk the values again.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Every row as a slice, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + Clone + '_ {
        (0..self.rows).map(move |row| &self.data[row * self.columns..(row + 1) * self.columns])
    }

    fn at(&self, row: usize, column: usize) -> &T {
        &self.data[row * self.columns + column]
    }

}

fn check_index(axis: Axis, index: usize, bound: usize) -> Result<(), GridError> {
    if index < bound {
        Ok(())
    } else {
        Err(GridError::IndexOutOfBounds { axis, index, bound })
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .iter_rows()
            .map(|row| row.iter().join(" "))
            .join("\n");

        f.write_str(&text)
    }
}
