//! This module contains the table logic for the application.
//!
//! The main entry point is the [`Table`] struct which represents a table.
//! Tables are built from an iterator of items and a list of column definitions.
use std::{fmt::Display, iter};

use console::measure_text_width;

/// Padding added after every cell.
const CELL_PADDING: usize = 4;

/// Table representation.
///
/// A table is a collection of rows and columns, printed using the [`Display`] trait.
/// Every column is as wide as its widest cell plus some padding.
pub struct Table {
    /// Header of the table.
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column definition.
///
/// A column is a tuple of a name and a function to get the value of the column for a given item.
pub type TableColumn<S, T> = (S, fn(&T) -> String);

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Create a new table from an iterator of items.
    ///
    /// # Arguments
    ///
    /// * `iter` - The iterator of items.
    /// * `columns` - The columns of the table.
    pub fn from_iter<'a, S, Iter, Item>(iter: Iter, columns: &[TableColumn<S, Item>]) -> Self
    where
        S: Display,
        Iter: IntoIterator<Item = &'a Item>,
        Item: 'a,
    {
        let header = columns.iter().map(|(name, _)| name.to_string()).collect();

        let rows = iter
            .into_iter()
            .map(|item| columns.iter().map(|(_, f)| f(item)).collect())
            .collect();

        Self::new(header, rows)
    }

    /// Width of every column, measured without ANSI escape codes.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.header.len()];

        for row in iter::once(&self.header).chain(self.rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell) + CELL_PADDING);
            }
        }

        widths
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.column_widths();

        for row in iter::once(&self.header).chain(self.rows.iter()) {
            for (cell, width) in row.iter().zip(widths.iter()) {
                // `{:<width$}` would count escape codes, so pad by hand.
                let padding = width.saturating_sub(measure_text_width(cell));
                write!(f, "{}{}", cell, " ".repeat(padding))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
