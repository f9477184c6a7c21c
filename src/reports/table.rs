//! Flat, column-named tables and the handful of relational operations the
//! report builders need: projection by name, renaming, filtering, stable
//! sorting, hash left joins and group-by counting.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A single scalar value in a table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Text(String),
}

static NULL_CELL: Cell = Cell::Null;

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as i64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Cell::Null,
        }
    }
}

/// An ordered sequence of rows sharing the same named columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Borrowed view of one row, with by-name column access.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Record<'a> {
    /// Returns the cell in `column`, or `Cell::Null` when the table has no
    /// such column.
    pub fn get(&self, column: &str) -> &'a Cell {
        match self.columns.iter().position(|c| c == column) {
            Some(idx) => &self.cells[idx],
            None => &NULL_CELL,
        }
    }

    pub fn text(&self, column: &str) -> Option<&'a str> {
        self.get(column).as_str()
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column).as_int()
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    fn key(&self, columns: &[&str]) -> Vec<Cell> {
        columns.iter().map(|c| self.get(c).clone()).collect()
    }
}

impl Table {
    pub fn new<I, S>(columns: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Rows shorter than the column list are padded with
    /// nulls, longer ones are truncated.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn record(&self, idx: usize) -> Option<Record<'_>> {
        self.rows.get(idx).map(|cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(|cells| Record {
            columns: &self.columns,
            cells,
        })
    }

    /// All values of `column`, in row order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.records().map(move |r| r.get(column))
    }

    /// Renames columns; pairs naming a missing column are ignored.
    pub fn rename(mut self, renames: &[(&str, &str)]) -> Table {
        for (from, to) in renames {
            if let Some(column) = self.columns.iter_mut().find(|c| c == from) {
                *column = (*to).to_owned();
            }
        }
        self
    }

    pub fn filter<F>(&self, predicate: F) -> Table
    where
        F: Fn(&Record<'_>) -> bool,
    {
        let rows = self
            .records()
            .filter(|r| predicate(r))
            .map(|r| r.cells.to_vec())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Stable sort: rows with equal keys keep their relative order.
    pub fn sorted_by_key<K, F>(&self, key: F) -> Table
    where
        K: Ord,
        F: Fn(&Record<'_>) -> K,
    {
        let mut keyed: Vec<(K, &Vec<Cell>)> = self
            .rows
            .iter()
            .map(|cells| {
                let record = Record {
                    columns: &self.columns,
                    cells,
                };
                (key(&record), cells)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Table {
            columns: self.columns.clone(),
            rows: keyed.into_iter().map(|(_, cells)| cells.clone()).collect(),
        }
    }

    /// Left join against `right`.
    ///
    /// `on` pairs a column of `self` with a column of `right`; `take` lists
    /// the `right` columns to append, each with its output name. Every row of
    /// `self` is kept in order. Rows without a match, or whose key contains a
    /// null, get nulls in the appended columns. When `right` holds the same
    /// key more than once the first row wins, so the output always has
    /// exactly `self.len()` rows.
    pub fn left_join(self, right: &Table, on: &[(&str, &str)], take: &[(&str, &str)]) -> Table {
        let left_keys: Vec<&str> = on.iter().map(|(l, _)| *l).collect();
        let right_keys: Vec<&str> = on.iter().map(|(_, r)| *r).collect();

        let mut lookup: HashMap<Vec<Cell>, usize> = HashMap::new();
        for (idx, record) in right.records().enumerate() {
            let key = record.key(&right_keys);
            if key.iter().any(Cell::is_null) {
                continue;
            }
            lookup.entry(key).or_insert(idx);
        }

        let mut columns = self.columns.clone();
        columns.extend(take.iter().map(|(_, name)| (*name).to_owned()));

        let mut rows = Vec::with_capacity(self.rows.len());
        for cells in self.rows.iter() {
            let record = Record {
                columns: &self.columns,
                cells,
            };
            let matched = lookup
                .get(&record.key(&left_keys))
                .and_then(|idx| right.record(*idx));
            let mut row = cells.clone();
            for (column, _) in take {
                row.push(match matched {
                    Some(m) => m.get(column).clone(),
                    None => Cell::Null,
                });
            }
            rows.push(row);
        }

        Table { columns, rows }
    }

    /// Groups rows by the `keys` columns and counts the rows of each group.
    ///
    /// The output has the key columns followed by `count_column`, one row per
    /// distinct key in order of first appearance. Null key values form their
    /// own group.
    pub fn count_by(&self, keys: &[&str], count_column: &str) -> Table {
        let mut positions: HashMap<Vec<Cell>, usize> = HashMap::new();
        let mut groups: Vec<(Vec<Cell>, i64)> = Vec::new();

        for record in self.records() {
            let key = record.key(keys);
            match positions.get(&key) {
                Some(pos) => groups[*pos].1 += 1,
                None => {
                    positions.insert(key.clone(), groups.len());
                    groups.push((key, 1));
                }
            }
        }

        let mut columns: Vec<String> = keys.iter().map(|k| (*k).to_owned()).collect();
        columns.push(count_column.to_owned());

        let rows = groups
            .into_iter()
            .map(|(mut key, count)| {
                key.push(Cell::Int(count));
                key
            })
            .collect();

        Table { columns, rows }
    }
}
