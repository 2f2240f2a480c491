//! Parsed contract statistics rows.

use serde::{Deserialize, Serialize};

/// The tabular result of a successful contract statistics query.
///
/// Rows and fields are kept exactly as the exchange returned them: no type
/// coercion, no width validation, and the first row (a header, when the
/// upstream includes one) is not distinguished from data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    rows: Vec<Vec<String>>,
}

impl StatsTable {
    /// Creates a table from parsed rows.
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns the rows in response order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consumes the table, returning the rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.rows.iter()
    }
}

impl IntoIterator for StatsTable {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatsTable {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatsTable {
        StatsTable::from_rows(vec![
            vec!["Date".into(), "Open Interest".into()],
            vec!["2019/01/02".into(), "48,116".into()],
        ])
    }

    #[test]
    fn test_rows_preserved_in_order() {
        let table = sample();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], "Date");
        assert_eq!(table.rows()[1][1], "48,116");
    }

    #[test]
    fn test_empty_table() {
        let table = StatsTable::default();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_iteration() {
        let table = sample();
        let widths: Vec<usize> = table.iter().map(Vec::len).collect();

        assert_eq!(widths, vec![2, 2]);
        assert_eq!(table.into_rows().len(), 2);
    }
}
