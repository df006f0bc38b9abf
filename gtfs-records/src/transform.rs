//! Pre-processing of a file before its lines are turned into objects
//!
//! Some producers publish files that do not follow the reference (extra columns,
//! their own layout). Instead of relaxing the objects, a [Transform] can be registered
//! for a file name with [crate::GtfsReader::transform] to fix the table first.

/// One data line of a [Table]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Line number in the file, the header being line 1
    pub line: usize,
    /// Values of the line
    pub values: Vec<String>,
}

/// The content of a file, split in cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column names
    pub headers: Vec<String>,
    /// Data lines, in file order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Position of a column
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Rewrites a [Table] before it is validated
pub trait Transform: Send + Sync {
    /// Returns the fixed table
    fn apply(&self, table: Table) -> Table;
}

impl<F> Transform for F
where
    F: Fn(Table) -> Table + Send + Sync,
{
    fn apply(&self, table: Table) -> Table {
        self(table)
    }
}

/// Removes a column, if present
///
/// ```
/// use gtfs_records::{DropColumn, Table, TableRow, Transform};
/// let table = Table {
///     headers: vec!["trip_id".into(), "trip_type".into()],
///     rows: vec![TableRow { line: 2, values: vec!["T1".into(), "5".into()] }],
/// };
/// let table = DropColumn::new("trip_type").apply(table);
/// assert_eq!(vec!["trip_id"], table.headers);
/// assert_eq!(vec!["T1"], table.rows[0].values);
/// ```
#[derive(Debug, Clone)]
pub struct DropColumn {
    column: String,
}

impl DropColumn {
    /// Transform removing the column `column`
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Transform for DropColumn {
    fn apply(&self, mut table: Table) -> Table {
        if let Some(index) = table.column(&self.column) {
            table.headers.remove(index);
            for row in &mut table.rows {
                if index < row.values.len() {
                    row.values.remove(index);
                }
            }
        }
        table
    }
}

/// Converts the `trans_id,lang,translation` layout of `translations.txt` (used by the Belgian
/// railways) into standard translations
///
/// Each line translates a text wherever it is used as a stop name or a trip headsign, so it
/// becomes two translations matched by `field_value`. A table without a `trans_id` column is kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTranslations;

impl Transform for LegacyTranslations {
    fn apply(&self, table: Table) -> Table {
        let (text, lang, translation) = match (
            table.column("trans_id"),
            table.column("lang"),
            table.column("translation"),
        ) {
            (Some(t), Some(l), Some(tr)) => (t, l, tr),
            (Some(_), _, _) => (0, 1, 2),
            _ => return table,
        };
        let cell = |values: &[String], i: usize| values.get(i).cloned().unwrap_or_default();

        let headers = ["table_name", "field_name", "field_value", "language", "translation"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows = table
            .rows
            .iter()
            .flat_map(|row| {
                [("stops", "stop_name"), ("trips", "trip_headsign")]
                    .into_iter()
                    .map(move |(table_name, field_name)| TableRow {
                        line: row.line,
                        values: vec![
                            table_name.to_owned(),
                            field_name.to_owned(),
                            cell(&row.values, text),
                            cell(&row.values, lang),
                            cell(&row.values, translation),
                        ],
                    })
            })
            .collect();
        Table { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, r)| TableRow {
                    line: i + 2,
                    values: r.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn drop_column() {
        let t = table(
            &["route_id", "trip_type", "trip_id"],
            &[&["R1", "1", "T1"], &["R1"]],
        );
        let t = DropColumn::new("trip_type").apply(t);
        assert_eq!(vec!["route_id", "trip_id"], t.headers);
        assert_eq!(vec!["R1", "T1"], t.rows[0].values);
        assert_eq!(vec!["R1"], t.rows[1].values);

        let unchanged = table(&["route_id"], &[&["R1"]]);
        assert_eq!(unchanged, DropColumn::new("trip_type").apply(unchanged.clone()));
    }

    #[test]
    fn legacy_translations() {
        let t = table(
            &["trans_id", "lang", "translation"],
            &[&["Brussel-Zuid", "fr", "Bruxelles-Midi"], &["Luik", "fr", "Liège"]],
        );
        let t = LegacyTranslations.apply(t);
        assert_eq!(
            vec!["table_name", "field_name", "field_value", "language", "translation"],
            t.headers
        );
        assert_eq!(4, t.rows.len());
        assert_eq!(
            vec!["stops", "stop_name", "Brussel-Zuid", "fr", "Bruxelles-Midi"],
            t.rows[0].values
        );
        assert_eq!(
            vec!["trips", "trip_headsign", "Brussel-Zuid", "fr", "Bruxelles-Midi"],
            t.rows[1].values
        );
        assert_eq!(2, t.rows[1].line);
        assert_eq!(3, t.rows[3].line);
    }

    #[test]
    fn standard_translations_untouched() {
        let t = table(
            &["table_name", "field_name", "language", "translation", "record_id"],
            &[&["stops", "stop_name", "nl", "Brussel-Zuid", "S1"]],
        );
        assert_eq!(t, LegacyTranslations.apply(t.clone()));
    }

    #[test]
    fn closures() {
        let upper = |mut t: Table| {
            for row in &mut t.rows {
                row.values = row.values.iter().map(|v| v.to_uppercase()).collect();
            }
            t
        };
        let t = upper.apply(table(&["stop_id"], &[&["s1"]]));
        assert_eq!(vec!["S1"], t.rows[0].values);
    }
}
