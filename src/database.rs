use anyhow::{Context, Result};
use gtfs_records::*;
use log::info;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};

/// Tables written by [DatabaseConnection::add_gtfs], one per object type
pub const TABLES: [&str; 16] = [
    "agencies",
    "stops",
    "routes",
    "trips",
    "stop_times",
    "services",
    "service_exceptions",
    "fare_attributes",
    "fare_rules",
    "shapes",
    "frequencies",
    "transfers",
    "pathways",
    "levels",
    "feed_infos",
    "translations",
];

pub struct DatabaseConnection {
    conn: Connection,
}

impl DatabaseConnection {
    pub fn open(path: &str) -> Result<DatabaseConnection> {
        let conn = Connection::open(path).with_context(|| format!("Connect to db {}", path))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<DatabaseConnection> {
        let conn = Connection::open_in_memory().context("Connect to in-memory db")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<DatabaseConnection> {
        let db = DatabaseConnection { conn };
        db.create_tables()?;
        Ok(db)
    }

    /// Drops every table and creates them empty
    pub fn reset(&self) -> Result<()> {
        for table in TABLES {
            self.conn
                .execute(&format!("DROP TABLE IF EXISTS \"{}\"", table), [])
                .with_context(|| format!("Drop table {}", table))?;
        }
        self.create_tables()
    }

    fn create_tables(&self) -> Result<()> {
        create_table::<Agency>(&self.conn, "agencies")?;
        create_table::<Stop>(&self.conn, "stops")?;
        create_table::<Route>(&self.conn, "routes")?;
        create_table::<Trip>(&self.conn, "trips")?;
        create_table::<StopTime>(&self.conn, "stop_times")?;
        create_table::<Service>(&self.conn, "services")?;
        create_table::<ServiceException>(&self.conn, "service_exceptions")?;
        create_table::<FareAttribute>(&self.conn, "fare_attributes")?;
        create_table::<FareRule>(&self.conn, "fare_rules")?;
        create_table::<Shape>(&self.conn, "shapes")?;
        create_table::<Frequency>(&self.conn, "frequencies")?;
        create_table::<Transfer>(&self.conn, "transfers")?;
        create_table::<Pathway>(&self.conn, "pathways")?;
        create_table::<Level>(&self.conn, "levels")?;
        create_table::<FeedInfo>(&self.conn, "feed_infos")?;
        create_table::<Translation>(&self.conn, "translations")?;
        Ok(())
    }

    /// Writes all the objects of the feed in a single transaction
    pub fn add_gtfs(&mut self, gtfs: &Gtfs) -> Result<()> {
        let tx = self.conn.transaction()?;
        insert_all(&tx, "agencies", &gtfs.agencies)?;
        insert_all(&tx, "stops", &gtfs.stops)?;
        insert_all(&tx, "routes", &gtfs.routes)?;
        insert_all(&tx, "trips", &gtfs.trips)?;
        insert_all(&tx, "stop_times", &gtfs.stop_times)?;
        insert_all(&tx, "services", &gtfs.services)?;
        insert_all(&tx, "service_exceptions", &gtfs.service_exceptions)?;
        insert_all(&tx, "fare_attributes", &gtfs.fare_attributes)?;
        insert_all(&tx, "fare_rules", &gtfs.fare_rules)?;
        insert_all(&tx, "shapes", &gtfs.shapes)?;
        insert_all(&tx, "frequencies", &gtfs.frequencies)?;
        insert_all(&tx, "transfers", &gtfs.transfers)?;
        insert_all(&tx, "pathways", &gtfs.pathways)?;
        insert_all(&tx, "levels", &gtfs.levels)?;
        let feed_infos = gtfs.feed_info.as_ref().map(std::slice::from_ref);
        insert_all(&tx, "feed_infos", feed_infos.unwrap_or_default())?;
        insert_all(&tx, "translations", &gtfs.translations)?;
        tx.commit().context("Commit the feed")?;
        Ok(())
    }

    pub fn count(&self, table: &str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
                row.get(0)
            })
            .with_context(|| format!("Count rows of {}", table))?;
        Ok(count)
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn sql_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "TEXT",
        FieldKind::Integer => "INTEGER",
        FieldKind::Float => "REAL",
    }
}

fn sql_value(value: Option<Value>) -> SqlValue {
    match value {
        None => SqlValue::Null,
        Some(Value::Text(s)) => SqlValue::Text(s),
        Some(Value::Integer(i)) => SqlValue::Integer(i),
        Some(Value::Float(f)) => SqlValue::Real(f),
    }
}

fn create_table<T: Record>(conn: &Connection, table: &str) -> Result<()> {
    let columns: Vec<String> = T::FIELDS
        .iter()
        .map(|f| format!("\"{}\" {}", f.name, sql_type(&f.kind)))
        .collect();
    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" ({})",
            table,
            columns.join(", ")
        ),
        [],
    )
    .with_context(|| format!("Create table {}", table))?;
    Ok(())
}

fn insert_all<T: Record>(conn: &Connection, table: &str, objs: &[T]) -> Result<()> {
    let names: Vec<String> = column_names::<T>().map(|n| format!("\"{}\"", n)).collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{}", i)).collect();
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table,
        names.join(", "),
        placeholders.join(", ")
    ))?;
    for obj in objs {
        let values = obj.to_row().into_iter().map(|(_, v)| sql_value(v));
        stmt.execute(params_from_iter(values))
            .with_context(|| format!("Insert into {}", table))?;
    }
    info!("{} rows written in {}", objs.len(), table);
    Ok(())
}
