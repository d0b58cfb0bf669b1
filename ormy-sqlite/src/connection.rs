use crate::extract::extract_value;
use ormy_core::{Context, Error, Executor, Result, Row, RowNames, RowsCursor, truncate_long};
use rusqlite::{Connection, OpenFlags};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::spawn_blocking;

/// Sqlite executor. Statements run on the blocking thread pool, one at a time.
#[derive(Debug, Clone)]
pub struct SqliteConnection {
    connection: Arc<Mutex<Connection>>,
}

fn logged<T>(result: Result<T>) -> Result<T> {
    result.inspect_err(|e| log::error!("{:#}", e))
}

impl SqliteConnection {
    pub const NAME: &'static str = "sqlite";

    /// Opens `sqlite://<path>[?mode=ro|rw|rwc|memory]` or `sqlite://:memory:`.
    pub async fn connect(url: &str) -> Result<Self> {
        let prefix = format!("{}://", Self::NAME);
        let Some(path) = url.strip_prefix(&prefix) else {
            let error = Error::msg(format!(
                "Expected sqlite connection url to start with `{}`",
                &prefix
            ));
            log::error!("{}", error);
            return Err(error);
        };
        let path = path.to_owned();
        let context = format!("While opening the sqlite database `{}`", url);
        let connection = spawn_blocking(move || {
            if path == ":memory:" {
                Connection::open_in_memory()
            } else {
                Connection::open_with_flags(
                    format!("file:{path}"),
                    OpenFlags::SQLITE_OPEN_URI
                        | OpenFlags::SQLITE_OPEN_READ_WRITE
                        | OpenFlags::SQLITE_OPEN_CREATE,
                )
            }
        })
        .await
        .context("The sqlite worker task failed")?
        .context(context)
        .map_err(Error::from);
        Ok(Self {
            connection: Arc::new(Mutex::new(logged(connection)?)),
        })
    }

    /// Runs one or more `;` separated statements without reading any row.
    pub async fn execute_batch(&self, sql: impl Into<String>) -> Result<()> {
        let connection = self.connection.clone();
        let sql = sql.into();
        let result = spawn_blocking(move || {
            connection
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .execute_batch(&sql)
                .with_context(|| format!("While executing the batch:\n{}", truncate_long!(sql)))
                .map_err(Error::from)
        })
        .await
        .context("The sqlite worker task failed")?;
        logged(result)
    }
}

impl Executor for SqliteConnection {
    type Cursor = RowsCursor;

    async fn execute(&self, statement: String) -> Result<RowsCursor> {
        let connection = self.connection.clone();
        let result = spawn_blocking(move || -> Result<RowsCursor> {
            let connection = connection.lock().unwrap_or_else(PoisonError::into_inner);
            let context = || format!("While executing the query:\n{}", truncate_long!(statement));
            let mut prepared = connection.prepare(&statement).with_context(context)?;
            let labels = prepared
                .column_names()
                .into_iter()
                .map(String::from)
                .collect::<RowNames>();
            let mut rows = prepared.query([]).with_context(context)?;
            let mut collected = Vec::new();
            while let Some(row) = rows.next().with_context(context)? {
                let values = (0..labels.len())
                    .map(|i| {
                        row.get_ref(i)
                            .with_context(context)
                            .map_err(Error::from)
                            .and_then(extract_value)
                    })
                    .collect::<Result<Row>>()?;
                collected.push(values);
            }
            Ok(RowsCursor::new(labels, collected))
        })
        .await
        .context("The sqlite worker task failed")?;
        logged(result)
    }
}
