#[cfg(test)]
mod tests {
    use ormy::{Ormy, Registry, TypeBinder, params};
    use ormy_sqlite::SqliteConnection;
    use ormy_tests::{execute_tests, init_logs};
    use std::path::Path;
    use std::sync::Mutex;
    use tokio::fs;

    static MUTEX: Mutex<()> = Mutex::new(());

    #[tokio::test]
    async fn sqlite_memory() {
        init_logs();
        let connection = SqliteConnection::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        execute_tests(&Ormy::new(connection)).await;
    }

    #[tokio::test]
    async fn sqlite_file() {
        init_logs();
        const DB_PATH: &'static str = "../target/debug/tests.sqlite";
        let _guard = MUTEX.lock().unwrap();
        if Path::new(DB_PATH).exists() {
            fs::remove_file(DB_PATH).await.expect(
                format!("Failed to remove existing test database file {}", DB_PATH).as_str(),
            );
        }
        let connection = SqliteConnection::connect(&format!("sqlite://{}?mode=rwc", DB_PATH))
            .await
            .expect("Could not open the database");
        assert!(
            Path::new(DB_PATH).exists(),
            "Database file should be created after connection"
        );
        execute_tests(&Ormy::new(connection)).await;
    }

    #[tokio::test]
    async fn escaped_strings() {
        init_logs();
        let connection = SqliteConnection::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        let ormy = Ormy::with_registry(
            connection,
            Registry::with_binder(TypeBinder::with_escaped_strings()).shared(),
        );
        let mut name = Vec::<Name>::new();
        ormy.select("SELECT $1 name", params!["O'Brien"])
            .all(&mut name)
            .await
            .expect("Quotes should be escaped");
        assert_eq!(name[0].name, "O'Brien");

        // The plain renderer leaves the quote in place and the statement breaks
        let plain = Ormy::new(ormy.into_executor());
        let result = plain
            .select("SELECT $1 name", params!["O'Brien"])
            .all(&mut name)
            .await;
        assert!(result.is_err());
    }

    #[derive(ormy::Record, Default, Debug)]
    struct Name {
        name: String,
    }
}
