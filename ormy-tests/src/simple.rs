use indoc::indoc;
use ormy::{Executor, Ormy, Record, params};
use std::sync::LazyLock;
use tokio::sync::Mutex;

#[derive(Record, Default, Debug, PartialEq)]
struct Thing {
    col: i64,
    two: String,
}

static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub async fn simple<E: Executor>(ormy: &Ormy<E>) {
    let _lock = MUTEX.lock().await;

    // Setup
    ormy.select("DROP TABLE IF EXISTS simple_tmp", params![])
        .execute()
        .await
        .expect("Failed to drop simple_tmp");
    ormy.select("CREATE TABLE simple_tmp (col INTEGER)", params![])
        .execute()
        .await
        .expect("Failed to create simple_tmp");
    ormy.select("INSERT INTO simple_tmp (col) VALUES ($1)", params![1])
        .execute()
        .await
        .expect("Failed to insert into simple_tmp");

    // One record
    let mut thing = Thing::default();
    let rows = ormy
        .select("SELECT col, $1 two FROM simple_tmp", params!["Two"])
        .one(&mut thing)
        .await
        .expect("Failed to fetch one thing");
    assert_eq!(rows, 1);
    assert_eq!(
        thing,
        Thing {
            col: 1,
            two: "Two".into()
        }
    );

    // Unmapped column
    let mut thing = Thing::default();
    ormy.select(
        indoc! {"
            SELECT col, $1 two, 3 three
            FROM simple_tmp
        "},
        params!["Two"],
    )
    .one(&mut thing)
    .await
    .expect("Failed to fetch a thing with an extra column");
    assert_eq!(thing.col, 1);
    assert_eq!(thing.two, "Two");

    // No rows leave the record untouched
    let mut thing = Thing {
        col: 99,
        two: "untouched".into(),
    };
    let rows = ormy
        .select("SELECT col, 'x' two FROM simple_tmp WHERE col > $1", params![100])
        .one(&mut thing)
        .await
        .expect("Failed to run the empty query");
    assert_eq!(rows, 0);
    assert_eq!(thing.col, 99);
    assert_eq!(thing.two, "untouched");

    // Collection
    ormy.select(
        "INSERT INTO simple_tmp (col) VALUES ($1), ($2)",
        params![2, 3],
    )
    .execute()
    .await
    .expect("Failed to insert more rows into simple_tmp");
    let mut things = Vec::<Thing>::new();
    let rows = ormy
        .select(
            "SELECT col, $1 two FROM simple_tmp ORDER BY col",
            params!["Two"],
        )
        .all(&mut things)
        .await
        .expect("Failed to fetch all things");
    assert_eq!(rows, 3);
    assert_eq!(things.iter().map(|t| t.col).collect::<Vec<_>>(), [1, 2, 3]);
    assert!(things.iter().all(|t| t.two == "Two"));

    // Single record over many rows ends on the last one
    let mut thing = Thing::default();
    let rows = ormy
        .select(
            "SELECT col, $1 two FROM simple_tmp ORDER BY col",
            params!["Two"],
        )
        .one(&mut thing)
        .await
        .expect("Failed to fetch the last thing");
    assert_eq!(rows, 3);
    assert_eq!(thing.col, 3);
}
