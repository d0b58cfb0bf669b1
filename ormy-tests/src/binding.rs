use ormy::{Error, Executor, Ormy, Record, Value, ValueKind, params};

#[derive(Record, Default, Debug)]
struct Formats {
    amount: i64,
    ratio: f64,
    label: String,
    flag: bool,
    missing: Option<i64>,
}

pub async fn binding<E: Executor>(ormy: &Ormy<E>) {
    // Literal formats
    let fetch = ormy.select(
        "SELECT $1 amount, $2 ratio, $3 label, $4 flag, $5 missing",
        params![2, 2.02, "Two", true, None::<i32>],
    );
    assert_eq!(
        fetch.statement().expect("Binding should succeed"),
        "SELECT 2 amount, 2.020000 ratio, 'Two' label, true flag, NULL missing"
    );
    let mut formats = Formats::default();
    fetch
        .one(&mut formats)
        .await
        .expect("Failed to fetch the formats");
    assert_eq!(formats.amount, 2);
    assert!((formats.ratio - 2.02).abs() < 1e-9);
    assert_eq!(formats.label, "Two");
    assert!(formats.flag);
    assert_eq!(formats.missing, None);

    // Placeholders are whole tokens
    let mut values = Vec::new();
    for i in 1..=10 {
        values.push(Value::from(i * 100));
    }
    let statement = ormy
        .select(
            "SELECT $1 a, $2 b, $3 c, $4 d, $5 e, $6 f, $7 g, $8 h, $9 i, $10 j",
            values,
        )
        .into_statement()
        .expect("Binding ten parameters should succeed");
    assert_eq!(
        statement,
        "SELECT 100 a, 200 b, 300 c, 400 d, 500 e, 600 f, 700 g, 800 h, 900 i, 1000 j"
    );

    // Binding errors surface when the fetch runs
    let mut formats = Formats::default();
    let result = ormy
        .select("SELECT 1 amount", params![1])
        .one(&mut formats)
        .await;
    assert!(
        matches!(result, Err(Error::UnresolvedPlaceholder(..))),
        "Expected an unresolved placeholder, got {result:?}"
    );
    let result = ormy
        .select("SELECT $1 amount, $2 ratio", params![1])
        .one(&mut formats)
        .await;
    assert!(matches!(result, Err(Error::UnboundPlaceholderRemaining(..))));
    let result = ormy
        .select("SELECT $1 amount", params![vec![1u8, 2, 3]])
        .one(&mut formats)
        .await;
    assert!(matches!(
        result,
        Err(Error::UnsupportedType(ValueKind::Blob))
    ));
    assert_eq!(formats.amount, 0, "Failed queries must not touch the record");

    // Conversion failures come from the driver rows
    let result = ormy
        .select("SELECT $1 amount", params!["not a number"])
        .one(&mut formats)
        .await;
    assert!(matches!(result, Err(Error::Conversion(..))));
}
