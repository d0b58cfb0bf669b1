use futures::future::join_all;
use ormy::{Executor, Ormy, Record, params};

#[derive(Record, Default, Debug)]
struct Counter {
    value: i64,
    label: String,
}

pub async fn concurrency<E: Executor>(ormy: &Ormy<E>) {
    let fetches = (0..32i64).map(|i| async move {
        let mut counter = Counter::default();
        ormy.select("SELECT $1 value, $2 label", params![i, format!("n{i}")])
            .one(&mut counter)
            .await
            .expect("Failed to fetch the counter");
        counter
    });
    let counters = join_all(fetches).await;
    for (i, counter) in counters.iter().enumerate() {
        assert_eq!(counter.value, i as i64);
        assert_eq!(counter.label, format!("n{i}"));
    }
    assert!(ormy.registry().field_maps().len() >= 1);
}
