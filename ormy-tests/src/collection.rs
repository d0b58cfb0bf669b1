use ormy::{Error, Executor, Ormy, Record, Shape, params};
use std::collections::VecDeque;

#[derive(Record, Default, Debug, Clone, PartialEq)]
struct Item {
    id: i32,
    name: String,
}

pub async fn collection<E: Executor>(ormy: &Ormy<E>) {
    let builds = ormy.registry().field_maps().builds();

    let mut items = Vec::<Item>::new();
    let rows = ormy
        .select(
            "SELECT 1 id, $1 name UNION ALL SELECT 2, $2 UNION ALL SELECT 3, $3",
            params!["one", "two", "three"],
        )
        .all(&mut items)
        .await
        .expect("Failed to fetch the items");
    assert_eq!(rows, 3);
    assert_eq!(
        items,
        [
            Item { id: 1, name: "one".into() },
            Item { id: 2, name: "two".into() },
            Item { id: 3, name: "three".into() },
        ]
    );

    // Appends to what is already there
    let mut queue = VecDeque::from([Item { id: 0, name: "zero".into() }]);
    ormy.select("SELECT $1 id, 'four' name", params![4])
        .all(&mut queue)
        .await
        .expect("Failed to append the items");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[1].id, 4);

    // The field map of Item was built at most once
    assert!(ormy.registry().field_maps().builds() <= builds + 1);

    // Shapes
    let result = ormy.select("SELECT 1 id", params![]).one(&mut items).await;
    assert!(matches!(
        result,
        Err(Error::ShapeMismatch {
            expected: Shape::Single,
            actual: Shape::Collection
        })
    ));
    let mut item = Item::default();
    let result = ormy.select("SELECT 1 id", params![]).all(&mut item).await;
    assert!(matches!(
        result,
        Err(Error::ShapeMismatch {
            expected: Shape::Collection,
            actual: Shape::Single
        })
    ));
    assert_eq!(items.len(), 3);
}
