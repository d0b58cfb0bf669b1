use ormy::{Error, Executor, Ormy, Record};

#[derive(Record, Default, Debug)]
struct Person {
    #[ormy(name = "person_id")]
    id: i64,
    name: String,
    nickname: Option<String>,
}

pub async fn named<E: Executor>(ormy: &Ormy<E>) {
    let mut person = Person::default();
    ormy.query("SELECT :id person_id, :name name, :nickname nickname")
        .param("id", 7)
        .param(":name", "Seven")
        .param("nickname", None::<String>)
        .one(&mut person)
        .await
        .expect("Failed to fetch the person");
    assert_eq!(person.id, 7);
    assert_eq!(person.name, "Seven");
    assert_eq!(person.nickname, None);

    // Repeated placeholders take the same value
    let statement = ormy
        .query("SELECT :id person_id, :id + 1 next_id, :identity identity")
        .param("id", 1)
        .param("identity", 10)
        .bind()
        .into_statement()
        .expect("Binding should succeed");
    assert_eq!(
        statement,
        "SELECT 1 person_id, 1 + 1 next_id, 10 identity"
    );

    // The later value of a name wins
    let mut person = Person::default();
    ormy.query("SELECT :id person_id, 'Again' name")
        .param("id", 1)
        .param("id", 2)
        .one(&mut person)
        .await
        .expect("Failed to fetch the person again");
    assert_eq!(person.id, 2);

    let result = ormy
        .query("SELECT :id person_id")
        .param("other", 1)
        .execute()
        .await;
    assert!(matches!(result, Err(Error::UnresolvedPlaceholder(..))));
    let result = ormy
        .query("SELECT :id person_id, :name name")
        .param("id", 1)
        .execute()
        .await;
    assert!(matches!(result, Err(Error::UnboundPlaceholderRemaining(..))));
}
