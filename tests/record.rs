#[cfg(test)]
mod tests {
    use ormy::{AsValue, FieldDef, FieldMap, Record, Target, Value};

    #[derive(Record, Default, Debug)]
    struct Customer {
        #[ormy(name = "customer_id")]
        id: u64,
        name: String,
        r#type: Option<String>,
    }

    #[derive(Record, Default)]
    struct Wrapper<T: AsValue + Default + Send + 'static> {
        value: T,
    }

    #[derive(Record, Default)]
    struct Empty {}

    #[test]
    fn fields() {
        assert_eq!(Customer::type_name(), "Customer");
        assert_eq!(
            Customer::fields(),
            [
                FieldDef {
                    name: "id",
                    column: "customer_id"
                },
                FieldDef {
                    name: "name",
                    column: "name"
                },
                FieldDef {
                    name: "type",
                    column: "type"
                },
            ]
        );
        assert_eq!(Wrapper::<i32>::fields().len(), 1);
        assert!(Empty::fields().is_empty());
    }

    #[test]
    fn targets() {
        let mut customer = Customer::default();
        {
            let mut targets = customer.targets();
            assert_eq!(targets.len(), 3);
            targets[0].assign(Value::Int64(Some(12))).unwrap();
            targets[1].assign("Mario".into()).unwrap();
            targets[2].assign(Value::Null).unwrap();
            assert!(targets[0].assign("x".into()).is_err());
        }
        assert_eq!(customer.id, 12);
        assert_eq!(customer.name, "Mario");
        assert_eq!(customer.r#type, None);

        let mut wrapper = Wrapper::<String>::default();
        wrapper.targets()[0].assign("wrapped".into()).unwrap();
        assert_eq!(wrapper.value, "wrapped");
        assert!(Empty::default().targets().is_empty());
    }

    #[test]
    fn field_map() {
        let map = FieldMap::build::<Customer>();
        assert_eq!(map.get("customer_id"), Some(0));
        assert_eq!(map.get("id"), None);
        assert_eq!(map.get("type"), Some(2));
    }

    #[test]
    fn manual_target() {
        #[derive(Default)]
        struct Upper(String);
        impl Target for Upper {
            fn assign(&mut self, value: Value) -> ormy::Result<()> {
                self.0 = String::try_from_value(value)?.to_uppercase();
                Ok(())
            }
        }
        let mut upper = Upper::default();
        upper.assign("shout".into()).unwrap();
        assert_eq!(upper.0, "SHOUT");
    }
}
