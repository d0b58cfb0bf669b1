#[cfg(test)]
mod tests {
    use ormy_core::{AsValue, Error, Value, ValueKind};
    use std::borrow::Cow;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::default(), Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int16(None).is_null());
        assert!(!Value::Varchar(Some("".into())).is_null());
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        assert_eq!(bool::try_from_value(val).unwrap(), true);
        assert_eq!(bool::try_from_value((1 as i8).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((0 as i64).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((2 as u128).into()).unwrap(), true);
        assert!(matches!(
            bool::try_from_value((0.5 as f32).into()),
            Err(Error::Conversion(..))
        ));
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(7i8), Value::Int8(Some(7)));
        assert_eq!(Value::from(7u64), Value::UInt64(Some(7)));
        assert_eq!(i64::try_from_value(Value::Int8(Some(-3))).unwrap(), -3);
        assert_eq!(u16::try_from_value(Value::Int64(Some(65535))).unwrap(), 65535);
        assert_eq!(i32::try_from_value(Value::Boolean(Some(true))).unwrap(), 1);
        assert!(matches!(
            u8::try_from_value(Value::Int64(Some(256))),
            Err(Error::Conversion(..))
        ));
        assert!(matches!(
            u32::try_from_value(Value::Int32(Some(-1))),
            Err(Error::Conversion(..))
        ));
        assert!(i64::try_from_value(Value::Varchar(Some("1".into()))).is_err());
        assert!(i64::try_from_value(Value::Null).is_err());
    }

    #[test]
    fn value_floats() {
        assert_eq!(Value::from(2.5f32), Value::Float32(Some(2.5)));
        assert_eq!(f64::try_from_value(Value::Float32(Some(2.5))).unwrap(), 2.5);
        assert_eq!(f64::try_from_value(Value::Int64(Some(3))).unwrap(), 3.0);
        assert_eq!(f32::try_from_value(Value::UInt8(Some(4))).unwrap(), 4.0);
        assert!(f64::try_from_value(Value::Boolean(Some(true))).is_err());
    }

    #[test]
    fn value_floats_range() {
        assert!(matches!(
            f32::try_from_value(Value::Float64(Some(1e300))),
            Err(Error::Conversion(..))
        ));
        assert_eq!(f32::try_from_value(Value::Float64(Some(0.5))).unwrap(), 0.5);
        assert_eq!(
            f32::try_from_value(Value::Float64(Some(f64::INFINITY))).unwrap(),
            f32::INFINITY
        );
        assert!(f32::try_from_value(Value::Float64(Some(f64::NAN))).unwrap().is_nan());

        assert_eq!(
            f64::try_from_value(Value::Int64(Some(9007199254740992))).unwrap(),
            9007199254740992.0
        );
        assert!(matches!(
            f64::try_from_value(Value::Int64(Some(9007199254740993))),
            Err(Error::Conversion(..))
        ));
        assert!(f64::try_from_value(Value::Int64(Some(i64::MAX))).is_err());
        assert_eq!(
            f64::try_from_value(Value::Int64(Some(i64::MIN))).unwrap(),
            -9223372036854775808.0
        );
        assert!(f64::try_from_value(Value::UInt64(Some(u64::MAX))).is_err());
        assert!(f32::try_from_value(Value::Int32(Some(16777217))).is_err());
        assert_eq!(f32::try_from_value(Value::Int32(Some(16777216))).unwrap(), 16777216.0);

        assert_eq!(f64::try_from_value(Value::Int128(Some(1))).unwrap(), 1.0);
        assert_eq!(f32::try_from_value(Value::UInt128(Some(7))).unwrap(), 7.0);
        assert_eq!(
            f64::try_from_value(Value::Int128(Some(i128::MIN))).unwrap(),
            -170141183460469231731687303715884105728.0
        );
        assert!(f64::try_from_value(Value::Int128(Some(i128::MAX))).is_err());
        assert!(f32::try_from_value(Value::UInt128(Some(u128::MAX))).is_err());
        assert!(f64::try_from_value(Value::UInt128(Some(u128::MAX))).is_err());
    }

    #[test]
    fn value_strings() {
        assert_eq!(Value::from("Two"), Value::Varchar(Some("Two".into())));
        assert_eq!(
            Value::from(String::from("Two")),
            Value::Varchar(Some("Two".into()))
        );
        let cow: Cow<'static, str> = Cow::Borrowed("borrowed");
        assert_eq!(cow.as_value(), Value::Varchar(Some("borrowed".into())));
        assert_eq!(
            String::try_from_value(Value::Varchar(Some("x".into()))).unwrap(),
            "x"
        );
        assert!(String::try_from_value(Value::Int32(Some(1))).is_err());
    }

    #[test]
    fn value_blob_and_wrappers() {
        assert_eq!(
            Value::from(vec![1u8, 2]),
            Value::Blob(Some(vec![1u8, 2].into_boxed_slice()))
        );
        assert_eq!(
            Vec::<u8>::try_from_value(Value::Blob(Some(vec![3u8].into_boxed_slice()))).unwrap(),
            [3]
        );
        assert_eq!(Option::<i32>::None.as_value(), Value::Int32(None));
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int64(Some(5))).unwrap(),
            Some(5)
        );
        assert_eq!(Option::<String>::as_empty_value(), Value::Varchar(None));
        assert_eq!(*Box::<u8>::try_from_value(Value::Int8(Some(9))).unwrap(), 9);
    }

    #[test]
    fn value_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Int128(None).kind(), ValueKind::Int128);
        assert_eq!(Value::Varchar(None).kind().to_string(), "string");
        assert_eq!(ValueKind::Float64.as_str(), "f64");
        assert!(Value::Int8(Some(1)).same_kind(&Value::Int8(None)));
        assert!(!Value::Int8(Some(1)).same_kind(&Value::Int16(Some(1))));
        assert!(ValueKind::INTEGERS.contains(&ValueKind::UInt128));
        assert!(!ValueKind::INTEGERS.contains(&ValueKind::Float32));
    }
}
