#[cfg(test)]
mod tests {
    use ormy_core::{Error, Placeholder, Shape, ValueKind};
    use std::io;

    #[test]
    fn driver() {
        let error = Error::driver(io::Error::new(io::ErrorKind::BrokenPipe, "Socket closed"));
        assert!(matches!(error, Error::Driver(..)));
        assert!(!error.is_binding());
        assert_eq!(error.to_string(), "Socket closed");
        let Error::Driver(inner) = &error else {
            unreachable!();
        };
        let io = inner
            .downcast_ref::<io::Error>()
            .expect("The original error is kept");
        assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);

        let error = Error::msg("Connection refused");
        assert_eq!(error.to_string(), "Connection refused");
    }

    #[test]
    fn binding() {
        assert!(Error::UnsupportedType(ValueKind::Blob).is_binding());
        assert!(Error::UnresolvedPlaceholder(Placeholder::Named("id".into())).is_binding());
        assert!(Error::UnboundPlaceholderRemaining(Placeholder::Ordinal(2)).is_binding());
        assert!(
            !Error::ShapeMismatch {
                expected: Shape::Single,
                actual: Shape::Collection
            }
            .is_binding()
        );
        assert_eq!(
            Error::UnresolvedPlaceholder(Placeholder::Named("id".into())).to_string(),
            "Could not resolve named parameter :id"
        );
    }
}
