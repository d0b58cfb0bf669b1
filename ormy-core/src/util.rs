/// Formats a statement for logs, cutting it around 500 bytes.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {{
        let query: &str = &$query;
        let end = (0..=::std::cmp::min(query.len(), 497))
            .rev()
            .find(|i| query.is_char_boundary(*i))
            .unwrap_or(0);
        format!(
            "{}{}",
            query[..end].trim_end(),
            if end < query.len() { "..." } else { "" },
        )
    }};
}

/// Builds the positional parameter list of [`Ormy::select`](crate::Ormy::select).
///
/// ```rust
/// use ormy_core::{Value, params};
/// let params = params![2, "Two", 2.02, true];
/// assert_eq!(params[1], Value::Varchar(Some("Two".into())));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
