use crate::Target;

/// Name of a record field and the result column it is populated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub column: &'static str,
}

/// A struct rows can be materialized into, usually implemented by `#[derive(Record)]`.
///
/// `fields` and `targets` must agree: the target at index `i` is the field
/// described by `fields()[i]`.
pub trait Record: Default + Send + 'static {
    /// Declared name of the type, used in diagnostics.
    fn type_name() -> &'static str;
    /// Fields in declaration order.
    fn fields() -> &'static [FieldDef];
    /// One writable target per field, in declaration order.
    fn targets(&mut self) -> Vec<&mut dyn Target>;
}
