use crate::{Error, Placeholder, Result, TypeBinder, Value, placeholder::substitute, placeholders};
use std::{collections::HashMap, ops::Range};

/// Substitutes parameter literals into statement templates.
///
/// Parameters are processed in order and the first failure wins: a parameter
/// whose placeholder is missing yields [`Error::UnresolvedPlaceholder`], a
/// parameter whose kind has no renderer yields [`Error::UnsupportedType`].
/// Once every parameter is bound, any leftover placeholder of the same form
/// yields [`Error::UnboundPlaceholderRemaining`].
#[derive(Debug, Clone, Copy)]
pub struct ParameterBinder<'b> {
    binder: &'b TypeBinder,
}

impl<'b> ParameterBinder<'b> {
    pub fn new(binder: &'b TypeBinder) -> Self {
        Self { binder }
    }

    /// Binds `$1`, `$2`, ... to `params[0]`, `params[1]`, ...
    pub fn bind_ordinal(&self, statement: &str, params: &[Value]) -> Result<String> {
        let found = ordinals(statement);
        let mut literals = Vec::with_capacity(params.len());
        for (i, value) in params.iter().enumerate() {
            let placeholder = Placeholder::Ordinal(i + 1);
            if !found.iter().any(|(_, p)| *p == placeholder) {
                return Err(Error::UnresolvedPlaceholder(placeholder));
            }
            literals.push(self.binder.render(value)?);
        }
        let literal = |placeholder: &Placeholder| match placeholder {
            Placeholder::Ordinal(ordinal) if *ordinal >= 1 => literals.get(ordinal - 1),
            _ => None,
        };
        if let Some((_, unbound)) = found.iter().find(|(_, p)| literal(p).is_none()) {
            return Err(Error::UnboundPlaceholderRemaining(unbound.clone()));
        }
        Ok(substitute(statement, &found, |p| {
            literal(p).map(String::as_str)
        }))
    }

    /// Binds every `:name` to the parameter with the same name. Names may be
    /// given with or without the leading colon; a later duplicate wins.
    pub fn bind_named<N>(&self, statement: &str, params: &[(N, Value)]) -> Result<String>
    where
        N: AsRef<str>,
    {
        let found = named(statement);
        let mut literals = HashMap::with_capacity(params.len());
        for (name, value) in params {
            let name = name.as_ref().trim_start_matches(':');
            let placeholder = Placeholder::Named(name.to_owned());
            if !found.iter().any(|(_, p)| *p == placeholder) {
                return Err(Error::UnresolvedPlaceholder(placeholder));
            }
            literals.insert(name, self.binder.render(value)?);
        }
        let literal = |placeholder: &Placeholder| match placeholder {
            Placeholder::Named(name) => literals.get(name.as_str()),
            _ => None,
        };
        if let Some((_, unbound)) = found.iter().find(|(_, p)| literal(p).is_none()) {
            return Err(Error::UnboundPlaceholderRemaining(unbound.clone()));
        }
        Ok(substitute(statement, &found, |p| {
            literal(p).map(String::as_str)
        }))
    }
}

fn ordinals(statement: &str) -> Vec<(Range<usize>, Placeholder)> {
    placeholders(statement)
        .filter(|(_, p)| p.is_ordinal())
        .collect()
}

fn named(statement: &str) -> Vec<(Range<usize>, Placeholder)> {
    placeholders(statement).filter(|(_, p)| p.is_named()).collect()
}
