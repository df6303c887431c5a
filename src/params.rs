//! Placeholder substitution values.

use std::collections::HashMap;

use crate::error::{Result, SqlPrettyError};
use crate::token::Token;

/// Caller-supplied placeholder values: either a positional list or a keyed map
/// (keys may be names or 1-based numbers rendered as strings).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryParams {
    #[default]
    None,
    Indexed(Vec<String>),
    Named(HashMap<String, String>),
}

impl QueryParams {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Resolves placeholder tokens against a `QueryParams` table. Carries the
/// cursor for sequential `?` placeholders.
pub struct ParamResolver<'a> {
    params: &'a QueryParams,
    index: usize,
}

impl<'a> ParamResolver<'a> {
    pub fn new(params: &'a QueryParams) -> Self {
        Self { params, index: 0 }
    }

    /// Substitute one placeholder token. With no params supplied the
    /// placeholder text passes through unchanged; with params supplied an
    /// unresolved placeholder is an error.
    pub fn resolve(&mut self, token: &Token) -> Result<String> {
        let key = token.value.as_str();
        match self.params {
            QueryParams::None => Ok(token.text.clone()),
            QueryParams::Indexed(values) => {
                if key.is_empty() {
                    let value = values.get(self.index).ok_or_else(|| {
                        SqlPrettyError::Placeholder(format!(
                            "No value supplied for placeholder {} (position {})",
                            token.text,
                            self.index + 1
                        ))
                    })?;
                    self.index += 1;
                    Ok(value.clone())
                } else {
                    let number: usize = key.parse().map_err(|_| {
                        SqlPrettyError::Placeholder(format!(
                            "Named placeholder {} cannot be resolved from a positional list",
                            token.text
                        ))
                    })?;
                    let value = number
                        .checked_sub(1)
                        .and_then(|i| values.get(i))
                        .ok_or_else(|| {
                            SqlPrettyError::Placeholder(format!(
                                "No value supplied for placeholder {}",
                                token.text
                            ))
                        })?;
                    Ok(value.clone())
                }
            }
            QueryParams::Named(map) => map.get(key).cloned().ok_or_else(|| {
                SqlPrettyError::Placeholder(format!(
                    "No value supplied for placeholder {}",
                    token.text
                ))
            }),
        }
    }
}
