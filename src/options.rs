//! Formatting options and their validation.

use serde::Deserialize;

use crate::dialects;
use crate::error::{Result, SqlPrettyError};
use crate::params::QueryParams;

/// Letter-casing policy for a token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    Preserve,
    Upper,
    Lower,
}

impl LetterCase {
    /// Apply the policy to an already-canonicalized value.
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Preserve => value.to_string(),
            Self::Upper => value.to_uppercase(),
            Self::Lower => value.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndentStyle {
    Standard,
    TabularLeft,
    TabularRight,
}

impl IndentStyle {
    pub fn is_tabular(self) -> bool {
        matches!(self, Self::TabularLeft | Self::TabularRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperatorNewline {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommaPosition {
    After,
    Before,
    Tabular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasAs {
    Preserve,
    Always,
    Never,
}

/// Policy for breaking clause lists across lines: a named mode or a maximum
/// item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultilineLists {
    Always,
    Avoid,
    ExpressionWidth,
    ItemCount(usize),
}

impl<'de> Deserialize<'de> for MultilineLists {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = MultilineLists;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("\"always\", \"avoid\", \"expressionWidth\", or a positive integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<MultilineLists, E> {
                match v {
                    "always" => Ok(MultilineLists::Always),
                    "avoid" => Ok(MultilineLists::Avoid),
                    "expressionWidth" => Ok(MultilineLists::ExpressionWidth),
                    _ => Err(E::invalid_value(serde::de::Unexpected::Str(v), &self)),
                }
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<MultilineLists, E> {
                if v == 0 {
                    return Err(E::invalid_value(serde::de::Unexpected::Unsigned(v), &self));
                }
                Ok(MultilineLists::ItemCount(v as usize))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<MultilineLists, E> {
                if v <= 0 {
                    return Err(E::invalid_value(serde::de::Unexpected::Signed(v), &self));
                }
                Ok(MultilineLists::ItemCount(v as usize))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// All formatting configuration. Field defaults follow the documented
/// defaults; `Default::default()` and the serde defaults agree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    #[serde(default)]
    pub use_tabs: bool,

    #[serde(default = "default_upper")]
    pub keyword_case: LetterCase,

    #[serde(default = "default_preserve")]
    pub identifier_case: LetterCase,

    #[serde(default = "default_upper")]
    pub function_case: LetterCase,

    #[serde(default = "default_upper")]
    pub data_type_case: LetterCase,

    #[serde(default = "default_indent_style")]
    pub indent_style: IndentStyle,

    #[serde(default = "default_logical_operator_newline")]
    pub logical_operator_newline: LogicalOperatorNewline,

    #[serde(default = "default_expression_width")]
    pub expression_width: usize,

    #[serde(default = "default_lines_between_queries")]
    pub lines_between_queries: usize,

    #[serde(default)]
    pub dense_operators: bool,

    #[serde(default)]
    pub newline_before_semicolon: bool,

    #[serde(default)]
    pub newline_before_open_paren: bool,

    #[serde(default = "default_true")]
    pub newline_before_close_paren: bool,

    #[serde(default)]
    pub tabulate_alias: bool,

    #[serde(default = "default_comma_position")]
    pub comma_position: CommaPosition,

    #[serde(default = "default_multiline_lists")]
    pub multiline_lists: MultilineLists,

    #[serde(default = "default_alias_as")]
    pub alias_as: AliasAs,

    #[serde(skip)]
    pub params: QueryParams,
}

fn default_language() -> String {
    "sql".to_string()
}
fn default_tab_width() -> usize {
    2
}
fn default_upper() -> LetterCase {
    LetterCase::Upper
}
fn default_preserve() -> LetterCase {
    LetterCase::Preserve
}
fn default_indent_style() -> IndentStyle {
    IndentStyle::Standard
}
fn default_logical_operator_newline() -> LogicalOperatorNewline {
    LogicalOperatorNewline::Before
}
fn default_expression_width() -> usize {
    50
}
fn default_true() -> bool {
    true
}
fn default_lines_between_queries() -> usize {
    1
}
fn default_comma_position() -> CommaPosition {
    CommaPosition::After
}
fn default_multiline_lists() -> MultilineLists {
    MultilineLists::Always
}
fn default_alias_as() -> AliasAs {
    AliasAs::Preserve
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            language: default_language(),
            tab_width: default_tab_width(),
            use_tabs: false,
            keyword_case: default_upper(),
            identifier_case: default_preserve(),
            function_case: default_upper(),
            data_type_case: default_upper(),
            indent_style: default_indent_style(),
            logical_operator_newline: default_logical_operator_newline(),
            expression_width: default_expression_width(),
            lines_between_queries: default_lines_between_queries(),
            dense_operators: false,
            newline_before_semicolon: false,
            newline_before_open_paren: false,
            newline_before_close_paren: true,
            tabulate_alias: false,
            comma_position: default_comma_position(),
            multiline_lists: default_multiline_lists(),
            alias_as: default_alias_as(),
            params: QueryParams::None,
        }
    }
}

impl FormatOptions {
    /// Validate ranges and the dialect tag. Unknown option names are rejected
    /// at deserialization time (`deny_unknown_fields`); negative numerics are
    /// rejected by the unsigned field types.
    pub fn validate(&self) -> Result<()> {
        self.validate_style()?;
        dialects::dialect_from_name(&self.language)?;
        Ok(())
    }

    /// Range validation only, for callers that supply a dialect definition
    /// directly and bypass the `language` tag.
    pub fn validate_style(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(SqlPrettyError::Config(
                "tabWidth must be a positive integer".to_string(),
            ));
        }
        if let MultilineLists::ItemCount(0) = self.multiline_lists {
            return Err(SqlPrettyError::Config(
                "multilineLists item count must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// One indentation step. Tabular styles pin the step at ten spaces so the
    /// operand column starts past the padded command.
    pub fn indent_step(&self) -> String {
        if self.indent_style.is_tabular() {
            " ".repeat(10)
        } else if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}
