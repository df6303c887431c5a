//! Couchbase N1QL.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "LET",
    "LETTING",
    "MERGE INTO",
    "NEST",
    "UNNEST",
    "UPSERT INTO",
    "USE KEYS",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "ANY",
    "EVERY",
    "MISSING",
    "SATISFIES",
    "VALUED",
    "WITHIN",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_APPEND",
    "ARRAY_CONCAT",
    "ARRAY_CONTAINS",
    "ARRAY_LENGTH",
    "IFMISSING",
    "IFMISSINGORNULL",
    "IFNULL",
    "META",
    "OBJECT_NAMES",
    "OBJECT_VALUES",
    "TO_ARRAY",
    "TO_NUMBER",
    "TO_STRING",
    "UUID",
];

const EXTRA_OPERATORS: &[&str] = &["=="];

pub fn dialect() -> Dialect {
    Dialect {
        name: "n1ql",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: ANSI_DATA_TYPES.to_vec(),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::DoubleQuoted],
        ident_styles: vec![IdentStyle::BacktickQuoted],
        placeholder_styles: vec![
            PlaceholderStyle::QuestionMark,
            PlaceholderStyle::NumberedDollar,
            PlaceholderStyle::NamedDollar,
        ],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec!["#"],
        bracket_array_access: true,
    }
}
