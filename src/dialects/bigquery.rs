//! Google BigQuery (Standard SQL).

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS",
    "CREATE OR REPLACE TABLE",
    "EXPORT DATA",
    "MERGE INTO",
    "QUALIFY",
    "WINDOW",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "ANY_VALUE",
    "ASSERT_ROWS_MODIFIED",
    "AT",
    "CONTAINS",
    "ENUM",
    "ESCAPE",
    "EXCLUDE",
    "HASH",
    "IGNORE NULLS",
    "LOOKUP",
    "PIVOT",
    "PROTO",
    "RESPECT NULLS",
    "TABLESAMPLE",
    "UNPIVOT",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_CONCAT",
    "ARRAY_TO_STRING",
    "DATE_ADD",
    "DATE_DIFF",
    "DATE_TRUNC",
    "FORMAT_DATE",
    "FORMAT_TIMESTAMP",
    "GENERATE_ARRAY",
    "GENERATE_UUID",
    "PARSE_DATE",
    "REGEXP_CONTAINS",
    "REGEXP_EXTRACT",
    "REGEXP_REPLACE",
    "SAFE_CAST",
    "SAFE_DIVIDE",
    "STRING_AGG",
    "TIMESTAMP_ADD",
    "TIMESTAMP_DIFF",
    "TIMESTAMP_TRUNC",
    "UNNEST",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "ARRAY",
    "BIGNUMERIC",
    "BOOL",
    "BYTES",
    "FLOAT64",
    "GEOGRAPHY",
    "INT64",
    "STRING",
    "STRUCT",
];

pub fn dialect() -> Dialect {
    Dialect {
        name: "bigquery",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: ANSI_OPERATORS.to_vec(),
        string_styles: vec![
            StringStyle::SingleQuoted,
            StringStyle::DoubleQuoted,
            StringStyle::TripleQuoted,
            StringStyle::RawSingleQuoted,
            StringStyle::BitSingleQuoted,
        ],
        ident_styles: vec![IdentStyle::BacktickQuoted],
        placeholder_styles: vec![PlaceholderStyle::QuestionMark, PlaceholderStyle::NamedAt],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec!["#"],
        bracket_array_access: true,
    }
}
