//! Snowflake.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "COPY INTO",
    "CREATE OR REPLACE TABLE",
    "CREATE STAGE",
    "CREATE STREAM",
    "CREATE TASK",
    "CREATE WAREHOUSE",
    "MERGE INTO",
    "PIVOT",
    "QUALIFY",
    "REMOVE",
    "UNPIVOT",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "AT",
    "BEFORE",
    "CHANGES",
    "CLONE",
    "FLATTEN",
    "ILIKE",
    "LATERAL",
    "MATCH_RECOGNIZE",
    "SAMPLE",
    "TABLESAMPLE",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_CONSTRUCT",
    "ARRAY_SIZE",
    "DATEADD",
    "DATEDIFF",
    "DATE_TRUNC",
    "GET_PATH",
    "IFF",
    "LISTAGG",
    "NVL",
    "OBJECT_CONSTRUCT",
    "PARSE_JSON",
    "REGEXP_SUBSTR",
    "SPLIT_PART",
    "TO_ARRAY",
    "TO_CHAR",
    "TO_DATE",
    "TO_OBJECT",
    "TO_TIMESTAMP",
    "TO_VARIANT",
    "TRY_CAST",
    "TRY_PARSE_JSON",
    "ZEROIFNULL",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "ARRAY",
    "GEOGRAPHY",
    "NUMBER",
    "OBJECT",
    "TIMESTAMP_LTZ",
    "TIMESTAMP_NTZ",
    "TIMESTAMP_TZ",
    "VARIANT",
];

const EXTRA_OPERATORS: &[&str] = &["=>", "->"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "snowflake",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::DollarQuoted],
        ident_styles: vec![IdentStyle::DoubleQuoted],
        placeholder_styles: vec![PlaceholderStyle::QuestionMark, PlaceholderStyle::NamedColon],
        variable_styles: vec![VariableStyle::DollarName],
        extra_line_comment_prefixes: vec!["//"],
        bracket_array_access: true,
    }
}
