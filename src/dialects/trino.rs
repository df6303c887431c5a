//! Trino (formerly PrestoSQL).

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "ANALYZE",
    "DESCRIBE",
    "EXPLAIN",
    "MERGE INTO",
    "SHOW CATALOGS",
    "SHOW COLUMNS",
    "SHOW FUNCTIONS",
    "SHOW SCHEMAS",
    "SHOW TABLES",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "CUBE",
    "GROUPING SETS",
    "LATERAL",
    "ORDINALITY",
    "TABLESAMPLE BERNOULLI",
    "TABLESAMPLE SYSTEM",
    "UNNEST",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "APPROX_DISTINCT",
    "APPROX_PERCENTILE",
    "ARBITRARY",
    "ARRAY_AGG",
    "ARRAY_JOIN",
    "CARDINALITY",
    "CONTAINS",
    "DATE_ADD",
    "DATE_DIFF",
    "DATE_FORMAT",
    "DATE_PARSE",
    "DATE_TRUNC",
    "ELEMENT_AT",
    "FROM_UNIXTIME",
    "JSON_EXTRACT",
    "JSON_EXTRACT_SCALAR",
    "MAP_AGG",
    "REGEXP_EXTRACT",
    "REGEXP_LIKE",
    "REGEXP_REPLACE",
    "SEQUENCE",
    "SPLIT",
    "TO_UNIXTIME",
    "TRY",
    "TRY_CAST",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "ARRAY",
    "HYPERLOGLOG",
    "IPADDRESS",
    "JSON",
    "MAP",
    "ROW",
    "TINYINT",
    "UUID",
];

const EXTRA_OPERATORS: &[&str] = &["->", "=>"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "trino",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::HexSingleQuoted],
        ident_styles: vec![IdentStyle::DoubleQuoted],
        placeholder_styles: vec![PlaceholderStyle::QuestionMark],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: true,
    }
}
