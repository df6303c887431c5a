//! Amazon Redshift. PostgreSQL-derived, without dollar quoting or JSON
//! operators.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "ANALYZE",
    "COPY",
    "CREATE INDEX",
    "EXPLAIN",
    "TRUNCATE",
    "UNLOAD",
    "VACUUM",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "COMPOUND",
    "DISTKEY",
    "DISTSTYLE",
    "ENCODE",
    "ILIKE",
    "INTERLEAVED",
    "SIMILAR TO",
    "SORTKEY",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "APPROXIMATE",
    "DATEADD",
    "DATEDIFF",
    "DATE_PART",
    "DATE_TRUNC",
    "GETDATE",
    "JSON_EXTRACT_PATH_TEXT",
    "LISTAGG",
    "MEDIAN",
    "NVL",
    "NVL2",
    "RATIO_TO_REPORT",
    "REGEXP_REPLACE",
    "REGEXP_SUBSTR",
    "SPLIT_PART",
    "TO_CHAR",
    "TO_DATE",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "BPCHAR",
    "GEOMETRY",
    "HLLSKETCH",
    "SUPER",
    "TIMESTAMPTZ",
    "TIMETZ",
    "VARBYTE",
];

const EXTRA_OPERATORS: &[&str] = &["~*", "!~*", "!~", "<<", ">>"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "redshift",
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
        placeholder_styles: vec![PlaceholderStyle::NumberedDollar],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
