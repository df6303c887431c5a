//! PostgreSQL.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "ANALYZE",
    "COPY",
    "CREATE INDEX",
    "CREATE MATERIALIZED VIEW",
    "DO",
    "EXPLAIN",
    "RETURNING",
    "TRUNCATE",
    "VACUUM",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "CONCURRENTLY",
    "CONFLICT",
    "ILIKE",
    "IS DISTINCT FROM",
    "IS NOT DISTINCT FROM",
    "LATERAL",
    "MATERIALIZED",
    "NOT ILIKE",
    "NOTHING",
    "ONLY",
    "SIMILAR TO",
    "TABLESAMPLE",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_LENGTH",
    "DATE_PART",
    "DATE_TRUNC",
    "GENERATE_SERIES",
    "JSONB_AGG",
    "JSONB_BUILD_OBJECT",
    "JSON_AGG",
    "JSON_BUILD_OBJECT",
    "NOW",
    "REGEXP_MATCHES",
    "REGEXP_REPLACE",
    "STRING_AGG",
    "TO_CHAR",
    "TO_DATE",
    "TO_TIMESTAMP",
    "UNNEST",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "ARRAY",
    "BIGSERIAL",
    "BOX",
    "BYTEA",
    "CIDR",
    "CIRCLE",
    "INET",
    "INTERVAL",
    "JSON",
    "JSONB",
    "LINE",
    "MACADDR",
    "MONEY",
    "PATH",
    "POINT",
    "POLYGON",
    "SERIAL",
    "SMALLSERIAL",
    "TIMESTAMPTZ",
    "TSQUERY",
    "TSVECTOR",
    "UUID",
    "XML",
];

const EXTRA_OPERATORS: &[&str] = &[
    "->>", "->", "#>>", "#>", "#-", "@>", "<@", "?|", "?&", "&&", "<<", ">>", "@@", "!!", "~*",
    "!~*", "!~", "|/", "||/", "^@", ":=", "=>",
];

pub fn dialect() -> Dialect {
    Dialect {
        name: "postgresql",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![
            StringStyle::SingleQuoted,
            StringStyle::DollarQuoted,
            StringStyle::BitSingleQuoted,
            StringStyle::HexSingleQuoted,
            StringStyle::EscapeSingleQuoted,
        ],
        ident_styles: vec![IdentStyle::DoubleQuoted],
        placeholder_styles: vec![PlaceholderStyle::NumberedDollar],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: true,
    }
}
