//! Apache Spark SQL.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "CACHE TABLE",
    "CLUSTER BY",
    "DISTRIBUTE BY",
    "INSERT OVERWRITE",
    "LATERAL VIEW",
    "PIVOT",
    "SORT BY",
    "UNCACHE TABLE",
];

const EXTRA_BINARY_COMMANDS: &[&str] = &[
    "ANTI JOIN",
    "LEFT ANTI JOIN",
    "LEFT SEMI JOIN",
    "RIGHT ANTI JOIN",
    "RIGHT SEMI JOIN",
    "SEMI JOIN",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "GLOBAL",
    "IGNORE NULLS",
    "LAZY",
    "OVERWRITE",
    "PARTITIONED BY",
    "RESPECT NULLS",
    "RLIKE",
    "TABLESAMPLE",
    "TEMPORARY",
    "USING",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ARRAY_CONTAINS",
    "COLLECT_LIST",
    "COLLECT_SET",
    "DATE_ADD",
    "DATE_SUB",
    "EXPLODE",
    "FROM_UNIXTIME",
    "GET_JSON_OBJECT",
    "INSTR",
    "NVL",
    "POSEXPLODE",
    "REGEXP_EXTRACT",
    "REGEXP_REPLACE",
    "SIZE",
    "SPLIT",
    "TRANSFORM",
    "UNIX_TIMESTAMP",
];

const EXTRA_DATA_TYPES: &[&str] = &["ARRAY", "BYTE", "LONG", "MAP", "SHORT", "STRING", "STRUCT", "TINYINT"];

const EXTRA_OPERATORS: &[&str] = &["<=>", "==", "&&", "->"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "spark",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: extend(ANSI_BINARY_COMMANDS, EXTRA_BINARY_COMMANDS),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![
            StringStyle::SingleQuoted,
            StringStyle::DoubleQuoted,
            StringStyle::RawSingleQuoted,
            StringStyle::HexSingleQuoted,
        ],
        ident_styles: vec![IdentStyle::BacktickQuoted],
        placeholder_styles: vec![],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: true,
    }
}
