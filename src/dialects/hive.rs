//! Apache Hive.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "CLUSTER BY",
    "DISTRIBUTE BY",
    "INSERT OVERWRITE TABLE",
    "LATERAL VIEW",
    "LOAD DATA",
    "MSCK REPAIR TABLE",
    "SORT BY",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "BUCKETS",
    "CLUSTERED BY",
    "EXTERNAL",
    "OVERWRITE",
    "PARTITIONED BY",
    "RLIKE",
    "ROW FORMAT",
    "STORED AS",
    "TBLPROPERTIES",
    "TERMINATED BY",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "COLLECT_LIST",
    "COLLECT_SET",
    "DATE_ADD",
    "DATE_SUB",
    "EXPLODE",
    "FROM_UNIXTIME",
    "GET_JSON_OBJECT",
    "INSTR",
    "NVL",
    "PERCENTILE",
    "POSEXPLODE",
    "REGEXP_EXTRACT",
    "REGEXP_REPLACE",
    "SIZE",
    "SPLIT",
    "UNIX_TIMESTAMP",
];

const EXTRA_DATA_TYPES: &[&str] = &["ARRAY", "MAP", "STRING", "STRUCT", "TINYINT", "UNIONTYPE"];

const EXTRA_OPERATORS: &[&str] = &["<=>", "==", "&&"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "hive",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::DoubleQuoted],
        ident_styles: vec![IdentStyle::BacktickQuoted],
        placeholder_styles: vec![],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: true,
    }
}
