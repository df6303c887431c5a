//! IBM Db2.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "FETCH FIRST",
    "MERGE INTO",
    "OPTIMIZE FOR",
    "WITH UR",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "CONCAT",
    "CURRENT SCHEMA",
    "FINAL TABLE",
    "NEW TABLE",
    "OLD TABLE",
    "ROWS ONLY",
    "WITH CS",
    "WITH RR",
    "WITH RS",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "DAYS",
    "DECRYPT_CHAR",
    "DIGITS",
    "ENCRYPT",
    "HEX",
    "JULIAN_DAY",
    "MICROSECOND",
    "MIDNIGHT_SECONDS",
    "MONTHNAME",
    "TIMESTAMP_FORMAT",
    "TIMESTAMPDIFF",
    "TO_CHAR",
    "TO_DATE",
    "VALUE",
    "VARCHAR_FORMAT",
    "WEEK_ISO",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "CLOB",
    "DBCLOB",
    "DECFLOAT",
    "GRAPHIC",
    "LONG VARCHAR",
    "VARGRAPHIC",
    "XML",
];

const EXTRA_OPERATORS: &[&str] = &["**"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "db2",
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
        placeholder_styles: vec![PlaceholderStyle::QuestionMark, PlaceholderStyle::NamedColon],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
