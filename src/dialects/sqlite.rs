//! SQLite.

use super::*;

const EXTRA_COMMANDS: &[&str] = &["CREATE INDEX", "EXPLAIN", "PRAGMA", "VACUUM"];

const EXTRA_KEYWORDS: &[&str] = &[
    "AUTOINCREMENT",
    "GLOB",
    "INDEXED BY",
    "ISNULL",
    "MATCH",
    "NOTNULL",
    "ON CONFLICT",
    "REGEXP",
    "WITHOUT ROWID",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "DATETIME",
    "GROUP_CONCAT",
    "IFNULL",
    "INSTR",
    "JSON_EXTRACT",
    "JULIANDAY",
    "PRINTF",
    "QUOTE",
    "RANDOM",
    "STRFTIME",
    "TOTAL",
    "TYPEOF",
];

const EXTRA_OPERATORS: &[&str] = &["->>", "->", "<<", ">>", "==", "&", "|"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "sqlite",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: ANSI_DATA_TYPES.to_vec(),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::HexSingleQuoted],
        ident_styles: vec![
            IdentStyle::DoubleQuoted,
            IdentStyle::BacktickQuoted,
            IdentStyle::Bracketed,
        ],
        placeholder_styles: vec![
            PlaceholderStyle::QuestionMark,
            PlaceholderStyle::NumberedQuestionMark,
            PlaceholderStyle::NamedColon,
            PlaceholderStyle::NamedAt,
            PlaceholderStyle::NamedDollar,
        ],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
