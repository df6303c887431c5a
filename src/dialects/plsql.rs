//! Oracle PL/SQL.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "BEGIN",
    "CONNECT BY",
    "DECLARE",
    "EXCEPTION",
    "LOOP",
    "MERGE INTO",
    "RETURNING",
    "START WITH",
];

const EXTRA_BINARY_COMMANDS: &[&str] = &["MINUS"];

const EXTRA_KEYWORDS: &[&str] = &[
    "BULK COLLECT INTO",
    "CONNECT",
    "CURSOR",
    "ELSIF",
    "LEVEL",
    "NOCOPY",
    "PRIOR",
    "SYSDATE",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "ADD_MONTHS",
    "DECODE",
    "INITCAP",
    "INSTR",
    "LISTAGG",
    "MONTHS_BETWEEN",
    "NVL",
    "NVL2",
    "REGEXP_INSTR",
    "REGEXP_LIKE",
    "REGEXP_SUBSTR",
    "SUBSTR",
    "SYS_GUID",
    "TO_CHAR",
    "TO_DATE",
    "TO_NUMBER",
    "TRUNC",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "BFILE",
    "BINARY_DOUBLE",
    "BINARY_FLOAT",
    "CLOB",
    "LONG",
    "NCLOB",
    "NUMBER",
    "NVARCHAR2",
    "RAW",
    "ROWID",
    "UROWID",
    "VARCHAR2",
];

const EXTRA_OPERATORS: &[&str] = &[":=", "=>", "**", "~=", "^=", "..", "@"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "plsql",
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
            StringStyle::NationalSingleQuoted,
        ],
        ident_styles: vec![IdentStyle::DoubleQuoted],
        placeholder_styles: vec![PlaceholderStyle::NamedColon],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
