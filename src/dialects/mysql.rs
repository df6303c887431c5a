//! MySQL.

use super::*;

pub(crate) const EXTRA_COMMANDS: &[&str] = &[
    "CREATE INDEX",
    "EXPLAIN",
    "REPLACE INTO",
    "SHOW",
    "TRUNCATE",
];

pub(crate) const EXTRA_BINARY_COMMANDS: &[&str] = &["STRAIGHT_JOIN"];

pub(crate) const EXTRA_KEYWORDS: &[&str] = &[
    "AUTO_INCREMENT",
    "CHARSET",
    "COLLATE",
    "DIV",
    "ENGINE",
    "HIGH_PRIORITY",
    "IGNORE",
    "LOW_PRIORITY",
    "ON DUPLICATE KEY UPDATE",
    "REGEXP",
    "RLIKE",
    "SQL_CALC_FOUND_ROWS",
    "STRAIGHT_JOIN",
    "XOR",
];

pub(crate) const EXTRA_FUNCTIONS: &[&str] = &[
    "CONCAT_WS",
    "CURDATE",
    "CURTIME",
    "DATEDIFF",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "FROM_UNIXTIME",
    "GROUP_CONCAT",
    "IFNULL",
    "INSTR",
    "JSON_EXTRACT",
    "JSON_OBJECT",
    "LOCATE",
    "STR_TO_DATE",
    "UNIX_TIMESTAMP",
];

pub(crate) const EXTRA_DATA_TYPES: &[&str] = &[
    "DATETIME",
    "ENUM",
    "JSON",
    "LONGBLOB",
    "LONGTEXT",
    "MEDIUMBLOB",
    "MEDIUMINT",
    "MEDIUMTEXT",
    "TINYBLOB",
    "TINYINT",
    "TINYTEXT",
    "UNSIGNED",
    "YEAR",
];

pub(crate) const EXTRA_OPERATORS: &[&str] = &[":=", "<=>", "<<", ">>", "->>", "->", "&&", "!"];

pub fn dialect() -> Dialect {
    Dialect {
        name: "mysql",
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
            StringStyle::BitSingleQuoted,
            StringStyle::HexSingleQuoted,
            StringStyle::NationalSingleQuoted,
        ],
        ident_styles: vec![IdentStyle::BacktickQuoted],
        placeholder_styles: vec![PlaceholderStyle::QuestionMark],
        variable_styles: vec![VariableStyle::AtName, VariableStyle::DoubleAtName],
        extra_line_comment_prefixes: vec!["#"],
        bracket_array_access: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_tokenizer_config() {
        let d = dialect();
        assert!(d.ident_styles.contains(&IdentStyle::BacktickQuoted));
        assert!(d.extra_line_comment_prefixes.contains(&"#"));
        assert!(d.variable_styles.contains(&VariableStyle::AtName));
    }
}
