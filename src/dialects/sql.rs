//! Standard SQL (the default dialect).

use super::*;

pub fn dialect() -> Dialect {
    Dialect {
        name: "sql",
        commands: ANSI_COMMANDS.to_vec(),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: ANSI_KEYWORDS.to_vec(),
        function_names: ANSI_FUNCTIONS.to_vec(),
        data_types: ANSI_DATA_TYPES.to_vec(),
        operators: ANSI_OPERATORS.to_vec(),
        string_styles: vec![StringStyle::SingleQuoted],
        ident_styles: vec![IdentStyle::DoubleQuoted],
        placeholder_styles: vec![PlaceholderStyle::QuestionMark],
        variable_styles: vec![],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
