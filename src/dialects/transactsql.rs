//! Transact-SQL (Microsoft SQL Server). Tag `transactsql`, alias `tsql`.

use super::*;

const EXTRA_COMMANDS: &[&str] = &[
    "CREATE INDEX",
    "CREATE PROCEDURE",
    "EXEC",
    "EXECUTE",
    "MERGE INTO",
    "OFFSET",
    "OUTPUT",
    "PRINT",
    "TRUNCATE TABLE",
];

const EXTRA_KEYWORDS: &[&str] = &[
    "CLUSTERED",
    "FETCH NEXT",
    "IDENTITY",
    "IDENTITY_INSERT",
    "NOCOUNT",
    "NOLOCK",
    "NONCLUSTERED",
    "PERCENT",
    "PIVOT",
    "ROWS FETCH NEXT",
    "ROWS ONLY",
    "TOP",
    "UNPIVOT",
    "WITH TIES",
];

const EXTRA_FUNCTIONS: &[&str] = &[
    "CHARINDEX",
    "CONVERT",
    "DATEADD",
    "DATEDIFF",
    "DATENAME",
    "DATEPART",
    "GETDATE",
    "GETUTCDATE",
    "IIF",
    "ISNULL",
    "LEN",
    "NEWID",
    "OBJECT_ID",
    "PATINDEX",
    "STRING_AGG",
    "STRING_SPLIT",
    "STUFF",
    "SYSDATETIME",
    "TRY_CAST",
    "TRY_CONVERT",
];

const EXTRA_DATA_TYPES: &[&str] = &[
    "BIT",
    "DATETIME",
    "DATETIME2",
    "DATETIMEOFFSET",
    "IMAGE",
    "MONEY",
    "NCHAR",
    "NTEXT",
    "NVARCHAR",
    "SMALLDATETIME",
    "SMALLMONEY",
    "UNIQUEIDENTIFIER",
];

const EXTRA_OPERATORS: &[&str] = &[
    "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "!<", "!>",
];

pub fn dialect() -> Dialect {
    Dialect {
        name: "transactsql",
        commands: extend(ANSI_COMMANDS, EXTRA_COMMANDS),
        binary_commands: ANSI_BINARY_COMMANDS.to_vec(),
        dependent_clauses: ANSI_DEPENDENT_CLAUSES.to_vec(),
        join_conditions: ANSI_JOIN_CONDITIONS.to_vec(),
        logical_operators: ANSI_LOGICAL_OPERATORS.to_vec(),
        reserved_keywords: extend(ANSI_KEYWORDS, EXTRA_KEYWORDS),
        function_names: extend(ANSI_FUNCTIONS, EXTRA_FUNCTIONS),
        data_types: extend(ANSI_DATA_TYPES, EXTRA_DATA_TYPES),
        operators: extend(ANSI_OPERATORS, EXTRA_OPERATORS),
        string_styles: vec![StringStyle::SingleQuoted, StringStyle::NationalSingleQuoted],
        ident_styles: vec![IdentStyle::DoubleQuoted, IdentStyle::Bracketed],
        placeholder_styles: vec![PlaceholderStyle::NamedAt],
        variable_styles: vec![VariableStyle::DoubleAtName],
        extra_line_comment_prefixes: vec![],
        bracket_array_access: false,
    }
}
