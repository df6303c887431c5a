//! Dialect definitions: immutable keyword tables plus tokenizer configuration
//! for each supported SQL variant.

use crate::error::SqlPrettyError;

pub mod bigquery;
pub mod db2;
pub mod hive;
pub mod mariadb;
pub mod mysql;
pub mod n1ql;
pub mod plsql;
pub mod postgresql;
pub mod redshift;
pub mod singlestoredb;
pub mod snowflake;
pub mod spark;
pub mod sql;
pub mod sqlite;
pub mod transactsql;
pub mod trino;

/// String-literal styles a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    /// `'...'` with doubled-quote escaping.
    SingleQuoted,
    /// `"..."` used as a string (not an identifier).
    DoubleQuoted,
    /// `` `...` `` used as a string.
    BacktickQuoted,
    /// `$tag$...$tag$`.
    DollarQuoted,
    /// `B'0101'`.
    BitSingleQuoted,
    /// `X'1F'`.
    HexSingleQuoted,
    /// `N'...'`.
    NationalSingleQuoted,
    /// `E'...'` with backslash escapes.
    EscapeSingleQuoted,
    /// `R'...'` raw string.
    RawSingleQuoted,
    /// `'''...'''` or `"""..."""`.
    TripleQuoted,
}

/// Identifier-quote styles a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentStyle {
    DoubleQuoted,
    BacktickQuoted,
    /// `[...]` brackets (Transact-SQL).
    Bracketed,
}

/// Placeholder syntaxes a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?`
    QuestionMark,
    /// `?1`
    NumberedQuestionMark,
    /// `$1`
    NumberedDollar,
    /// `$name`
    NamedDollar,
    /// `:name` (also accepts a quoted name)
    NamedColon,
    /// `@name` (also accepts a quoted name)
    NamedAt,
}

/// Session/user variable syntaxes a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableStyle {
    /// `@name` or `@'quoted'` / `@"quoted"` / `` @`quoted` ``
    AtName,
    /// `@@name`
    DoubleAtName,
    /// `$name` (Snowflake session variables)
    DollarName,
}

/// A SQL dialect definition: reserved-word sets by category, operator list,
/// and tokenizer configuration. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub name: &'static str,
    pub commands: Vec<&'static str>,
    pub binary_commands: Vec<&'static str>,
    pub dependent_clauses: Vec<&'static str>,
    pub join_conditions: Vec<&'static str>,
    pub logical_operators: Vec<&'static str>,
    pub reserved_keywords: Vec<&'static str>,
    pub function_names: Vec<&'static str>,
    pub data_types: Vec<&'static str>,
    /// Multi-character operators; matched longest-first.
    pub operators: Vec<&'static str>,
    pub string_styles: Vec<StringStyle>,
    pub ident_styles: Vec<IdentStyle>,
    pub placeholder_styles: Vec<PlaceholderStyle>,
    pub variable_styles: Vec<VariableStyle>,
    /// Line-comment prefixes beyond `--`.
    pub extra_line_comment_prefixes: Vec<&'static str>,
    /// Whether `ident[...]` is array element access.
    pub bracket_array_access: bool,
}

/// All recognized dialect tags (aliases excluded).
pub const DIALECT_NAMES: &[&str] = &[
    "sql",
    "bigquery",
    "db2",
    "hive",
    "mariadb",
    "mysql",
    "n1ql",
    "plsql",
    "postgresql",
    "redshift",
    "singlestoredb",
    "snowflake",
    "spark",
    "sqlite",
    "transactsql",
    "trino",
];

/// Create a dialect definition from a tag. `tsql` is accepted as an alias for
/// `transactsql`.
pub fn dialect_from_name(name: &str) -> Result<Dialect, SqlPrettyError> {
    match name.to_ascii_lowercase().as_str() {
        "sql" => Ok(sql::dialect()),
        "bigquery" => Ok(bigquery::dialect()),
        "db2" => Ok(db2::dialect()),
        "hive" => Ok(hive::dialect()),
        "mariadb" => Ok(mariadb::dialect()),
        "mysql" => Ok(mysql::dialect()),
        "n1ql" => Ok(n1ql::dialect()),
        "plsql" => Ok(plsql::dialect()),
        "postgresql" => Ok(postgresql::dialect()),
        "redshift" => Ok(redshift::dialect()),
        "singlestoredb" => Ok(singlestoredb::dialect()),
        "snowflake" => Ok(snowflake::dialect()),
        "spark" => Ok(spark::dialect()),
        "sqlite" => Ok(sqlite::dialect()),
        "transactsql" | "tsql" => Ok(transactsql::dialect()),
        "trino" => Ok(trino::dialect()),
        _ => Err(SqlPrettyError::Config(format!("Unknown dialect: {}", name))),
    }
}

// ---- Shared ANSI vocabulary ----
// Individual dialects compose these base lists with their own extensions.

pub(crate) const ANSI_COMMANDS: &[&str] = &[
    "ADD",
    "ALTER COLUMN",
    "ALTER TABLE",
    "CREATE TABLE",
    "CREATE VIEW",
    "DELETE FROM",
    "DROP TABLE",
    "FETCH FIRST",
    "FETCH NEXT",
    "FROM",
    "GROUP BY",
    "HAVING",
    "INSERT INTO",
    "LIMIT",
    "OFFSET",
    "ORDER BY",
    "SELECT",
    "SET",
    "UPDATE",
    "VALUES",
    "WHERE",
    "WITH",
];

pub(crate) const ANSI_BINARY_COMMANDS: &[&str] = &[
    "INTERSECT",
    "INTERSECT ALL",
    "INTERSECT DISTINCT",
    "UNION",
    "UNION ALL",
    "UNION DISTINCT",
    "EXCEPT",
    "EXCEPT ALL",
    "EXCEPT DISTINCT",
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
    "NATURAL INNER JOIN",
    "NATURAL LEFT JOIN",
    "NATURAL RIGHT JOIN",
];

pub(crate) const ANSI_DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

pub(crate) const ANSI_JOIN_CONDITIONS: &[&str] = &["ON", "USING"];

pub(crate) const ANSI_LOGICAL_OPERATORS: &[&str] = &["AND", "OR"];

pub(crate) const ANSI_KEYWORDS: &[&str] = &[
    "ALL",
    "AS",
    "ASC",
    "BETWEEN",
    "BY",
    "CASCADE",
    "CHECK",
    "COLUMN",
    "CONSTRAINT",
    "CURRENT",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "EXISTS",
    "FILTER",
    "FOLLOWING",
    "FOREIGN KEY",
    "GROUPING SETS",
    "IF EXISTS",
    "IF NOT EXISTS",
    "IN",
    "INTERVAL",
    "IS",
    "IS NOT NULL",
    "IS NULL",
    "LIKE",
    "NOT",
    "NOT BETWEEN",
    "NOT IN",
    "NOT LIKE",
    "NULL",
    "NULLS FIRST",
    "NULLS LAST",
    "OVER",
    "PARTITION BY",
    "PRECEDING",
    "PRIMARY KEY",
    "RANGE",
    "RECURSIVE",
    "REFERENCES",
    "ROLLUP",
    "ROW",
    "ROWS",
    "TABLE",
    "THEN",
    "TO",
    "UNBOUNDED",
    "UNIQUE",
    "WITHIN GROUP",
];

pub(crate) const ANSI_FUNCTIONS: &[&str] = &[
    "ABS",
    "AVG",
    "CAST",
    "CEIL",
    "CEILING",
    "CHAR_LENGTH",
    "COALESCE",
    "CONCAT",
    "COUNT",
    "CUME_DIST",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "DENSE_RANK",
    "EXP",
    "EXTRACT",
    "FIRST_VALUE",
    "FLOOR",
    "GREATEST",
    "LAG",
    "LAST_VALUE",
    "LEAD",
    "LEAST",
    "LENGTH",
    "LN",
    "LOG",
    "LOWER",
    "LPAD",
    "LTRIM",
    "MAX",
    "MIN",
    "MOD",
    "NTILE",
    "NULLIF",
    "PERCENT_RANK",
    "POSITION",
    "POWER",
    "RANK",
    "REPLACE",
    "ROUND",
    "ROW_NUMBER",
    "RPAD",
    "RTRIM",
    "SQRT",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
];

pub(crate) const ANSI_DATA_TYPES: &[&str] = &[
    "BIGINT",
    "BINARY",
    "BLOB",
    "BOOLEAN",
    "CHAR",
    "CHARACTER",
    "CHARACTER VARYING",
    "DATE",
    "DECIMAL",
    "DOUBLE",
    "DOUBLE PRECISION",
    "FLOAT",
    "INT",
    "INTEGER",
    "NUMERIC",
    "REAL",
    "SMALLINT",
    "TEXT",
    "TIME",
    "TIMESTAMP",
    "VARBINARY",
    "VARCHAR",
];

pub(crate) const ANSI_OPERATORS: &[&str] = &["<>", "<=", ">=", "!=", "||", "::"];

/// Concatenate a base word list with dialect extensions.
pub(crate) fn extend(base: &[&'static str], extra: &[&'static str]) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(base.len() + extra.len());
    out.extend_from_slice(base);
    out.extend_from_slice(extra);
    out
}
