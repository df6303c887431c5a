//! Per-dialect lexing and formatting behavior.

use sqlpretty::{format, FormatOptions};

fn options_for(language: &str) -> FormatOptions {
    FormatOptions {
        language: language.to_string(),
        ..FormatOptions::default()
    }
}

#[test]
fn test_every_tag_formats() {
    let tags = [
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
        "tsql",
        "trino",
    ];
    for tag in tags {
        let result = format("select a from t where x = 1", &options_for(tag)).unwrap();
        assert_eq!(
            result, "SELECT\n  a\nFROM\n  t\nWHERE\n  x = 1",
            "dialect {}",
            tag
        );
    }
}

#[test]
fn test_postgresql_json_operators() {
    let result = format("select data->>'key' from t", &options_for("postgresql")).unwrap();
    assert!(result.contains("data ->> 'key'"), "got: {}", result);
}

#[test]
fn test_postgresql_array_access() {
    let result = format("select arr[1] from t", &options_for("postgresql")).unwrap();
    assert!(result.contains("arr[1]"), "got: {}", result);
}

#[test]
fn test_postgresql_dollar_quoted_string() {
    let result = format("select $tag$raw body$tag$", &options_for("postgresql")).unwrap();
    assert!(result.contains("$tag$raw body$tag$"), "got: {}", result);
}

#[test]
fn test_postgresql_numbered_placeholder() {
    let result = format("select * from t where id = $1", &options_for("postgresql")).unwrap();
    assert!(result.contains("id = $1"), "got: {}", result);
}

#[test]
fn test_mysql_backtick_identifiers() {
    let result = format("select `my col` from `my table`", &options_for("mysql")).unwrap();
    assert!(result.contains("`my col`"));
    assert!(result.contains("`my table`"));
}

#[test]
fn test_mysql_hash_comment() {
    let result = format("select 1 # note\nfrom t", &options_for("mysql")).unwrap();
    assert!(result.contains("# note"), "got: {}", result);
}

#[test]
fn test_mysql_session_variables() {
    let result = format("select @x, @@version", &options_for("mysql")).unwrap();
    assert!(result.contains("@x"));
    assert!(result.contains("@@version"));
}

#[test]
fn test_sql_dialect_hash_is_not_comment() {
    let result = format("select a # b from t", &FormatOptions::default()).unwrap();
    assert!(result.contains("a # b"), "got: {}", result);
}

#[test]
fn test_tsql_bracket_identifiers() {
    let result = format(
        "select [my col] from [my table]",
        &options_for("transactsql"),
    )
    .unwrap();
    assert!(result.contains("[my col]"));
    assert!(result.contains("[my table]"));
}

#[test]
fn test_tsql_at_placeholder() {
    let result = format("select * from t where id = @id", &options_for("tsql")).unwrap();
    assert!(result.contains("id = @id"), "got: {}", result);
}

#[test]
fn test_sqlite_numbered_question_placeholder() {
    let result = format("select * from t where a = ?1", &options_for("sqlite")).unwrap();
    assert!(result.contains("a = ?1"), "got: {}", result);
}

#[test]
fn test_bigquery_triple_quoted_string() {
    let result = format("select '''it's fine''' from t", &options_for("bigquery")).unwrap();
    assert!(result.contains("'''it's fine'''"), "got: {}", result);
}

#[test]
fn test_snowflake_double_slash_comment() {
    let result = format("select 1 // note\nfrom t", &options_for("snowflake")).unwrap();
    assert!(result.contains("// note"), "got: {}", result);
}

#[test]
fn test_snowflake_qualify_is_command() {
    let result = format(
        "select a from t qualify row_number() over (partition by a order by a) = 1",
        &options_for("snowflake"),
    )
    .unwrap();
    assert!(result.contains("\nQUALIFY\n"), "got: {}", result);
}

#[test]
fn test_plsql_minus_set_operator() {
    let result = format("select 1 minus select 2", &options_for("plsql")).unwrap();
    assert_eq!(result, "SELECT\n  1\nMINUS\nSELECT\n  2");
}

#[test]
fn test_hive_cluster_by_command() {
    let result = format("select a from t cluster by a", &options_for("hive")).unwrap();
    assert!(result.contains("\nCLUSTER BY\n"), "got: {}", result);
}

#[test]
fn test_spark_semi_join() {
    let result = format(
        "select * from a left semi join b on a.id = b.id",
        &options_for("spark"),
    )
    .unwrap();
    assert!(result.contains("LEFT SEMI JOIN"), "got: {}", result);
}

#[test]
fn test_unknown_keyword_passes_through_as_identifier() {
    // Dialect monotonicity: a word reserved in one dialect is a plain
    // identifier in another, and formatting still succeeds.
    let result = format("select qualify from t", &FormatOptions::default()).unwrap();
    assert!(result.contains("qualify"), "got: {}", result);
}

#[test]
fn test_dialect_monotonicity_on_shared_queries() {
    // A query using only shared vocabulary formats identically in related
    // dialects regardless of their extra reserved words.
    let query = "select a, b from t where a = 1 order by b";
    let base = format(query, &options_for("mysql")).unwrap();
    let extended = format(query, &options_for("mariadb")).unwrap();
    assert_eq!(base, extended);
}
