use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sqlpretty::dialects;
use sqlpretty::lexer::Tokenizer;
use sqlpretty::{format, FormatOptions};

const SMALL: &str = "SELECT a, b, c FROM my_table WHERE x = 1 AND y > 2 ORDER BY a";

fn medium_query() -> String {
    let mut parts = Vec::new();
    for i in 0..40 {
        parts.push(format!(
            "SELECT col_{i}, count(*) AS cnt_{i} FROM table_{i} t LEFT JOIN other_{i} o \
             ON t.id = o.t_id WHERE t.created_at BETWEEN '2020-01-01' AND '2021-01-01' \
             AND o.kind IN (1, 2, 3) GROUP BY col_{i} HAVING count(*) > {i} ORDER BY cnt_{i} DESC;"
        ));
    }
    parts.join("\n")
}

fn bench_format_small(c: &mut Criterion) {
    let options = FormatOptions::default();
    c.bench_function("format_small", |b| {
        b.iter(|| format(black_box(SMALL), black_box(&options)).unwrap())
    });
}

fn bench_format_medium(c: &mut Criterion) {
    let sql = medium_query();
    let options = FormatOptions::default();
    c.bench_function("format_medium", |b| {
        b.iter(|| format(black_box(&sql), black_box(&options)).unwrap())
    });
}

fn bench_format_tabular(c: &mut Criterion) {
    let sql = medium_query();
    let options = FormatOptions {
        indent_style: sqlpretty::IndentStyle::TabularLeft,
        ..FormatOptions::default()
    };
    c.bench_function("format_tabular", |b| {
        b.iter(|| format(black_box(&sql), black_box(&options)).unwrap())
    });
}

fn bench_lex_only(c: &mut Criterion) {
    let sql = medium_query();
    let dialect = dialects::dialect_from_name("sql").unwrap();
    let tokenizer = Tokenizer::new(&dialect);
    c.bench_function("lex_only", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&sql)))
    });
}

criterion_group!(
    benches,
    bench_format_small,
    bench_format_medium,
    bench_format_tabular,
    bench_lex_only
);
criterion_main!(benches);
