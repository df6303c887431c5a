use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::dialects::{self, Dialect};
use crate::disambiguator::disambiguate;
use crate::error::{Result, SqlPrettyError};
use crate::formatter::StatementFormatter;
use crate::lexer::Tokenizer;
use crate::options::{CommaPosition, FormatOptions};
use crate::postprocess;
use crate::report::{FileReport, RunSummary};
use crate::segmenter::segment;

/// Implementation-defined input size limit.
const MAX_QUERY_BYTES: usize = 10 * 1024 * 1024;

/// Format a SQL string according to the given options.
/// This is the core API function.
pub fn format(query: &str, options: &FormatOptions) -> Result<String> {
    options.validate()?;
    let dialect = dialects::dialect_from_name(&options.language)?;
    format_with_dialect(query, &dialect, options)
}

/// Format with an explicit dialect definition. The `language` tag in
/// `options` is ignored.
pub fn format_with_dialect(
    query: &str,
    dialect: &Dialect,
    options: &FormatOptions,
) -> Result<String> {
    options.validate_style()?;
    if query.len() > MAX_QUERY_BYTES {
        return Err(SqlPrettyError::Input(format!(
            "query exceeds the maximum input size of {} bytes",
            MAX_QUERY_BYTES
        )));
    }

    let tokenizer = Tokenizer::new(dialect);

    // Step 1: lex and disambiguate
    let tokens = disambiguate(tokenizer.tokenize(query));

    // Step 2: segment into statements, format each independently
    let statements = segment(&tokens);
    let mut formatted = Vec::with_capacity(statements.len());
    for statement in &statements {
        formatted.push(StatementFormatter::new(options, statement).format()?);
    }
    let mut output = formatted.join(&"\n".repeat(options.lines_between_queries));

    // Step 3: column-alignment sweeps
    if options.indent_style.is_tabular() {
        output = postprocess::align_tabular(&output, options.indent_style);
    }
    if options.comma_position != CommaPosition::After {
        output = postprocess::format_comma_positions(&output, options.comma_position);
    }
    if options.tabulate_alias {
        output = postprocess::format_alias_positions(&output);
    }

    Ok(output)
}

/// Run the formatter on a collection of files.
pub fn run(files: &[PathBuf], options: &FormatOptions, flags: &RunFlags) -> RunSummary {
    let matching_paths = get_matching_paths(files, &flags.exclude);
    let mut summary = RunSummary::default();

    if flags.single_process || matching_paths.len() <= 1 {
        for path in &matching_paths {
            summary.record(format_file(path, options, flags));
        }
    } else {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(flags.threads)
            .build()
            .expect("failed to build rayon thread pool");

        let reports: Vec<FileReport> = pool.install(|| {
            matching_paths
                .par_iter()
                .map(|path| format_file(path, options, flags))
                .collect()
        });
        for report in reports {
            summary.record(report);
        }
    }

    summary
}

/// File-level run behavior, separate from the style options.
#[derive(Debug, Clone, Default)]
pub struct RunFlags {
    /// Report instead of rewriting.
    pub check: bool,
    /// Print a unified diff instead of rewriting.
    pub diff: bool,
    /// Glob patterns to exclude.
    pub exclude: Vec<String>,
    /// Worker threads (0 = all cores).
    pub threads: usize,
    pub single_process: bool,
}

/// Format a single file.
fn format_file(path: &Path, options: &FormatOptions, flags: &RunFlags) -> FileReport {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => return FileReport::failed(path, format!("Read error: {}", e)),
    };

    let formatted = match format(&source, options) {
        Ok(mut f) => {
            f.push('\n');
            f
        }
        Err(e) => return FileReport::failed(path, e.to_string()),
    };

    if source == formatted {
        return FileReport::unchanged(path);
    }

    if flags.check || flags.diff {
        if flags.diff {
            print_diff(path, &source, &formatted);
        }
        return FileReport::reformatted(path);
    }

    match std::fs::write(path, &formatted) {
        Ok(_) => FileReport::reformatted(path),
        Err(e) => FileReport::failed(path, format!("Write error: {}", e)),
    }
}

/// SQL file extensions to process.
const SQL_EXTENSIONS: &[&str] = &["sql", "ddl", "dml"];

/// Get all SQL file paths that match the given inputs.
pub fn get_matching_paths(paths: &[PathBuf], exclude: &[String]) -> Vec<PathBuf> {
    let mut result = HashSet::new();

    let exclude_patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();

    for path in paths {
        if path.is_file() {
            if is_sql_file(path) {
                result.insert(path.clone());
            }
        } else if path.is_dir() {
            collect_sql_files(path, &exclude_patterns, &mut result);
        }
    }

    let mut sorted: Vec<PathBuf> = result.into_iter().collect();
    sorted.sort();
    sorted
}

fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SQL_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Recursively collect SQL files from a directory.
fn collect_sql_files(
    dir: &Path,
    exclude_patterns: &[glob::Pattern],
    result: &mut HashSet<PathBuf>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if name.starts_with('.') {
            continue;
        }
        if exclude_patterns.iter().any(|p| p.matches(&name)) {
            continue;
        }

        if path.is_dir() {
            collect_sql_files(&path, exclude_patterns, result);
        } else if is_sql_file(&path) {
            result.insert(path);
        }
    }
}

/// Print a unified diff between original and formatted content.
fn print_diff(path: &Path, original: &str, formatted: &str) {
    use similar::{ChangeTag, TextDiff};

    eprintln!("--- {}", path.display());
    eprintln!("+++ {}", path.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        eprint!("{}{}", sign, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_simple_select() {
        let options = FormatOptions::default();
        assert_eq!(format("select 1", &options).unwrap(), "SELECT\n  1");
    }

    #[test]
    fn test_format_statements_joined() {
        let options = FormatOptions::default();
        let result = format("select 1; select 2", &options).unwrap();
        assert_eq!(result, "SELECT\n  1;\nSELECT\n  2");
    }

    #[test]
    fn test_lines_between_queries() {
        let options = FormatOptions {
            lines_between_queries: 2,
            ..FormatOptions::default()
        };
        let result = format("select 1; select 2", &options).unwrap();
        assert_eq!(result, "SELECT\n  1;\n\nSELECT\n  2");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = FormatOptions {
            language: "nosuch".to_string(),
            ..FormatOptions::default()
        };
        assert!(format("select 1", &options).is_err());
    }

    #[test]
    fn test_empty_input() {
        let options = FormatOptions::default();
        assert_eq!(format("", &options).unwrap(), "");
        assert_eq!(format("  \n ", &options).unwrap(), "");
    }

    #[test]
    fn test_is_sql_file() {
        assert!(is_sql_file(Path::new("query.sql")));
        assert!(is_sql_file(Path::new("schema.DDL")));
        assert!(!is_sql_file(Path::new("main.rs")));
        assert!(!is_sql_file(Path::new("noext")));
    }

    #[test]
    fn test_idempotence_on_basic_query() {
        let options = FormatOptions::default();
        let once = format("select a,b from t where x>1", &options).unwrap();
        let twice = format(&once, &options).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_with_explicit_dialect() {
        let options = FormatOptions::default();
        let dialect = dialects::dialect_from_name("sql").unwrap();
        let result = format_with_dialect("select 1", &dialect, &options).unwrap();
        assert_eq!(result, "SELECT\n  1");
    }

    #[test]
    fn test_added_keyword_leaves_other_queries_alone() {
        // Dialect monotonicity: growing a reserved set only affects queries
        // that use the new word.
        let options = FormatOptions::default();
        let base = dialects::dialect_from_name("sql").unwrap();
        let mut extended = base.clone();
        extended.reserved_keywords.push("FROBNICATE");

        let query = "select a from t where x = 1";
        assert_eq!(
            format_with_dialect(query, &base, &options).unwrap(),
            format_with_dialect(query, &extended, &options).unwrap()
        );
    }
}
