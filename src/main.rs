use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use sqlpretty::{
    AliasAs, CommaPosition, FormatOptions, IndentStyle, LetterCase, LogicalOperatorNewline,
    MultilineLists, QueryParams, RunFlags,
};

/// sqlpretty - a whitespace-only SQL pretty-printer.
#[derive(Parser, Debug)]
#[command(name = "sqlpretty", version, about)]
struct Cli {
    /// Files or directories to format. Use "-" to read from stdin.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// SQL dialect tag (sql, postgresql, mysql, tsql, ...).
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Spaces per indentation level.
    #[arg(long)]
    tab_width: Option<usize>,

    /// Indent with tabs instead of spaces.
    #[arg(long)]
    use_tabs: bool,

    /// Keyword case: preserve, upper, lower.
    #[arg(long)]
    keyword_case: Option<String>,

    /// Identifier case: preserve, upper, lower.
    #[arg(long)]
    identifier_case: Option<String>,

    /// Function-name case: preserve, upper, lower.
    #[arg(long)]
    function_case: Option<String>,

    /// Data-type case: preserve, upper, lower.
    #[arg(long)]
    data_type_case: Option<String>,

    /// Indentation style: standard, tabularLeft, tabularRight.
    #[arg(long)]
    indent_style: Option<String>,

    /// Newline placement for AND/OR: before, after.
    #[arg(long)]
    logical_operator_newline: Option<String>,

    /// Maximum inline width of parenthesized expressions.
    #[arg(long)]
    expression_width: Option<usize>,

    /// Newlines between statements.
    #[arg(long)]
    lines_between_queries: Option<usize>,

    /// Strip spaces around binary operators.
    #[arg(long)]
    dense_operators: bool,

    /// Put each semicolon on its own line.
    #[arg(long)]
    newline_before_semicolon: bool,

    /// Comma placement in multi-line lists: after, before, tabular.
    #[arg(long)]
    comma_position: Option<String>,

    /// List breaking: always, avoid, expressionWidth, or an item count.
    #[arg(long)]
    multiline_lists: Option<String>,

    /// AS keyword policy: preserve, always, never.
    #[arg(long)]
    alias_as: Option<String>,

    /// Positional placeholder values (repeatable).
    #[arg(long = "param")]
    params: Vec<String>,

    /// Check formatting without writing changes.
    #[arg(long)]
    check: bool,

    /// Show formatting diff.
    #[arg(long)]
    diff: bool,

    /// Glob patterns to exclude.
    #[arg(long)]
    exclude: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only).
    #[arg(short, long)]
    quiet: bool,

    /// Number of threads for parallel processing (0 = all cores).
    #[arg(short = 't', long, default_value_t = 0)]
    threads: usize,

    /// Disable multi-threaded processing.
    #[arg(long)]
    single_process: bool,

    /// Path to config file (sqlpretty.toml or pyproject.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let is_stdin = cli.files.len() == 1 && cli.files[0].to_string_lossy() == "-";

    let base = match sqlpretty::load_config(&cli.files, cli.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    let options = match apply_cli_overrides(base, &cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = options.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    }

    if is_stdin {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(2);
        }

        match sqlpretty::format(&source, &options) {
            Ok(formatted) => println!("{}", formatted),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        let flags = RunFlags {
            check: cli.check,
            diff: cli.diff,
            exclude: cli.exclude.clone(),
            threads: cli.threads,
            single_process: cli.single_process,
        };
        let summary = sqlpretty::run(&cli.files, &options, &flags);

        if !cli.quiet {
            if cli.verbose {
                for path in summary.reformatted_paths() {
                    eprintln!("reformatted {}", path.display());
                }
            }
            eprintln!("{}", summary.one_line());
        }

        summary.print_failures();

        if summary.any_failed() {
            std::process::exit(2);
        } else if cli.check && summary.any_reformatted() {
            std::process::exit(1);
        }
    }
}

/// Merge CLI flags over the config-file options.
fn apply_cli_overrides(mut options: FormatOptions, cli: &Cli) -> Result<FormatOptions, String> {
    if let Some(ref language) = cli.language {
        options.language = language.clone();
    }
    if let Some(tab_width) = cli.tab_width {
        options.tab_width = tab_width;
    }
    if cli.use_tabs {
        options.use_tabs = true;
    }
    if let Some(ref case) = cli.keyword_case {
        options.keyword_case = parse_case(case)?;
    }
    if let Some(ref case) = cli.identifier_case {
        options.identifier_case = parse_case(case)?;
    }
    if let Some(ref case) = cli.function_case {
        options.function_case = parse_case(case)?;
    }
    if let Some(ref case) = cli.data_type_case {
        options.data_type_case = parse_case(case)?;
    }
    if let Some(ref style) = cli.indent_style {
        options.indent_style = match style.as_str() {
            "standard" => IndentStyle::Standard,
            "tabularLeft" => IndentStyle::TabularLeft,
            "tabularRight" => IndentStyle::TabularRight,
            other => return Err(format!("Unknown indent style: {}", other)),
        };
    }
    if let Some(ref placement) = cli.logical_operator_newline {
        options.logical_operator_newline = match placement.as_str() {
            "before" => LogicalOperatorNewline::Before,
            "after" => LogicalOperatorNewline::After,
            other => return Err(format!("Unknown newline placement: {}", other)),
        };
    }
    if let Some(width) = cli.expression_width {
        options.expression_width = width;
    }
    if let Some(lines) = cli.lines_between_queries {
        options.lines_between_queries = lines;
    }
    if cli.dense_operators {
        options.dense_operators = true;
    }
    if cli.newline_before_semicolon {
        options.newline_before_semicolon = true;
    }
    if let Some(ref position) = cli.comma_position {
        options.comma_position = match position.as_str() {
            "after" => CommaPosition::After,
            "before" => CommaPosition::Before,
            "tabular" => CommaPosition::Tabular,
            other => return Err(format!("Unknown comma position: {}", other)),
        };
    }
    if let Some(ref lists) = cli.multiline_lists {
        options.multiline_lists = match lists.as_str() {
            "always" => MultilineLists::Always,
            "avoid" => MultilineLists::Avoid,
            "expressionWidth" => MultilineLists::ExpressionWidth,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => MultilineLists::ItemCount(n),
                _ => return Err(format!("Unknown multilineLists value: {}", other)),
            },
        };
    }
    if let Some(ref mode) = cli.alias_as {
        options.alias_as = match mode.as_str() {
            "preserve" => AliasAs::Preserve,
            "always" => AliasAs::Always,
            "never" => AliasAs::Never,
            other => return Err(format!("Unknown aliasAs mode: {}", other)),
        };
    }
    if !cli.params.is_empty() {
        options.params = QueryParams::Indexed(cli.params.clone());
    }
    Ok(options)
}

fn parse_case(value: &str) -> Result<LetterCase, String> {
    match value {
        "preserve" => Ok(LetterCase::Preserve),
        "upper" => Ok(LetterCase::Upper),
        "lower" => Ok(LetterCase::Lower),
        other => Err(format!("Unknown case option: {}", other)),
    }
}
