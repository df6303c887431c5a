pub mod alias;
pub mod api;
pub mod config;
pub mod dialects;
pub mod disambiguator;
pub mod error;
pub mod formatter;
pub mod indentation;
pub mod inline_block;
pub mod lexer;
pub mod options;
pub mod params;
pub mod postprocess;
pub mod report;
pub mod segmenter;
pub mod token;

// Re-export the main public API
pub use api::{format, format_with_dialect, get_matching_paths, run, RunFlags};
pub use dialects::Dialect;
pub use config::load_config;
pub use error::SqlPrettyError;
pub use options::{
    AliasAs, CommaPosition, FormatOptions, IndentStyle, LetterCase, LogicalOperatorNewline,
    MultilineLists,
};
pub use params::QueryParams;
