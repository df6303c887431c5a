//! SingleStoreDB (formerly MemSQL). MySQL wire-compatible vocabulary plus
//! columnstore extensions.

use super::*;
use super::mysql;

const EXTRA_COMMANDS: &[&str] = &["CREATE ROWSTORE TABLE", "INSERT OVERWRITE"];

const EXTRA_KEYWORDS: &[&str] = &["COLUMNSTORE", "ROWSTORE", "SHARD KEY", "SORT KEY"];

const EXTRA_DATA_TYPES: &[&str] = &["GEOGRAPHY", "GEOGRAPHYPOINT", "VECTOR"];

pub fn dialect() -> Dialect {
    let base = mysql::dialect();
    Dialect {
        name: "singlestoredb",
        commands: extend(&base.commands, EXTRA_COMMANDS),
        reserved_keywords: extend(&base.reserved_keywords, EXTRA_KEYWORDS),
        data_types: extend(&base.data_types, EXTRA_DATA_TYPES),
        ..base
    }
}
