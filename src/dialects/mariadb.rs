//! MariaDB. Shares most of the MySQL vocabulary, plus `RETURNING` and
//! sequence support.

use super::*;
use super::mysql;

const MARIADB_COMMANDS: &[&str] = &["RETURNING", "CREATE SEQUENCE", "DROP SEQUENCE"];

const MARIADB_FUNCTIONS: &[&str] = &["NEXTVAL", "LASTVAL", "SETVAL"];

pub fn dialect() -> Dialect {
    let base = mysql::dialect();
    Dialect {
        name: "mariadb",
        commands: extend(&base.commands, MARIADB_COMMANDS),
        function_names: extend(&base.function_names, MARIADB_FUNCTIONS),
        ..base
    }
}
