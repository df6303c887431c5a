//! Alias engine: decides where `AS` keywords are inserted or stripped.
//!
//! Pure predicates over raw-token context; the formatter owns emission.

use crate::options::AliasAs;
use crate::token::{Token, TokenKind};

pub struct AliasEngine {
    mode: AliasAs,
    /// Majority letter style of the statement's reserved words, used to case
    /// synthesized `AS` tokens under `keywordCase: preserve`.
    uppercase: bool,
}

impl AliasEngine {
    pub fn new(mode: AliasAs, statement: &[Token]) -> Self {
        Self {
            mode,
            uppercase: majority_uppercase(statement),
        }
    }

    /// The synthesized `AS` keyword, cased to match the query's observed
    /// style.
    pub fn as_keyword(&self) -> &'static str {
        if self.uppercase {
            "AS"
        } else {
            "as"
        }
    }

    /// Insert `AS` before `current` when it is an implicit alias: the
    /// previous significant token ends a list element and `current` is an
    /// identifier-ish name.
    pub fn should_add_before(&self, prev: Option<&Token>, current: &Token) -> bool {
        if self.mode != AliasAs::Always || !current.kind.is_alias_candidate() {
            return false;
        }
        match prev {
            Some(prev) => prev.kind.ends_expression() || is_star(prev),
            None => false,
        }
    }

    /// Insert `AS` after `current` when the following token is a string
    /// alias (which never routes through `should_add_before`).
    pub fn should_add_after(&self, current: &Token, next: Option<&Token>) -> bool {
        self.mode == AliasAs::Always
            && (current.kind.is_alias_candidate() || current.kind == TokenKind::Number)
            && next.is_some_and(|t| t.kind == TokenKind::String)
    }

    /// Strip an explicit `AS` whose next significant token is an alias.
    /// `AS` inside a cast (`CAST(x AS int)`) survives: there the next token
    /// is a data type.
    pub fn should_remove(&self, next: Option<&Token>) -> bool {
        self.mode == AliasAs::Never && next.is_some_and(|t| t.kind.is_alias_candidate())
    }
}

fn is_star(token: &Token) -> bool {
    token.kind == TokenKind::Operator && token.text == "*"
}

fn majority_uppercase(statement: &[Token]) -> bool {
    let mut upper = 0usize;
    let mut lower = 0usize;
    for token in statement {
        if token.kind.is_reserved() {
            if token.text.chars().any(|c| c.is_lowercase()) {
                lower += 1;
            } else {
                upper += 1;
            }
        }
    }
    upper >= lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;
    use crate::lexer::Tokenizer;

    fn tokens(source: &str) -> Vec<Token> {
        let dialect = dialects::dialect_from_name("sql").unwrap();
        Tokenizer::new(&dialect).tokenize(source)
    }

    #[test]
    fn test_add_before_implicit_alias() {
        let toks = tokens("SELECT a b");
        let engine = AliasEngine::new(AliasAs::Always, &toks);
        // b follows identifier a: implicit alias
        assert!(engine.should_add_before(Some(&toks[1]), &toks[2]));
        // a follows SELECT: not an alias
        assert!(!engine.should_add_before(Some(&toks[0]), &toks[1]));
    }

    #[test]
    fn test_add_before_after_closed_call() {
        let toks = tokens("SELECT count(*) total");
        let engine = AliasEngine::new(AliasAs::Always, &toks);
        let close = toks.iter().position(|t| t.text == ")").unwrap();
        assert!(engine.should_add_before(Some(&toks[close]), &toks[close + 1]));
    }

    #[test]
    fn test_preserve_mode_never_adds() {
        let toks = tokens("SELECT a b");
        let engine = AliasEngine::new(AliasAs::Preserve, &toks);
        assert!(!engine.should_add_before(Some(&toks[1]), &toks[2]));
    }

    #[test]
    fn test_add_after_string_alias() {
        let toks = tokens("SELECT a 'label'");
        let engine = AliasEngine::new(AliasAs::Always, &toks);
        assert!(engine.should_add_after(&toks[1], Some(&toks[2])));
    }

    #[test]
    fn test_remove_alias_as() {
        let toks = tokens("SELECT a AS b FROM t");
        let engine = AliasEngine::new(AliasAs::Never, &toks);
        assert!(engine.should_remove(Some(&toks[3])));
    }

    #[test]
    fn test_keep_cast_as() {
        let toks = tokens("SELECT CAST(x AS int)");
        let engine = AliasEngine::new(AliasAs::Never, &toks);
        let int_token = toks.iter().find(|t| t.text == "int").unwrap();
        assert!(!engine.should_remove(Some(int_token)));
    }

    #[test]
    fn test_as_keyword_matches_majority_style() {
        let lower = tokens("select a from t where x = 1");
        assert_eq!(AliasEngine::new(AliasAs::Always, &lower).as_keyword(), "as");
        let upper = tokens("SELECT a FROM t WHERE x = 1");
        assert_eq!(AliasEngine::new(AliasAs::Always, &upper).as_keyword(), "AS");
    }
}
