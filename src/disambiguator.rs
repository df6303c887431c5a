//! Token disambiguation: rewrites token categories based on the nearest
//! non-comment neighbors. Five passes, applied in order over the whole
//! stream; earlier rewrites are visible to later ones.

use crate::token::{Token, TokenKind};

/// Pure function: same-length stream out, categories rewritten.
pub fn disambiguate(mut tokens: Vec<Token>) -> Vec<Token> {
    demote_reserved_near_property_access(&mut tokens);
    demote_function_names(&mut tokens);
    promote_parameterized_data_types(&mut tokens);
    promote_array_identifiers(&mut tokens);
    promote_array_keywords(&mut tokens);
    tokens
}

fn nearest_before(tokens: &[Token], index: usize) -> Option<&Token> {
    tokens[..index].iter().rev().find(|t| !t.kind.is_comment())
}

fn nearest_after(tokens: &[Token], index: usize) -> Option<&Token> {
    tokens[index + 1..].iter().find(|t| !t.kind.is_comment())
}

/// 1. A reserved word adjacent to `.` is part of a qualified name.
fn demote_reserved_near_property_access(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if !tokens[i].kind.is_reserved() {
            continue;
        }
        let before = nearest_before(tokens, i).map(|t| t.kind);
        let after = nearest_after(tokens, i).map(|t| t.kind);
        if before == Some(TokenKind::PropertyAccessOperator)
            || after == Some(TokenKind::PropertyAccessOperator)
        {
            tokens[i].kind = TokenKind::Identifier;
            tokens[i].value = tokens[i].text.clone();
        }
    }
}

/// 2. A function name not followed by `(` is a plain identifier.
fn demote_function_names(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::ReservedFunctionName {
            continue;
        }
        let followed_by_paren =
            nearest_after(tokens, i).is_some_and(|t| t.kind == TokenKind::BlockStart && t.text == "(");
        if !followed_by_paren {
            tokens[i].kind = TokenKind::Identifier;
            tokens[i].value = tokens[i].text.clone();
        }
    }
}

/// 3. A data type followed by `(` takes a length/precision argument list.
fn promote_parameterized_data_types(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::ReservedDataType {
            continue;
        }
        let followed_by_paren =
            nearest_after(tokens, i).is_some_and(|t| t.kind == TokenKind::BlockStart && t.text == "(");
        if followed_by_paren {
            tokens[i].kind = TokenKind::ReservedParameterizedDataType;
        }
    }
}

/// 4. An identifier followed by `[` is an array access.
fn promote_array_identifiers(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::Identifier {
            continue;
        }
        let followed_by_bracket = nearest_after(tokens, i).is_some_and(|t| t.text == "[");
        if followed_by_bracket {
            tokens[i].kind = TokenKind::ArrayIdentifier;
        }
    }
}

/// 5. A data type followed by `[` is an array constructor keyword.
fn promote_array_keywords(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::ReservedDataType {
            continue;
        }
        let followed_by_bracket = nearest_after(tokens, i).is_some_and(|t| t.text == "[");
        if followed_by_bracket {
            tokens[i].kind = TokenKind::ArrayKeyword;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;
    use crate::lexer::Tokenizer;

    fn lex(dialect: &str, source: &str) -> Vec<Token> {
        let dialect = dialects::dialect_from_name(dialect).unwrap();
        disambiguate(Tokenizer::new(&dialect).tokenize(source))
    }

    #[test]
    fn test_reserved_after_dot_becomes_identifier() {
        let tokens = lex("sql", "SELECT t.select FROM t");
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].text, "select");
    }

    #[test]
    fn test_reserved_before_dot_becomes_identifier() {
        let tokens = lex("sql", "SELECT update.x FROM update");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_comment_is_skipped_when_finding_neighbor() {
        let tokens = lex("sql", "SELECT t . /* c */ select FROM t");
        let demoted = tokens.iter().find(|t| t.text == "select").unwrap();
        assert_eq!(demoted.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_function_name_without_paren_demoted() {
        let tokens = lex("sql", "SELECT count FROM t");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_function_name_with_paren_kept() {
        let tokens = lex("sql", "SELECT count(*) FROM t");
        assert_eq!(tokens[1].kind, TokenKind::ReservedFunctionName);
    }

    #[test]
    fn test_data_type_with_paren_parameterized() {
        let tokens = lex("sql", "CAST(x AS varchar(10))");
        let varchar = tokens.iter().find(|t| t.text == "varchar").unwrap();
        assert_eq!(varchar.kind, TokenKind::ReservedParameterizedDataType);
    }

    #[test]
    fn test_array_identifier() {
        let tokens = lex("postgresql", "SELECT arr[1] FROM t");
        assert_eq!(tokens[1].kind, TokenKind::ArrayIdentifier);
    }

    #[test]
    fn test_array_keyword() {
        let tokens = lex("postgresql", "SELECT ARRAY[1, 2]");
        assert_eq!(tokens[1].kind, TokenKind::ArrayKeyword);
    }

    #[test]
    fn test_stream_length_unchanged() {
        let dialect = dialects::dialect_from_name("sql").unwrap();
        let raw = Tokenizer::new(&dialect).tokenize("SELECT t.select, count FROM t");
        let len = raw.len();
        assert_eq!(disambiguate(raw).len(), len);
    }
}
