//! Statement segmenter: splits the disambiguated token stream at query
//! terminators so formatting is statement-scoped.

use crate::token::{Token, TokenKind};

/// A contiguous slice of tokens terminated by a `;` operator (included) or by
/// end of input. The `Eof` token is not part of any statement.
pub fn segment(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut statements = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Operator if token.text == ";" => {
                current.push(token.clone());
                statements.push(std::mem::take(&mut current));
            }
            _ => current.push(token.clone()),
        }
    }

    if !current.is_empty() {
        statements.push(current);
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;
    use crate::lexer::Tokenizer;

    fn segments(source: &str) -> Vec<Vec<Token>> {
        let dialect = dialects::dialect_from_name("sql").unwrap();
        segment(&Tokenizer::new(&dialect).tokenize(source))
    }

    #[test]
    fn test_single_statement_without_semicolon() {
        let statements = segments("SELECT 1");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].len(), 2);
    }

    #[test]
    fn test_semicolon_included_in_statement() {
        let statements = segments("SELECT 1;");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].last().unwrap().text, ";");
    }

    #[test]
    fn test_two_statements() {
        let statements = segments("SELECT 1; SELECT 2");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].last().unwrap().text, ";");
        assert_eq!(statements[1][0].value, "SELECT");
    }

    #[test]
    fn test_trailing_semicolon_only() {
        let statements = segments("SELECT 1; SELECT 2;");
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(segments("").is_empty());
        assert!(segments("   \n ").is_empty());
    }
}
