//! Dialect-parameterized lexer: a greedy, longest-match scanner over bytes.
//!
//! The lexer is total. Anything it cannot classify is emitted as a
//! single-character operator, so every input produces a token stream ending
//! with `Eof`.

use std::collections::HashMap;

use memchr::memchr;

use crate::dialects::{Dialect, IdentStyle, PlaceholderStyle, StringStyle, VariableStyle};
use crate::token::{equalize_whitespace, Token, TokenKind};

/// Trie over uppercased whitespace-normalized words, used for greedy
/// multi-word reserved matching (`LEFT OUTER JOIN` before `LEFT`).
#[derive(Debug, Default)]
struct WordTrie {
    children: HashMap<String, WordTrie>,
    terminal: Option<TokenKind>,
}

impl WordTrie {
    fn insert(&mut self, phrase: &str, kind: TokenKind) {
        let mut node = self;
        for word in phrase.split_whitespace() {
            node = node.children.entry(word.to_uppercase()).or_default();
        }
        // First insertion wins: categories are inserted in priority order.
        node.terminal.get_or_insert(kind);
    }
}

/// A tokenizer built from one dialect definition. Reusable across inputs.
pub struct Tokenizer {
    trie: WordTrie,
    /// Dialect operators, longest first.
    operators: Vec<&'static str>,
    /// `--` plus dialect extras.
    line_comment_prefixes: Vec<&'static str>,
    string_styles: Vec<StringStyle>,
    ident_styles: Vec<IdentStyle>,
    placeholder_styles: Vec<PlaceholderStyle>,
    variable_styles: Vec<VariableStyle>,
    bracket_array_access: bool,
}

impl Tokenizer {
    pub fn new(dialect: &Dialect) -> Self {
        let mut trie = WordTrie::default();
        trie.insert("CASE", TokenKind::ReservedCaseStart);
        trie.insert("END", TokenKind::ReservedCaseEnd);
        let categories: [(&[&str], TokenKind); 8] = [
            (&dialect.commands, TokenKind::ReservedCommand),
            (&dialect.binary_commands, TokenKind::ReservedBinaryCommand),
            (&dialect.dependent_clauses, TokenKind::ReservedDependentClause),
            (&dialect.join_conditions, TokenKind::ReservedJoinCondition),
            (&dialect.logical_operators, TokenKind::ReservedLogicalOperator),
            (&dialect.reserved_keywords, TokenKind::ReservedKeyword),
            (&dialect.function_names, TokenKind::ReservedFunctionName),
            (&dialect.data_types, TokenKind::ReservedDataType),
        ];
        for (words, kind) in categories {
            for word in words {
                trie.insert(word, kind);
            }
        }

        let mut operators = dialect.operators.clone();
        operators.sort_by_key(|op| std::cmp::Reverse(op.len()));

        // Longer delimiters must win over their one-character prefixes
        // (''' before ', $tag$ before $, X'..' before the identifier X).
        let mut string_styles = dialect.string_styles.clone();
        string_styles.sort_by_key(|style| style_priority(*style));

        let mut line_comment_prefixes = vec!["--"];
        line_comment_prefixes.extend_from_slice(&dialect.extra_line_comment_prefixes);

        Self {
            trie,
            operators,
            line_comment_prefixes,
            string_styles,
            ident_styles: dialect.ident_styles.clone(),
            placeholder_styles: dialect.placeholder_styles.clone(),
            variable_styles: dialect.variable_styles.clone(),
            bracket_array_access: dialect.bracket_array_access,
        }
    }

    /// Tokenize a source string. Never fails; ends with an `Eof` token that
    /// carries any trailing whitespace in `whitespace_before`.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let bytes = source.as_bytes();
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        loop {
            let ws_len = scan_whitespace(&bytes[pos..]);
            let start = pos + ws_len;
            if start >= bytes.len() {
                tokens.push(Token::new(TokenKind::Eof, "", "", &source[pos..], start));
                break;
            }
            let prev_kind = tokens
                .iter()
                .rev()
                .find(|t| !t.kind.is_comment())
                .map(|t| t.kind);

            let (len, kind, value) = self.scan_token(&source[start..], prev_kind);
            let text = &source[start..start + len];
            let value = value.unwrap_or_else(|| text.to_string());
            tokens.push(Token::new(kind, text, &value, &source[pos..start], start));
            pos = start + len;
        }

        tokens
    }

    /// Scan one token at the head of `rest`. Rules are tried in declared
    /// order; the first match commits.
    fn scan_token(
        &self,
        rest: &str,
        prev_kind: Option<TokenKind>,
    ) -> (usize, TokenKind, Option<String>) {
        let bytes = rest.as_bytes();

        // 1. Line comment
        for prefix in &self.line_comment_prefixes {
            if rest.starts_with(prefix) {
                let len = memchr(b'\n', bytes).unwrap_or(bytes.len());
                return (len, TokenKind::LineComment, None);
            }
        }

        // 2. Block comment (non-nested)
        if rest.starts_with("/*") {
            return (scan_block_comment(bytes), TokenKind::BlockComment, None);
        }

        // 3. String literal
        if let Some(len) = self.match_string(rest) {
            return (len, TokenKind::String, None);
        }

        // 4. Quoted identifier
        if let Some((len, value)) = self.match_quoted_ident(rest) {
            return (len, TokenKind::QuotedIdentifier, Some(value));
        }

        // 5. Reserved word (greedy multi-word)
        if let Some((len, kind)) = self.match_reserved(rest) {
            return (len, kind, Some(equalize_whitespace(&rest[..len])));
        }

        // 6. Placeholders and variables
        if let Some((len, kind, value)) = self.match_placeholder_or_variable(rest) {
            return (len, kind, value);
        }

        // 7. Number
        if let Some(len) = match_number(bytes, prev_kind) {
            return (len, TokenKind::Number, None);
        }

        // 8. Identifier
        if is_word_start(bytes[0]) {
            let len = scan_word(bytes);
            return (len, TokenKind::Identifier, None);
        }

        // 9. Operators and brackets
        for op in &self.operators {
            if rest.starts_with(op) {
                return (op.len(), TokenKind::Operator, None);
            }
        }
        match bytes[0] {
            b'(' | b'{' => return (1, TokenKind::BlockStart, None),
            b')' | b'}' => return (1, TokenKind::BlockEnd, None),
            b'[' if self.bracket_array_access => return (1, TokenKind::BlockStart, None),
            b']' if self.bracket_array_access => return (1, TokenKind::BlockEnd, None),
            b'.' => return (1, TokenKind::PropertyAccessOperator, None),
            _ => {}
        }

        // 10. Fallback: one character as operator
        let char_len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
        (char_len, TokenKind::Operator, None)
    }

    fn match_string(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        for style in &self.string_styles {
            let len = match style {
                StringStyle::TripleQuoted => {
                    if rest.starts_with("'''") {
                        scan_triple_quoted(bytes, b'\'')
                    } else if rest.starts_with("\"\"\"") {
                        scan_triple_quoted(bytes, b'"')
                    } else {
                        0
                    }
                }
                StringStyle::DollarQuoted if bytes[0] == b'$' => scan_dollar_quoted(bytes),
                StringStyle::SingleQuoted if bytes[0] == b'\'' => {
                    scan_quoted(bytes, 0, b'\'', true)
                }
                StringStyle::DoubleQuoted if bytes[0] == b'"' => scan_quoted(bytes, 0, b'"', true),
                StringStyle::BacktickQuoted if bytes[0] == b'`' => {
                    scan_quoted(bytes, 0, b'`', false)
                }
                StringStyle::BitSingleQuoted => scan_prefixed_quoted(bytes, b"bB"),
                StringStyle::HexSingleQuoted => scan_prefixed_quoted(bytes, b"xX"),
                StringStyle::NationalSingleQuoted => scan_prefixed_quoted(bytes, b"nN"),
                StringStyle::EscapeSingleQuoted => scan_prefixed_quoted(bytes, b"eE"),
                StringStyle::RawSingleQuoted => scan_prefixed_quoted(bytes, b"rR"),
                _ => 0,
            };
            if len > 0 {
                return Some(len);
            }
        }
        None
    }

    fn match_quoted_ident(&self, rest: &str) -> Option<(usize, String)> {
        let bytes = rest.as_bytes();
        for style in &self.ident_styles {
            let len = match style {
                IdentStyle::DoubleQuoted if bytes[0] == b'"' => scan_quoted(bytes, 0, b'"', false),
                IdentStyle::BacktickQuoted if bytes[0] == b'`' => {
                    scan_quoted(bytes, 0, b'`', false)
                }
                IdentStyle::Bracketed if bytes[0] == b'[' => scan_bracketed(bytes),
                _ => 0,
            };
            if len > 0 {
                let inner = strip_wrappers(&rest[..len]);
                return Some((len, inner));
            }
        }
        None
    }

    /// Walk the word trie, remembering the last terminal node. Returns the
    /// longest reserved match starting at the head of `rest`.
    fn match_reserved(&self, rest: &str) -> Option<(usize, TokenKind)> {
        let bytes = rest.as_bytes();
        if !is_word_start(bytes[0]) {
            return None;
        }
        let first_len = scan_word(bytes);
        let mut node = self.trie.children.get(&rest[..first_len].to_uppercase())?;
        let mut best = node.terminal.map(|kind| (first_len, kind));
        let mut cursor = first_len;

        loop {
            let ws = scan_whitespace(&bytes[cursor..]);
            if ws == 0 {
                break;
            }
            let word_start = cursor + ws;
            let word_len = scan_word(&bytes[word_start..]);
            if word_len == 0 {
                break;
            }
            let word = rest[word_start..word_start + word_len].to_uppercase();
            match node.children.get(&word) {
                Some(child) => {
                    node = child;
                    cursor = word_start + word_len;
                    if let Some(kind) = node.terminal {
                        best = Some((cursor, kind));
                    }
                }
                None => break,
            }
        }

        best
    }

    fn match_placeholder_or_variable(
        &self,
        rest: &str,
    ) -> Option<(usize, TokenKind, Option<String>)> {
        let bytes = rest.as_bytes();

        // `@@name` system variables take priority over `@name` placeholders.
        if self.variable_styles.contains(&VariableStyle::DoubleAtName)
            && rest.starts_with("@@")
        {
            let word_len = scan_word(&bytes[2..]);
            if word_len > 0 {
                return Some((2 + word_len, TokenKind::Variable, None));
            }
        }

        for style in &self.placeholder_styles {
            let matched = match style {
                PlaceholderStyle::NumberedQuestionMark if bytes[0] == b'?' => {
                    let digits = scan_digits(&bytes[1..]);
                    (digits > 0).then(|| (1 + digits, rest[1..1 + digits].to_string()))
                }
                PlaceholderStyle::QuestionMark if bytes[0] == b'?' => {
                    Some((1, String::new()))
                }
                PlaceholderStyle::NumberedDollar if bytes[0] == b'$' => {
                    let digits = scan_digits(&bytes[1..]);
                    (digits > 0).then(|| (1 + digits, rest[1..1 + digits].to_string()))
                }
                PlaceholderStyle::NamedDollar if bytes[0] == b'$' => {
                    let word_len = scan_word(&bytes[1..]);
                    (word_len > 0).then(|| (1 + word_len, rest[1..1 + word_len].to_string()))
                }
                PlaceholderStyle::NamedColon
                    if bytes[0] == b':' && bytes.get(1) != Some(&b':') =>
                {
                    scan_name_after_prefix(rest)
                }
                PlaceholderStyle::NamedAt if bytes[0] == b'@' => scan_name_after_prefix(rest),
                _ => None,
            };
            if let Some((len, key)) = matched {
                return Some((len, TokenKind::Placeholder, Some(key)));
            }
        }

        for style in &self.variable_styles {
            let len = match style {
                VariableStyle::AtName if bytes[0] == b'@' => {
                    scan_name_after_prefix(rest).map(|(len, _)| len).unwrap_or(0)
                }
                VariableStyle::DollarName if bytes[0] == b'$' => {
                    let word_len = scan_word(&bytes[1..]);
                    if word_len > 0 {
                        1 + word_len
                    } else {
                        0
                    }
                }
                _ => 0,
            };
            if len > 0 {
                return Some((len, TokenKind::Variable, None));
            }
        }

        None
    }
}

fn style_priority(style: StringStyle) -> u8 {
    match style {
        StringStyle::TripleQuoted => 0,
        StringStyle::DollarQuoted => 1,
        StringStyle::BitSingleQuoted
        | StringStyle::HexSingleQuoted
        | StringStyle::NationalSingleQuoted
        | StringStyle::EscapeSingleQuoted
        | StringStyle::RawSingleQuoted => 2,
        StringStyle::SingleQuoted
        | StringStyle::DoubleQuoted
        | StringStyle::BacktickQuoted => 3,
    }
}

// ---- Byte scanners ----

#[inline]
fn scan_whitespace(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

#[inline]
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// Word characters: alphanumeric, underscore, `$`, and non-ASCII.
#[inline]
fn scan_word(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80 {
            i += 1;
        } else {
            break;
        }
    }
    i
}

#[inline]
fn scan_digits(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Scan a quoted run starting at `bytes[start]`. Doubled closing quotes
/// always escape; `backslash` additionally enables backslash escapes.
/// Returns total length including delimiters; unterminated runs extend to the
/// end of input.
fn scan_quoted(bytes: &[u8], start: usize, quote: u8, backslash: bool) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        if backslash && bytes[i] == b'\\' && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1 - start;
        }
        i += 1;
    }
    bytes.len() - start
}

/// `X'...'`-style literal: a one-letter prefix directly followed by a
/// single-quoted run. Returns 0 when not applicable.
fn scan_prefixed_quoted(bytes: &[u8], prefixes: &[u8]) -> usize {
    if bytes.len() >= 2 && prefixes.contains(&bytes[0]) && bytes[1] == b'\'' {
        1 + scan_quoted(bytes, 1, b'\'', false)
    } else {
        0
    }
}

/// `[bracketed identifier]` with `]]` escaping.
fn scan_bracketed(bytes: &[u8]) -> usize {
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b']' {
            if bytes.get(i + 1) == Some(&b']') {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// `'''...'''` or `"""..."""`.
fn scan_triple_quoted(bytes: &[u8], quote: u8) -> usize {
    let mut i = 3;
    while i + 2 < bytes.len() {
        if bytes[i] == quote && bytes[i + 1] == quote && bytes[i + 2] == quote {
            return i + 3;
        }
        i += 1;
    }
    bytes.len()
}

/// `$tag$...$tag$`. Returns 0 when the head is not a dollar-quote opener.
fn scan_dollar_quoted(bytes: &[u8]) -> usize {
    let mut tag_end = 1;
    while tag_end < bytes.len()
        && (bytes[tag_end].is_ascii_alphanumeric() || bytes[tag_end] == b'_')
    {
        tag_end += 1;
    }
    if tag_end >= bytes.len() || bytes[tag_end] != b'$' {
        return 0;
    }
    let tag = &bytes[..tag_end + 1];
    let mut i = tag.len();
    while i + tag.len() <= bytes.len() {
        if bytes[i] == b'$' && bytes[i..].starts_with(tag) {
            return i + tag.len();
        }
        i += 1;
    }
    bytes.len()
}

/// `/* ... */`; unterminated comments extend to the end of input.
fn scan_block_comment(bytes: &[u8]) -> usize {
    let mut i = 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// A name after a one-byte placeholder prefix: a word, or a quoted run using
/// any quote character. Returns (total length, unwrapped key).
fn scan_name_after_prefix(rest: &str) -> Option<(usize, String)> {
    let bytes = rest.as_bytes();
    let word_len = scan_word(&bytes[1..]);
    if word_len > 0 {
        return Some((1 + word_len, rest[1..1 + word_len].to_string()));
    }
    match bytes.get(1).copied() {
        Some(q @ (b'\'' | b'"' | b'`')) => {
            let quoted_len = scan_quoted(bytes, 1, q, false);
            let inner = strip_wrappers(&rest[1..1 + quoted_len]);
            Some((1 + quoted_len, inner))
        }
        _ => None,
    }
}

/// Strip one leading and one trailing delimiter character.
fn strip_wrappers(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    let mut inner: String = chars.collect();
    inner.pop();
    inner
}

/// Numbers: integer, decimal, scientific, hex (`0x`), binary (`0b`). A
/// leading sign is folded in only when the previous significant token cannot
/// end an expression.
fn match_number(bytes: &[u8], prev_kind: Option<TokenKind>) -> Option<usize> {
    let mut i = 0;
    if bytes[0] == b'-' || bytes[0] == b'+' {
        if !sign_is_unambiguous(prev_kind) {
            return None;
        }
        i = 1;
    }
    if i >= bytes.len() {
        return None;
    }

    if bytes[i] == b'0' && i + 1 < bytes.len() {
        match bytes[i + 1] {
            b'x' | b'X' => {
                let mut j = i + 2;
                while j < bytes.len() && bytes[j].is_ascii_hexdigit() {
                    j += 1;
                }
                if j > i + 2 {
                    return Some(j);
                }
            }
            b'b' | b'B' => {
                let mut j = i + 2;
                while j < bytes.len() && (bytes[j] == b'0' || bytes[j] == b'1') {
                    j += 1;
                }
                if j > i + 2 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }

    let int_digits = scan_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    // A `.` that is part of a `..` range operator stays out of the number.
    if i < bytes.len() && bytes[i] == b'.' && bytes.get(i + 1) != Some(&b'.') {
        let frac = scan_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac > 0 {
            i += 1 + frac;
            frac_digits = frac;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Scientific notation
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp = scan_digits(&bytes[j..]);
        if exp > 0 {
            i = j + exp;
        }
    }

    Some(i)
}

fn sign_is_unambiguous(prev_kind: Option<TokenKind>) -> bool {
    match prev_kind {
        None => true,
        Some(kind) => {
            matches!(kind, TokenKind::Operator | TokenKind::BlockStart)
                || (kind.is_reserved() && kind != TokenKind::ReservedCaseEnd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;

    fn lex(source: &str) -> Vec<Token> {
        let dialect = dialects::dialect_from_name("sql").unwrap();
        Tokenizer::new(&dialect).tokenize(source)
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_select() {
        let tokens = lex("SELECT a FROM t");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::ReservedCommand,
                TokenKind::Identifier,
                TokenKind::ReservedCommand,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_preserved_on_tokens() {
        let tokens = lex("SELECT  a\n FROM t ");
        assert_eq!(tokens[1].whitespace_before, "  ");
        assert_eq!(tokens[2].whitespace_before, "\n ");
        // Rebuilding whitespace_before + text reproduces the input.
        let rebuilt: String = tokens
            .iter()
            .map(|t| format!("{}{}", t.whitespace_before, t.text))
            .collect();
        assert_eq!(rebuilt, "SELECT  a\n FROM t ");
    }

    #[test]
    fn test_multi_word_reserved_collapses_value() {
        let tokens = lex("order   by x");
        assert_eq!(tokens[0].kind, TokenKind::ReservedCommand);
        assert_eq!(tokens[0].text, "order   by");
        assert_eq!(tokens[0].value, "order by");
    }

    #[test]
    fn test_longest_multi_word_wins() {
        let tokens = lex("a LEFT OUTER JOIN b");
        assert_eq!(tokens[1].kind, TokenKind::ReservedBinaryCommand);
        assert_eq!(tokens[1].value, "LEFT OUTER JOIN");
    }

    #[test]
    fn test_unknown_keyword_is_identifier() {
        let tokens = lex("frobnicate x");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_line_and_block_comments() {
        let tokens = lex("SELECT 1 -- trailing\n/* block */ FROM t");
        assert_eq!(tokens[2].kind, TokenKind::LineComment);
        assert_eq!(tokens[2].text, "-- trailing");
        assert_eq!(tokens[3].kind, TokenKind::BlockComment);
        assert_eq!(tokens[3].text, "/* block */");
    }

    #[test]
    fn test_string_with_doubled_quote() {
        let tokens = lex("SELECT 'it''s'");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "'it''s'");
    }

    #[test]
    fn test_quoted_identifier_strips_value() {
        let tokens = lex("SELECT \"My Column\"");
        assert_eq!(tokens[1].kind, TokenKind::QuotedIdentifier);
        assert_eq!(tokens[1].text, "\"My Column\"");
        assert_eq!(tokens[1].value, "My Column");
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("SELECT 1, 2.5, .5, 1e10, 0xFF");
        let numbers: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "2.5", ".5", "1e10", "0xFF"]);
    }

    #[test]
    fn test_negative_number_after_operator() {
        let tokens = lex("WHERE x = -1");
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "-1");
    }

    #[test]
    fn test_minus_between_identifiers_is_operator() {
        let tokens = lex("SELECT a -1");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "-");
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].text, "1");
    }

    #[test]
    fn test_property_access_dot() {
        let tokens = lex("SELECT a.b");
        assert_eq!(tokens[2].kind, TokenKind::PropertyAccessOperator);
    }

    #[test]
    fn test_compound_operator_longest_match() {
        let tokens = lex("WHERE a <= b");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "<=");
    }

    #[test]
    fn test_fallback_single_char_operator() {
        let tokens = lex("SELECT a ~ b");
        assert_eq!(tokens[2].kind, TokenKind::Operator);
        assert_eq!(tokens[2].text, "~");
    }

    #[test]
    fn test_non_ascii_identifier() {
        let tokens = lex("SELECT übung FROM t");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "übung");
    }

    #[test]
    fn test_question_mark_placeholder() {
        let tokens = lex("WHERE id = ?");
        assert_eq!(tokens[3].kind, TokenKind::Placeholder);
        assert_eq!(tokens[3].value, "");
    }

    #[test]
    fn test_postgres_dollar_placeholder_and_string() {
        let dialect = dialects::dialect_from_name("postgresql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("SELECT $1, $tag$body$tag$");
        assert_eq!(tokens[1].kind, TokenKind::Placeholder);
        assert_eq!(tokens[1].value, "1");
        assert_eq!(tokens[3].kind, TokenKind::String);
        assert_eq!(tokens[3].text, "$tag$body$tag$");
    }

    #[test]
    fn test_mysql_variables_and_hash_comment() {
        let dialect = dialects::dialect_from_name("mysql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("SELECT @x, @@version # note");
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert_eq!(tokens[1].text, "@x");
        assert_eq!(tokens[3].kind, TokenKind::Variable);
        assert_eq!(tokens[3].text, "@@version");
        assert_eq!(tokens[4].kind, TokenKind::LineComment);
    }

    #[test]
    fn test_tsql_bracketed_identifier() {
        let dialect = dialects::dialect_from_name("tsql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("SELECT [My Col] FROM [T]");
        assert_eq!(tokens[1].kind, TokenKind::QuotedIdentifier);
        assert_eq!(tokens[1].value, "My Col");
    }

    #[test]
    fn test_named_colon_placeholder() {
        let dialect = dialects::dialect_from_name("plsql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("WHERE id = :id AND x = :'q id'");
        assert_eq!(tokens[3].kind, TokenKind::Placeholder);
        assert_eq!(tokens[3].value, "id");
        assert_eq!(tokens[7].kind, TokenKind::Placeholder);
        assert_eq!(tokens[7].value, "q id");
    }

    #[test]
    fn test_double_colon_is_operator_not_placeholder() {
        let dialect = dialects::dialect_from_name("plsql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("a::b");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, "::");
    }

    #[test]
    fn test_brackets_block_tokens_in_array_dialect() {
        let dialect = dialects::dialect_from_name("postgresql").unwrap();
        let tokens = Tokenizer::new(&dialect).tokenize("arr[1]");
        assert_eq!(tokens[1].kind, TokenKind::BlockStart);
        assert_eq!(tokens[3].kind, TokenKind::BlockEnd);
    }

    #[test]
    fn test_unterminated_string_extends_to_eof() {
        let tokens = lex("SELECT 'oops");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "'oops");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_carries_trailing_whitespace() {
        let tokens = lex("SELECT 1  \n");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.whitespace_before, "  \n");
    }
}
