//! Statement formatter: a single-pass state machine over the token stream
//! that owns the output buffer and indentation discipline.

use crate::alias::AliasEngine;
use crate::error::Result;
use crate::indentation::Indentation;
use crate::inline_block::InlineBlock;
use crate::options::{FormatOptions, LogicalOperatorNewline, MultilineLists};
use crate::params::ParamResolver;
use crate::token::{Token, TokenKind};

/// Marker wrapped around alignable reserved words in tabular modes; the
/// post-processor pads between marker pairs and strips them.
pub const TABULAR_MARKER: char = '\u{1}';

pub struct StatementFormatter<'a> {
    cfg: &'a FormatOptions,
    tokens: &'a [Token],
    out: String,
    indentation: Indentation,
    inline_block: InlineBlock,
    params: ParamResolver<'a>,
    alias: AliasEngine,
    current_newline: bool,
    previous_reserved: Option<Token>,
}

impl<'a> StatementFormatter<'a> {
    pub fn new(cfg: &'a FormatOptions, tokens: &'a [Token]) -> Self {
        Self {
            cfg,
            tokens,
            out: String::new(),
            indentation: Indentation::new(cfg.indent_step()),
            inline_block: InlineBlock::new(cfg.expression_width),
            params: ParamResolver::new(&cfg.params),
            alias: AliasEngine::new(cfg.alias_as, tokens),
            current_newline: true,
            previous_reserved: None,
        }
    }

    /// Format one statement. Indentation state is local to the statement.
    pub fn format(mut self) -> Result<String> {
        for index in 0..self.tokens.len() {
            let token = self.tokens[index].clone();
            let token = &token;
            match token.kind {
                TokenKind::LineComment => self.format_line_comment(token),
                TokenKind::BlockComment => self.format_block_comment(token),
                TokenKind::ReservedCommand => {
                    self.format_command(token, index);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedBinaryCommand => {
                    self.format_binary_command(token);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedDependentClause => {
                    self.add_newline();
                    let shown = self.show_tabular(token);
                    self.add_with_spaces(&shown);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedJoinCondition => {
                    let shown = self.show(token);
                    self.add_with_spaces(&shown);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedLogicalOperator => {
                    self.format_logical_operator(token, index);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedKeyword
                | TokenKind::ReservedFunctionName
                | TokenKind::ReservedDataType
                | TokenKind::ReservedParameterizedDataType => {
                    if token.value_is("AS")
                        && self.alias.should_remove(self.significant_after(index))
                    {
                        continue;
                    }
                    let shown = self.show(token);
                    self.add_with_spaces(&shown);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedCaseStart => {
                    let shown = self.show(token);
                    self.add_with_spaces(&shown);
                    self.indentation.increase_block_level();
                    if self.cfg.multiline_lists == MultilineLists::Always {
                        self.add_newline();
                    }
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::ReservedCaseEnd => {
                    self.indentation.decrease_block_level();
                    self.add_newline();
                    let shown = self.show(token);
                    self.add_with_spaces(&shown);
                    self.previous_reserved = Some(token.clone());
                }
                TokenKind::BlockStart => self.format_block_start(token, index),
                TokenKind::BlockEnd => self.format_block_end(token),
                TokenKind::Placeholder => {
                    let value = self.params.resolve(token)?;
                    self.add_with_spaces(&value);
                }
                TokenKind::Operator | TokenKind::PropertyAccessOperator => {
                    self.format_operator(token, index)
                }
                TokenKind::Eof => {}
                _ => self.format_word(token, index),
            }
        }
        Ok(self.out.trim().to_string())
    }

    // ---- Per-category handlers ----

    fn format_command(&mut self, token: &Token, index: usize) {
        self.current_newline = self.decide_multiline(token, index);
        let tabular = self.cfg.indent_style.is_tabular();

        self.indentation.decrease_top_level();
        self.add_newline();
        let next_is_paren = self
            .significant_after(index)
            .is_some_and(|t| t.text == "(");
        if !tabular || !next_is_paren {
            self.indentation.increase_top_level();
        }

        let shown = self.show_tabular(token);
        self.out.push_str(&shown);
        if self.current_newline && !tabular {
            self.add_newline();
        } else {
            self.out.push(' ');
        }
    }

    fn format_binary_command(&mut self, token: &Token) {
        let is_join = token.value.to_uppercase().contains("JOIN");
        let tabular = self.cfg.indent_style.is_tabular();
        if !(is_join && !tabular) {
            self.indentation.decrease_top_level();
        }
        self.add_newline();
        let shown = self.show_tabular(token);
        self.out.push_str(&shown);
        if is_join {
            self.out.push(' ');
        } else {
            self.add_newline();
        }
    }

    fn format_logical_operator(&mut self, token: &Token, index: usize) {
        // BETWEEN 1 AND 2 keeps its AND inline.
        if token.value_is("AND")
            && index >= 2
            && self.tokens[index - 2].value_is("BETWEEN")
        {
            let shown = self.show(token);
            self.add_with_spaces(&shown);
            return;
        }

        if self.cfg.indent_style.is_tabular() {
            self.indentation.decrease_top_level();
        }

        // Inline blocks suppress newlines between their parens.
        let break_line = self.current_newline && !self.inline_block.is_active();
        let shown = self.show_tabular(token);
        match self.cfg.logical_operator_newline {
            LogicalOperatorNewline::Before => {
                if break_line {
                    self.add_newline();
                }
                self.add_with_spaces(&shown);
            }
            LogicalOperatorNewline::After => {
                self.add_with_spaces(&shown);
                if break_line {
                    self.add_newline();
                }
            }
        }
    }

    fn format_block_start(&mut self, token: &Token, index: usize) {
        self.inline_block.begin_if_possible(self.tokens, index);

        let preserve_space = self
            .raw_before(index)
            .map(|t| {
                matches!(
                    t.kind,
                    TokenKind::BlockStart | TokenKind::LineComment | TokenKind::Operator
                )
            })
            .unwrap_or(true);
        // Gluing never pulls the paren back across a line break.
        let at_line_start = {
            let trimmed = self.out.trim_end_matches([' ', '\t']);
            trimmed.is_empty() || trimmed.ends_with('\n')
        };
        let shown = self.show(token);
        if !preserve_space && token.whitespace_before.is_empty() && !at_line_start {
            self.add_without_spaces(&shown);
        } else if !self.inline_block.is_active() && self.cfg.newline_before_open_paren {
            self.add_newline();
            self.out.push_str(&shown);
        } else {
            self.add_with_space_before(&shown);
        }

        if !self.inline_block.is_active() {
            self.indentation.increase_block_level();
            self.add_newline();
        }
    }

    fn format_block_end(&mut self, token: &Token) {
        let shown = self.show(token);
        if self.inline_block.is_active() {
            self.inline_block.end();
            self.add_with_space_after(&shown);
            return;
        }
        self.indentation.decrease_block_level();
        if self.cfg.indent_style.is_tabular() {
            self.add_newline();
            let step = self.indentation.step().to_string();
            self.out.push_str(&step);
            self.out.push_str(&shown);
            self.out.push(' ');
        } else if self.cfg.newline_before_close_paren {
            self.add_newline();
            self.add_with_spaces(&shown);
        } else {
            self.add_with_spaces(&shown);
        }
    }

    fn format_operator(&mut self, token: &Token, index: usize) {
        match token.text.as_str() {
            "," => {
                self.add_with_space_after(",");
                if self.inline_block.is_active() {
                    return;
                }
                if self
                    .previous_reserved
                    .as_ref()
                    .is_some_and(|t| t.value_is("LIMIT"))
                {
                    return;
                }
                if self.current_newline {
                    self.add_newline();
                }
            }
            ";" => {
                self.indentation.reset();
                if self.cfg.newline_before_semicolon {
                    self.add_newline();
                } else {
                    trim_trailing_whitespace(&mut self.out);
                }
                self.out.push(';');
            }
            "$" | "[" => self.add_with_space_before(&token.text),
            ":" | "]" => self.add_with_space_after(&token.text),
            "." | "{" | "}" | "`" => self.add_without_spaces(&token.text),
            _ => {
                let dense = self.cfg.dense_operators
                    && self
                        .raw_before(index)
                        .map_or(true, |t| t.kind != TokenKind::ReservedCommand);
                if dense {
                    self.add_without_spaces(&token.text);
                } else {
                    self.add_with_spaces(&token.text);
                }
            }
        }
    }

    /// Identifiers, numbers, strings, variables, and array keywords; consults
    /// the alias engine around the emission.
    fn format_word(&mut self, token: &Token, index: usize) {
        if self
            .alias
            .should_add_before(self.significant_before(index), token)
        {
            let as_kw = self.cfg.keyword_case.apply(self.alias.as_keyword());
            self.add_with_spaces(&as_kw);
        }

        let shown = self.show(token);
        self.add_with_spaces(&shown);

        if self
            .alias
            .should_add_after(token, self.significant_after(index))
        {
            let as_kw = self.cfg.keyword_case.apply(self.alias.as_keyword());
            self.add_with_spaces(&as_kw);
        }
    }

    fn format_line_comment(&mut self, token: &Token) {
        if !self.out.is_empty() && !self.out.ends_with([' ', '\n', '\t']) {
            self.out.push(' ');
        }
        self.out.push_str(&token.text);
        self.add_newline();
    }

    fn format_block_comment(&mut self, token: &Token) {
        self.add_newline();
        let indented = self.indent_comment(&token.text);
        self.out.push_str(&indented);
        self.add_newline();
    }

    /// Re-indent the inner lines of a block comment to the current indent,
    /// with one extra space so `*` lines align under `/*`.
    fn indent_comment(&self, comment: &str) -> String {
        let indent = self.indentation.get_indent();
        let mut lines = comment.lines();
        let mut result = lines.next().unwrap_or_default().to_string();
        for line in lines {
            result.push('\n');
            result.push_str(&indent);
            result.push(' ');
            result.push_str(line.trim_start());
        }
        result
    }

    // ---- multilineLists decision ----

    fn decide_multiline(&self, token: &Token, index: usize) -> bool {
        let tail = self.clause_tail(index);

        // A CASE in a SELECT list always breaks the list open.
        if token.value_is("SELECT")
            && tail.iter().any(|t| t.kind == TokenKind::ReservedCaseStart)
        {
            return true;
        }

        match self.cfg.multiline_lists {
            MultilineLists::Always => true,
            MultilineLists::Avoid => false,
            MultilineLists::ExpressionWidth => {
                self.inline_width(token, &tail) > self.cfg.expression_width
            }
            MultilineLists::ItemCount(max_items) => {
                clause_count(&tail) > max_items
                    || self.inline_width(token, &tail) > self.cfg.expression_width
            }
        }
    }

    /// Tokens from just after the command at `index` up to the next command,
    /// set operator/join, or statement terminator. Binary commands bound the
    /// tail too: what follows them belongs to the next clause, not this
    /// command's operand list.
    fn clause_tail(&self, index: usize) -> Vec<&Token> {
        self.tokens[index + 1..]
            .iter()
            .take_while(|t| {
                t.kind != TokenKind::ReservedCommand
                    && t.kind != TokenKind::ReservedBinaryCommand
                    && !(t.kind == TokenKind::Operator && t.text == ";")
            })
            .collect()
    }

    fn inline_width(&self, token: &Token, tail: &[&Token]) -> usize {
        let mut width = token.whitespace_before.len() + token.value.len() + 1;
        for t in tail {
            if t.text == "," {
                width += 1;
            } else {
                width += t.value.len() + 1;
            }
        }
        width
    }

    // ---- Token rendering ----

    /// The output text for a token, after the configured case policy.
    fn show(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::ReservedCommand
            | TokenKind::ReservedBinaryCommand
            | TokenKind::ReservedDependentClause
            | TokenKind::ReservedJoinCondition
            | TokenKind::ReservedLogicalOperator
            | TokenKind::ReservedKeyword
            | TokenKind::ReservedCaseStart
            | TokenKind::ReservedCaseEnd => self.cfg.keyword_case.apply(&token.value),
            TokenKind::ReservedFunctionName => self.cfg.function_case.apply(&token.value),
            TokenKind::ReservedDataType
            | TokenKind::ReservedParameterizedDataType
            | TokenKind::ArrayKeyword => self.cfg.data_type_case.apply(&token.value),
            TokenKind::Identifier | TokenKind::ArrayIdentifier => {
                self.cfg.identifier_case.apply(&token.text)
            }
            _ => token.text.clone(),
        }
    }

    /// Like `show`, wrapped in alignment markers in tabular modes.
    fn show_tabular(&self, token: &Token) -> String {
        let shown = self.show(token);
        if self.cfg.indent_style.is_tabular() {
            format!("{}{}{}", TABULAR_MARKER, shown, TABULAR_MARKER)
        } else {
            shown
        }
    }

    // ---- Raw-stream context ----

    fn raw_before(&self, index: usize) -> Option<&Token> {
        index.checked_sub(1).map(|i| &self.tokens[i])
    }

    fn significant_before(&self, index: usize) -> Option<&Token> {
        self.tokens[..index]
            .iter()
            .rev()
            .find(|t| !t.kind.is_comment())
    }

    fn significant_after(&self, index: usize) -> Option<&Token> {
        self.tokens[index + 1..]
            .iter()
            .find(|t| !t.kind.is_comment() && t.kind != TokenKind::Eof)
    }

    // ---- Output buffer helpers ----
    //
    // Most emitters leave one trailing space; glue emitters trim it back.
    // `add_newline` trims trailing spaces first, so consecutive calls
    // collapse into a single line break.

    fn add_with_spaces(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push(' ');
    }

    fn add_with_space_before(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn add_with_space_after(&mut self, text: &str) {
        trim_spaces_end(&mut self.out);
        self.out.push_str(text);
        self.out.push(' ');
    }

    fn add_without_spaces(&mut self, text: &str) {
        trim_spaces_end(&mut self.out);
        self.out.push_str(text);
    }

    fn add_newline(&mut self) {
        trim_spaces_end(&mut self.out);
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push_str(&self.indentation.get_indent());
    }
}

fn trim_spaces_end(out: &mut String) {
    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
}

fn trim_trailing_whitespace(out: &mut String) {
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
}

fn clause_count(tail: &[&Token]) -> usize {
    let mut depth = 0usize;
    let mut count = 1usize;
    for token in tail {
        match token.kind {
            TokenKind::BlockStart => depth += 1,
            TokenKind::BlockEnd => depth = depth.saturating_sub(1),
            TokenKind::Operator if token.text == "," && depth == 0 => count += 1,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects;
    use crate::disambiguator::disambiguate;
    use crate::lexer::Tokenizer;
    use crate::segmenter::segment;

    fn format_one(source: &str, cfg: &FormatOptions) -> String {
        let dialect = dialects::dialect_from_name(&cfg.language).unwrap();
        let tokens = disambiguate(Tokenizer::new(&dialect).tokenize(source));
        let statements = segment(&tokens);
        StatementFormatter::new(cfg, &statements[0]).format().unwrap()
    }

    #[test]
    fn test_select_one() {
        let cfg = FormatOptions::default();
        assert_eq!(format_one("select 1", &cfg), "SELECT\n  1");
    }

    #[test]
    fn test_basic_query_layout() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select a,b from t where x>1", &cfg),
            "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x > 1"
        );
    }

    #[test]
    fn test_function_call_glued() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select count(*) from t", &cfg),
            "SELECT\n  COUNT(*)\nFROM\n  t"
        );
    }

    #[test]
    fn test_property_access_glued() {
        let cfg = FormatOptions::default();
        assert_eq!(format_one("select a.b from t", &cfg), "SELECT\n  a.b\nFROM\n  t");
    }

    #[test]
    fn test_between_and_stays_inline() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select * from t where x between 1 and 2", &cfg),
            "SELECT\n  *\nFROM\n  t\nWHERE\n  x BETWEEN 1 AND 2"
        );
    }

    #[test]
    fn test_logical_operator_newline_before() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select * from t where a = 1 and b = 2", &cfg),
            "SELECT\n  *\nFROM\n  t\nWHERE\n  a = 1\n  AND b = 2"
        );
    }

    #[test]
    fn test_logical_operator_newline_after() {
        let cfg = FormatOptions {
            logical_operator_newline: LogicalOperatorNewline::After,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_one("select * from t where a = 1 and b = 2", &cfg),
            "SELECT\n  *\nFROM\n  t\nWHERE\n  a = 1 AND\n  b = 2"
        );
    }

    #[test]
    fn test_case_expression_multiline() {
        let cfg = FormatOptions::default();
        let result = format_one("select case when a then 1 else 2 end from t", &cfg);
        assert_eq!(
            result,
            "SELECT\n  CASE\n    WHEN a THEN 1\n    ELSE 2\n  END\nFROM\n  t"
        );
    }

    #[test]
    fn test_join_keeps_condition_inline() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select * from a join b on a.id = b.id", &cfg),
            "SELECT\n  *\nFROM\n  a\n  JOIN b ON a.id = b.id"
        );
    }

    #[test]
    fn test_union_dedents() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select 1 union all select 2", &cfg),
            "SELECT\n  1\nUNION ALL\nSELECT\n  2"
        );
    }

    #[test]
    fn test_semicolon_glued() {
        let cfg = FormatOptions::default();
        assert_eq!(format_one("select 1;", &cfg), "SELECT\n  1;");
    }

    #[test]
    fn test_newline_before_semicolon() {
        let cfg = FormatOptions {
            newline_before_semicolon: true,
            ..FormatOptions::default()
        };
        assert_eq!(format_one("select 1;", &cfg), "SELECT\n  1\n;");
    }

    #[test]
    fn test_dense_operators() {
        let cfg = FormatOptions {
            dense_operators: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_one("select * from t where a = 1", &cfg),
            "SELECT\n  *\nFROM\n  t\nWHERE\n  a=1"
        );
    }

    #[test]
    fn test_limit_comma_stays_inline() {
        let cfg = FormatOptions::default();
        assert_eq!(
            format_one("select * from t limit 10, 20", &cfg),
            "SELECT\n  *\nFROM\n  t\nLIMIT\n  10, 20"
        );
    }

    #[test]
    fn test_multiline_lists_avoid() {
        let cfg = FormatOptions {
            multiline_lists: MultilineLists::Avoid,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_one("select a, b from t", &cfg),
            "SELECT a, b\nFROM t"
        );
    }

    #[test]
    fn test_line_comment_preserved() {
        let cfg = FormatOptions::default();
        let result = format_one("select 1 -- one\nfrom t", &cfg);
        assert_eq!(result, "SELECT\n  1 -- one\nFROM\n  t");
    }

    #[test]
    fn test_keyword_case_preserve() {
        let cfg = FormatOptions {
            keyword_case: crate::options::LetterCase::Preserve,
            function_case: crate::options::LetterCase::Preserve,
            ..FormatOptions::default()
        };
        assert_eq!(format_one("Select 1", &cfg), "Select\n  1");
    }

    #[test]
    fn test_identifier_case_upper() {
        let cfg = FormatOptions {
            identifier_case: crate::options::LetterCase::Upper,
            ..FormatOptions::default()
        };
        assert_eq!(format_one("select foo from t", &cfg), "SELECT\n  FOO\nFROM\n  T");
    }

    #[test]
    fn test_subquery_block_layout() {
        let cfg = FormatOptions::default();
        let result = format_one("select * from (select id from u) x", &cfg);
        assert_eq!(
            result,
            "SELECT\n  *\nFROM\n  (\n    SELECT\n      id\n    FROM\n      u\n  ) x"
        );
    }

    #[test]
    fn test_alias_as_always() {
        let cfg = FormatOptions {
            alias_as: crate::options::AliasAs::Always,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_one("select a b from t", &cfg),
            "SELECT\n  a AS b\nFROM\n  t"
        );
    }

    #[test]
    fn test_alias_as_never() {
        let cfg = FormatOptions {
            alias_as: crate::options::AliasAs::Never,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_one("select a as b from t", &cfg),
            "SELECT\n  a b\nFROM\n  t"
        );
    }
}
