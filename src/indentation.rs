//! Indentation state for one statement.
//!
//! Two kinds of indent: top-level (opened by reserved commands) and
//! block-level (opened by parens and `CASE`). A stack realizes the two
//! counters so that closing a block also discards the top-level indents
//! opened inside it. Pops on an empty stack are no-ops.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentKind {
    TopLevel,
    BlockLevel,
}

#[derive(Debug)]
pub struct Indentation {
    step: String,
    kinds: Vec<IndentKind>,
}

impl Indentation {
    pub fn new(step: String) -> Self {
        Self {
            step,
            kinds: Vec::new(),
        }
    }

    /// The current indent string: one step per open level.
    pub fn get_indent(&self) -> String {
        self.step.repeat(self.kinds.len())
    }

    pub fn step(&self) -> &str {
        &self.step
    }

    pub fn increase_top_level(&mut self) {
        self.kinds.push(IndentKind::TopLevel);
    }

    pub fn increase_block_level(&mut self) {
        self.kinds.push(IndentKind::BlockLevel);
    }

    /// Remove the current top-level indent, if one is open.
    pub fn decrease_top_level(&mut self) {
        if self.kinds.last() == Some(&IndentKind::TopLevel) {
            self.kinds.pop();
        }
    }

    /// Close the innermost block, discarding any top-level indents opened
    /// inside it.
    pub fn decrease_block_level(&mut self) {
        while let Some(kind) = self.kinds.pop() {
            if kind != IndentKind::TopLevel {
                break;
            }
        }
    }

    /// Drop all open levels (at statement terminators).
    pub fn reset(&mut self) {
        self.kinds.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indentation() -> Indentation {
        Indentation::new("  ".to_string())
    }

    #[test]
    fn test_starts_flat() {
        assert_eq!(indentation().get_indent(), "");
    }

    #[test]
    fn test_top_level_round_trip() {
        let mut ind = indentation();
        ind.increase_top_level();
        assert_eq!(ind.get_indent(), "  ");
        ind.decrease_top_level();
        assert_eq!(ind.get_indent(), "");
    }

    #[test]
    fn test_decrease_top_level_ignores_block() {
        let mut ind = indentation();
        ind.increase_block_level();
        ind.decrease_top_level();
        assert_eq!(ind.get_indent(), "  ");
    }

    #[test]
    fn test_block_close_discards_inner_top_levels() {
        let mut ind = indentation();
        ind.increase_block_level();
        ind.increase_top_level();
        ind.increase_top_level();
        assert_eq!(ind.get_indent(), "      ");
        ind.decrease_block_level();
        assert_eq!(ind.get_indent(), "");
    }

    #[test]
    fn test_pops_clamp_at_zero() {
        let mut ind = indentation();
        ind.decrease_top_level();
        ind.decrease_block_level();
        assert_eq!(ind.get_indent(), "");
    }

    #[test]
    fn test_tab_step() {
        let mut ind = Indentation::new("\t".to_string());
        ind.increase_top_level();
        ind.increase_block_level();
        assert_eq!(ind.get_indent(), "\t\t");
    }
}
