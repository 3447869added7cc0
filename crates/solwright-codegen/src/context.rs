use std::collections::BTreeSet;

/// Tracks state during code emission: indentation and collected imports.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indent level
    indent_width: usize,
    /// Collected import paths (deduped, lexically ordered)
    imports: BTreeSet<ImportIR>,
}

/// A single import to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportIR {
    /// Source path (e.g., "@solwright/contracts/ethereum/erc20/ERC20.sol")
    pub path: String,
}

impl EmitContext {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_level: 0,
            indent_width,
            imports: BTreeSet::new(),
        }
    }

    /// Get the current indentation string.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_level * self.indent_width)
    }

    /// Prefix `text` with the current indentation.
    pub fn line(&self, text: &str) -> String {
        format!("{}{}", self.indent(), text)
    }

    /// Increase indentation by one level.
    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Add an import path to the collection (deduped).
    pub fn add_import(&mut self, path: impl Into<String>) {
        self.imports.insert(ImportIR { path: path.into() });
    }

    /// Get all collected imports in lexical order.
    pub fn imports(&self) -> &BTreeSet<ImportIR> {
        &self.imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_spaces() {
        let mut ctx = EmitContext::new(4);
        assert_eq!(ctx.indent(), "");
        ctx.push_indent();
        assert_eq!(ctx.indent(), "    ");
        assert_eq!(ctx.line("_pause();"), "    _pause();");
        ctx.pop_indent();
        ctx.pop_indent();
        assert_eq!(ctx.indent(), "");
    }

    #[test]
    fn test_indent_width() {
        let mut ctx = EmitContext::new(2);
        ctx.push_indent();
        ctx.push_indent();
        assert_eq!(ctx.line("}"), "    }");
    }

    #[test]
    fn test_imports_dedup_and_sorted() {
        let mut ctx = EmitContext::new(4);
        ctx.add_import("b/Pausable.sol");
        ctx.add_import("a/ERC20.sol");
        ctx.add_import("b/Pausable.sol");
        let paths: Vec<&str> = ctx.imports().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["a/ERC20.sol", "b/Pausable.sol"]);
    }
}
