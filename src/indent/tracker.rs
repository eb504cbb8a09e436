use crate::config::{IndenterConfig, DEFAULT_SYMBOL};
use crate::error::{IndentError, Result};
use crate::indent::guard::IndentGuard;
use crate::indent::operand::{Composed, Operand};

/// Tracks a nesting depth and renders it as a repeated symbol.
///
/// Entering a scope bumps the depth for as long as the returned guard lives:
///
/// ```
/// use indenter::Indenter;
///
/// let mut ind = Indenter::new();
/// {
///     let mut outer = ind.enter_scope();
///     assert_eq!(&*outer + "first level", "  first level");
///     {
///         let inner = outer.enter_scope();
///         assert_eq!(&*inner + "second level", "    second level");
///     }
///     assert_eq!(outer.render(), "  ");
/// }
/// assert_eq!(ind.render(), "");
/// ```
///
/// Arithmetic never touches the operands; it always builds a new `Indenter`.
/// The symbol is fixed at construction. If you need two kinds of indentation
/// at once, keep two trackers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Indenter {
    depth: i64,
    symbol: String,
}

impl Indenter {
    /// Depth 0, two-space symbol.
    pub fn new() -> Self {
        Self {
            depth: 0,
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    pub fn from_config(config: &IndenterConfig) -> Self {
        Self::from(config.clone())
    }

    pub fn with_start(self, start: i64) -> Self {
        Self {
            depth: start,
            symbol: self.symbol,
        }
    }

    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            depth: self.depth,
            symbol: symbol.into(),
        }
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The symbol repeated `depth` times. A depth of zero or less renders as
    /// the empty string.
    pub fn render(&self) -> String {
        let count = usize::try_from(self.depth).unwrap_or(0);
        self.symbol.repeat(count)
    }

    /// Adds one level until the returned guard is dropped.
    ///
    /// The guard dereferences to this same tracker, so nested scopes are
    /// entered through it. Depth saturates at `i64::MAX`; dropping the guard
    /// restores the depth it was entered at.
    pub fn enter_scope(&mut self) -> IndentGuard<'_> {
        let entered_at = self.depth;
        self.depth = self.depth.saturating_add(1);
        IndentGuard::new(self, entered_at)
    }

    pub(crate) fn exit_scope(&mut self, entered_at: i64) {
        self.depth = entered_at;
    }

    /// Runs `f` one level deeper. The level is released even if `f` panics.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Indenter) -> R) -> R {
        let mut guard = self.enter_scope();
        f(&mut *guard)
    }

    /// Adds a tracker or a level count to produce a new tracker, or prefixes
    /// text with the current indent.
    ///
    /// When adding two trackers the left symbol wins; the symbols are not
    /// checked against each other.
    pub fn concatenate<'a>(&self, other: impl Into<Operand<'a>>) -> Composed {
        match other.into() {
            Operand::Tracker(other) => Composed::Tracker(self.offset(other.depth)),
            Operand::Level(levels) => Composed::Tracker(self.offset(levels)),
            Operand::Text(text) => Composed::Text(self.prefix(text)),
        }
    }

    /// Subtracts a tracker's depth or a level count. Text is rejected with
    /// [`IndentError::TypeMismatch`].
    pub fn subtract<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Indenter> {
        match other.into() {
            Operand::Tracker(other) => Ok(self.offset_sub(other.depth)),
            Operand::Level(levels) => Ok(self.offset_sub(levels)),
            Operand::Text(_) => Err(IndentError::TypeMismatch {
                operation: "subtract",
                operand: "text",
            }),
        }
    }

    /// The rendered indent followed by `text`.
    pub fn prefix(&self, text: &str) -> String {
        let mut rendered = self.render();
        rendered.push_str(text);
        rendered
    }

    pub(crate) fn offset(&self, levels: i64) -> Indenter {
        Indenter {
            depth: self.depth.saturating_add(levels),
            symbol: self.symbol.clone(),
        }
    }

    pub(crate) fn offset_sub(&self, levels: i64) -> Indenter {
        Indenter {
            depth: self.depth.saturating_sub(levels),
            symbol: self.symbol.clone(),
        }
    }
}

impl Default for Indenter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndenterConfig> for Indenter {
    fn from(config: IndenterConfig) -> Self {
        Self {
            depth: config.start,
            symbol: config.symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_without_scope() {
        assert_eq!(Indenter::new().render(), "");
        assert_eq!(Indenter::default().depth(), 0);
        assert_eq!(Indenter::default().symbol(), "  ");
    }

    #[test]
    fn test_start() {
        let ind = Indenter::new().with_start(1);
        assert_eq!(ind.render(), "  ");

        let ind = Indenter::new().with_start(3).with_symbol("-");
        assert_eq!(ind.render(), "---");
    }

    #[test]
    fn test_from_config() {
        let config = IndenterConfig {
            start: 2,
            symbol: "\t".to_string(),
        };
        assert_eq!(Indenter::from_config(&config).render(), "\t\t");
        assert_eq!(Indenter::from(config), Indenter::new().with_start(2).with_symbol("\t"));
    }

    #[test]
    fn test_negative_depth_renders_empty() {
        let ind = Indenter::new().with_start(-4);
        assert_eq!(ind.depth(), -4);
        assert_eq!(ind.render(), "");
    }

    #[test]
    fn test_empty_symbol() {
        let ind = Indenter::new().with_start(5).with_symbol("");
        assert_eq!(ind.render(), "");
    }

    #[test]
    fn test_concatenate_text() {
        let mut ind = Indenter::new();
        assert_eq!(ind.concatenate("abc"), "abc");

        let guard = ind.enter_scope();
        assert_eq!(guard.concatenate("abc"), Composed::Text("  abc".to_string()));
    }

    #[test]
    fn test_concatenate_level() {
        let ind = Indenter::new();
        let Composed::Tracker(deeper) = ind.concatenate(1) else {
            panic!("adding a level should produce a tracker");
        };
        assert_eq!(deeper.render(), "  ");
        assert_eq!(ind.depth(), 0);
    }

    #[test]
    fn test_concatenate_tracker_uses_left_symbol() {
        let left = Indenter::new().with_start(1);
        let right = Indenter::new().with_start(1).with_symbol("*");

        let sum = left.concatenate(&right).into_tracker().expect("tracker");
        assert_eq!(sum.depth(), 2);
        assert_eq!(sum.symbol(), "  ");
        assert_eq!(left.depth(), 1);
        assert_eq!(right.depth(), 1);
    }

    #[test]
    fn test_subtract() -> anyhow::Result<()> {
        let ind = Indenter::new().with_start(3);
        assert_eq!(ind.subtract(1)?.render(), "    ");

        let other = Indenter::new().with_start(2).with_symbol("#");
        let diff = ind.subtract(&other)?;
        assert_eq!(diff.depth(), 1);
        assert_eq!(diff.symbol(), "  ");

        assert_eq!(ind.subtract(5)?.depth(), -2);
        assert_eq!(ind.subtract(5)?.render(), "");
        Ok(())
    }

    #[test]
    fn test_subtract_text_is_type_mismatch() {
        let ind = Indenter::new().with_start(1);
        let err = ind.subtract("text").unwrap_err();
        assert!(matches!(
            err,
            IndentError::TypeMismatch {
                operation: "subtract",
                operand: "text"
            }
        ));
        assert_eq!(err.to_string(), "cannot subtract text operand");
    }

    #[test]
    fn test_scoped_returns_closure_value() {
        let mut ind = Indenter::new().with_symbol("\t");
        let line = ind.scoped(|ind| ind.scoped(|ind| format!("{}x", ind)));
        assert_eq!(line, "\t\tx");
        assert_eq!(ind.depth(), 0);
    }

    #[test]
    fn test_enter_scope_saturates_at_max() {
        let mut ind = Indenter::new().with_start(i64::MAX).with_symbol("");
        {
            let mut guard = ind.enter_scope();
            assert_eq!(guard.depth(), i64::MAX);
            let inner = guard.enter_scope();
            assert_eq!(inner.depth(), i64::MAX);
        }
        assert_eq!(ind.depth(), i64::MAX);
    }

    #[test]
    fn test_scope_exit_at_min_restores_depth() {
        let mut ind = Indenter::new().with_start(i64::MIN);
        {
            let guard = ind.enter_scope();
            assert_eq!(guard.depth(), i64::MIN + 1);
            assert_eq!(guard.render(), "");
        }
        assert_eq!(ind.depth(), i64::MIN);
    }

    #[test]
    fn test_composition_saturates() -> anyhow::Result<()> {
        let one = Indenter::new().with_start(1).with_symbol("");
        assert_eq!(one.concatenate(i64::MAX).into_tracker().map(|t| t.depth()), Some(i64::MAX));
        assert_eq!(one.concatenate(i64::MIN).into_tracker().map(|t| t.depth()), Some(i64::MIN + 1));

        let zero = Indenter::new();
        assert_eq!(zero.subtract(i64::MIN)?.depth(), i64::MAX);

        let floor = Indenter::new().with_start(i64::MIN);
        assert_eq!(floor.subtract(1)?.depth(), i64::MIN);
        assert_eq!(floor.subtract(&Indenter::new().with_start(i64::MAX))?.depth(), i64::MIN);
        assert_eq!((&floor - i64::MAX).depth(), i64::MIN);
        assert_eq!((&one - i64::MIN).depth(), i64::MAX);
        assert_eq!((&one + &Indenter::new().with_start(i64::MAX)).depth(), i64::MAX);
        Ok(())
    }

    #[test]
    fn test_snapshot_survives_scope_release_below_zero() {
        let mut ind = Indenter::new().with_start(-3);
        let snapshot: Indenter = {
            let guard = ind.enter_scope();
            &*guard - 2
        };
        assert_eq!(ind.depth(), -3);
        assert_eq!(snapshot.depth(), -4);
        assert_eq!(snapshot.render(), "");
    }

    #[test]
    fn test_prefix_matches_text_composition() {
        let ind = Indenter::new().with_start(2).with_symbol("-");
        assert_eq!(ind.prefix("x"), "--x");
        assert_eq!(ind.concatenate("x"), ind.prefix("x"));
        assert_eq!(&ind + "x", ind.prefix("x"));
    }
}
