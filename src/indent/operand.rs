use crate::indent::tracker::Indenter;

/// Right-hand side of [`Indenter::concatenate`] and [`Indenter::subtract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Tracker(&'a Indenter),
    Level(i64),
    Text(&'a str),
}

impl<'a> From<&'a Indenter> for Operand<'a> {
    fn from(tracker: &'a Indenter) -> Self {
        Operand::Tracker(tracker)
    }
}

impl From<i64> for Operand<'_> {
    fn from(levels: i64) -> Self {
        Operand::Level(levels)
    }
}

// Unsuffixed integer literals fall back to i32.
impl From<i32> for Operand<'_> {
    fn from(levels: i32) -> Self {
        Operand::Level(i64::from(levels))
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(text: &'a String) -> Self {
        Operand::Text(text.as_str())
    }
}

/// Result of [`Indenter::concatenate`]: a new tracker for tracker/level
/// operands, indented text for text operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    Tracker(Indenter),
    Text(String),
}

impl Composed {
    pub fn into_tracker(self) -> Option<Indenter> {
        match self {
            Composed::Tracker(tracker) => Some(tracker),
            Composed::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Composed::Text(text) => Some(text),
            Composed::Tracker(_) => None,
        }
    }

    /// The rendered form: the text itself, or the tracker's indent.
    pub fn render(&self) -> String {
        match self {
            Composed::Tracker(tracker) => tracker.render(),
            Composed::Text(text) => text.clone(),
        }
    }
}
