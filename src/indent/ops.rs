//! Operator sugar over [`Indenter::concatenate`] and [`Indenter::subtract`].
//!
//! Adding text only works with the indenter on the left (`&ind + "text"`);
//! there is no `"text" + &ind`. Subtracting text has no impl at all, so it
//! is rejected at compile time.

use std::fmt;
use std::ops::{Add, Sub};

use crate::indent::operand::Composed;
use crate::indent::tracker::Indenter;

impl fmt::Display for Indenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Composed::Tracker(tracker) => fmt::Display::fmt(tracker, f),
            Composed::Text(text) => f.write_str(text),
        }
    }
}

impl Add<&Indenter> for &Indenter {
    type Output = Indenter;

    fn add(self, other: &Indenter) -> Indenter {
        self.offset(other.depth())
    }
}

impl Sub<&Indenter> for &Indenter {
    type Output = Indenter;

    fn sub(self, other: &Indenter) -> Indenter {
        self.offset_sub(other.depth())
    }
}

macro_rules! level_ops {
    ($($ty:ty),*) => {
        $(
            impl Add<$ty> for &Indenter {
                type Output = Indenter;

                fn add(self, levels: $ty) -> Indenter {
                    self.offset(i64::from(levels))
                }
            }

            impl Sub<$ty> for &Indenter {
                type Output = Indenter;

                fn sub(self, levels: $ty) -> Indenter {
                    self.offset_sub(i64::from(levels))
                }
            }
        )*
    };
}

level_ops!(i32, i64);

impl Add<&str> for &Indenter {
    type Output = String;

    fn add(self, text: &str) -> String {
        self.prefix(text)
    }
}

impl Add<&String> for &Indenter {
    type Output = String;

    fn add(self, text: &String) -> String {
        self + text.as_str()
    }
}

// Comparing against text compares the rendered indent.

impl PartialEq<str> for Indenter {
    fn eq(&self, other: &str) -> bool {
        self.render() == other
    }
}

impl PartialEq<&str> for Indenter {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Indenter {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<str> for Composed {
    fn eq(&self, other: &str) -> bool {
        match self {
            Composed::Tracker(tracker) => tracker == other,
            Composed::Text(text) => text == other,
        }
    }
}

impl PartialEq<&str> for Composed {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Composed {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Indenter> for Composed {
    fn eq(&self, other: &Indenter) -> bool {
        matches!(self, Composed::Tracker(tracker) if tracker == other)
    }
}
