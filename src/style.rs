//! Text style flags.
//!
//! A style may or may not be supported by the receiver of the text;
//! unsupported styles are commonly rendered with the receiver's default.
//!
//! The all-false style is the canonical reset: it clears every active flag
//! and doubles as the color reset in the textual form, where both share the
//! `&r` code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A combination of text style flags.
///
/// Equality and hashing cover exactly the five flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    /// Characters are scrambled on display.
    pub obfuscated: bool,
    /// Bold face.
    pub bold: bool,
    /// Strikethrough decoration.
    pub strikethrough: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Italic face.
    pub italic: bool,
}

impl Style {
    /// The reset style: no flags set. Clears color and style on receivers.
    pub const RESET: Style = Style::new(false, false, false, false, false);
    /// Only the obfuscated flag set.
    pub const OBFUSCATED: Style = Style::new(true, false, false, false, false);
    /// Only the bold flag set.
    pub const BOLD: Style = Style::new(false, true, false, false, false);
    /// Only the strikethrough flag set.
    pub const STRIKETHROUGH: Style = Style::new(false, false, true, false, false);
    /// Only the underline flag set.
    pub const UNDERLINE: Style = Style::new(false, false, false, true, false);
    /// Only the italic flag set.
    pub const ITALIC: Style = Style::new(false, false, false, false, true);

    /// Creates a style from explicit flags.
    #[inline]
    pub const fn new(
        obfuscated: bool,
        bold: bool,
        strikethrough: bool,
        underline: bool,
        italic: bool,
    ) -> Style {
        Style {
            obfuscated,
            bold,
            strikethrough,
            underline,
            italic,
        }
    }

    /// Whether no flag is set.
    #[inline]
    pub const fn is_reset(&self) -> bool {
        !self.obfuscated && !self.bold && !self.strikethrough && !self.underline && !self.italic
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reset() {
            return write!(f, "Style[reset]");
        }
        let mut flags = Vec::new();
        if self.obfuscated {
            flags.push("obfuscated");
        }
        if self.bold {
            flags.push("bold");
        }
        if self.strikethrough {
            flags.push("strikethrough");
        }
        if self.underline {
            flags.push("underline");
        }
        if self.italic {
            flags.push("italic");
        }
        write!(f, "Style[{}]", flags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_single_flag() {
        assert!(Style::RESET.is_reset());
        assert_eq!(Style::BOLD, Style::new(false, true, false, false, false));
        assert_ne!(Style::BOLD, Style::ITALIC);
    }

    #[test]
    fn equality_over_all_flags() {
        let combined = Style::new(false, true, false, false, true);
        assert_ne!(combined, Style::BOLD);
        assert_eq!(combined, Style::new(false, true, false, false, true));
    }
}
