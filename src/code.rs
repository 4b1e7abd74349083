//! The fixed bidirectional code table behind the `&` sigil.
//!
//! Codes `0`-`9` and `a`-`f` name the sixteen palette colors, `k`-`o` the
//! five single-flag styles, and `r` the shared reset. The table is part of
//! the wire format and must not change.

use crate::color::Color;
use crate::component::TextComponent;
use crate::style::Style;

/// The sixteen palette colors: code, name, r, g, b. Alpha is always 1.0.
const PALETTE: [(char, &str, u8, u8, u8); 16] = [
    ('0', "black", 0, 0, 0),
    ('1', "dark_blue", 0, 0, 170),
    ('2', "dark_green", 0, 170, 0),
    ('3', "dark_aqua", 0, 170, 170),
    ('4', "dark_red", 170, 0, 0),
    ('5', "dark_purple", 170, 0, 170),
    ('6', "gold", 255, 170, 0),
    ('7', "gray", 170, 170, 170),
    ('8', "dark_gray", 85, 85, 85),
    ('9', "blue", 85, 85, 255),
    ('a', "green", 85, 255, 85),
    ('b', "aqua", 85, 255, 255),
    ('c', "red", 255, 85, 85),
    ('d', "light_purple", 255, 85, 255),
    ('e', "yellow", 255, 255, 85),
    ('f', "white", 255, 255, 255),
];

/// The five single-flag styles: code, style.
const STYLES: [(char, Style); 5] = [
    ('k', Style::OBFUSCATED),
    ('l', Style::BOLD),
    ('m', Style::STRIKETHROUGH),
    ('n', Style::UNDERLINE),
    ('o', Style::ITALIC),
];

/// Code for the shared reset node, clearing color and style alike.
const RESET_CODE: char = 'r';

/// Looks `code` up in the table, returning the color or style node it names.
pub fn decode(code: char) -> Option<TextComponent> {
    if code == RESET_CODE {
        return Some(TextComponent::Style(Style::RESET));
    }
    for (c, style) in STYLES {
        if c == code {
            return Some(TextComponent::Style(style));
        }
    }
    for (c, name, r, g, b) in PALETTE {
        if c == code {
            return Some(TextComponent::Color(Color::intern(
                name.to_string(),
                r,
                g,
                b,
                1.0,
            )));
        }
    }
    None
}

/// Inverse lookup: the code character for a color or style node.
///
/// Colors are matched by channel values (names are not part of equality),
/// styles by their flags. Returns `None` for any node outside the table,
/// including multi-flag styles and non-palette colors.
pub fn encode(component: &TextComponent) -> Option<char> {
    match component {
        TextComponent::Style(style) => {
            if style.is_reset() {
                return Some(RESET_CODE);
            }
            STYLES
                .iter()
                .find(|(_, s)| s == style)
                .map(|&(code, _)| code)
        }
        TextComponent::Color(color) => {
            if color.a().to_bits() != 1.0f32.to_bits() {
                return None;
            }
            PALETTE
                .iter()
                .find(|&&(_, _, r, g, b)| color.r() == r && color.g() == g && color.b() == b)
                .map(|&(code, ..)| code)
        }
        _ => None,
    }
}

/// The palette color named by `code`, for callers that want the color value
/// without wrapping it in a component.
pub fn palette_color(code: char) -> Option<Color> {
    PALETTE
        .iter()
        .find(|&&(c, ..)| c == code)
        .map(|&(_, name, r, g, b)| Color::intern(name.to_string(), r, g, b, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_round_trips() {
        for code in "0123456789abcdefklmno".chars() {
            let component = decode(code).unwrap();
            assert_eq!(encode(&component), Some(code), "code {:?}", code);
        }
    }

    #[test]
    fn reset_is_shared() {
        let reset = decode('r').unwrap();
        assert_eq!(reset, TextComponent::Style(Style::RESET));
        assert_eq!(encode(&reset), Some('r'));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(decode('z'), None);
        assert_eq!(decode('R'), None);
    }

    #[test]
    fn off_table_nodes_have_no_code() {
        let custom = Color::create("custom", 1, 2, 3).unwrap();
        assert_eq!(encode(&TextComponent::Color(custom)), None);
        let combined = Style::new(false, true, false, false, true);
        assert_eq!(encode(&TextComponent::Style(combined)), None);
        assert_eq!(encode(&TextComponent::text("plain")), None);
    }

    #[test]
    fn palette_lookup_by_code() {
        let green = palette_color('a').unwrap();
        assert_eq!(green.name(), "green");
        assert_eq!((green.r(), green.g(), green.b()), (85, 255, 85));
    }
}
