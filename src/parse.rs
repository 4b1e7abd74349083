//! Parser for the textual component form.
//!
//! A single left-to-right scan with explicit local state turns an annotated
//! string into a component tree. `$name` opens a variable, `#a.b.c` a
//! localizable path, `&x` a color or style code, `{`/`}` optionally delimit a
//! name right after the sigil, and `\` escapes the next character.
//!
//! The parser is total: there is no invalid input. Unterminated sigils and
//! braces are resolved by the end-of-input flush, and a `&` code outside the
//! fixed table degrades to plain text.
//!
//! The resulting tree is normalized before being returned, so adjacent plain
//! runs never survive parsing.

use crate::code;
use crate::component::TextComponent;
use crate::normalize;

/// Which sigil accumulation is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sigil {
    /// `$name`.
    Variable,
    /// `#a.b.c`; `.` is a legal name character only here.
    Localizable,
    /// `&x`, exactly one code character.
    Coded,
}

impl Sigil {
    fn opened_by(c: char) -> Option<Sigil> {
        match c {
            '$' => Some(Sigil::Variable),
            '#' => Some(Sigil::Localizable),
            '&' => Some(Sigil::Coded),
            _ => None,
        }
    }

    /// Whether `c` continues this sigil's name.
    fn is_name_char(self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || (c == '.' && self == Sigil::Localizable)
    }
}

/// Parses a component tree from its textual form.
///
/// The output is a normalized composite; see the module docs for the
/// grammar. Example: `Welcome $user, #greet.morning &a`.
pub fn parse(raw: &str) -> TextComponent {
    let mut components: Vec<TextComponent> = Vec::new();
    let mut plain = String::new();
    let mut name = String::new();
    let mut sigil: Option<Sigil> = None;
    let mut in_brace = false;
    let mut escaped = false;

    for c in raw.chars() {
        if !escaped && c == '\\' {
            escaped = true;
            continue;
        }
        if escaped {
            // Escaped characters join whatever accumulation is in progress
            // and never trigger sigil logic.
            escaped = false;
            match sigil {
                Some(_) => name.push(c),
                None => plain.push(c),
            }
            continue;
        }

        let Some(kind) = sigil else {
            if let Some(opened) = Sigil::opened_by(c) {
                flush_plain(&mut plain, &mut components);
                sigil = Some(opened);
            } else {
                plain.push(c);
            }
            continue;
        };

        if c == '{' && !in_brace && name.is_empty() {
            in_brace = true;
            continue;
        }
        if c == '}' && in_brace {
            close_sigil(kind, &mut name, &mut plain, &mut components);
            sigil = None;
            in_brace = false;
            continue;
        }
        if let Some(opened) = Sigil::opened_by(c) {
            close_sigil(kind, &mut name, &mut plain, &mut components);
            flush_plain(&mut plain, &mut components);
            sigil = Some(opened);
            in_brace = false;
            continue;
        }
        if kind.is_name_char(c) {
            name.push(c);
            // A code is always exactly one character; outside braces the
            // accumulation closes right behind it.
            if kind == Sigil::Coded && !in_brace {
                close_sigil(kind, &mut name, &mut plain, &mut components);
                sigil = None;
            }
            continue;
        }

        // Any other character ends the accumulation and is then handled as
        // plain text.
        close_sigil(kind, &mut name, &mut plain, &mut components);
        sigil = None;
        in_brace = false;
        plain.push(c);
    }

    if let Some(kind) = sigil {
        close_sigil(kind, &mut name, &mut plain, &mut components);
    }
    flush_plain(&mut plain, &mut components);

    normalize::normalize(TextComponent::Composite(components))
}

fn flush_plain(plain: &mut String, components: &mut Vec<TextComponent>) {
    if !plain.is_empty() {
        components.push(TextComponent::Plain(std::mem::take(plain)));
    }
}

fn close_sigil(
    kind: Sigil,
    name: &mut String,
    plain: &mut String,
    components: &mut Vec<TextComponent>,
) {
    let name = std::mem::take(name);
    match kind {
        Sigil::Variable => components.push(TextComponent::Variable(name)),
        Sigil::Localizable => components.push(TextComponent::localizable(name)),
        Sigil::Coded => {
            let mut chars = name.chars();
            let node = match (chars.next(), chars.next()) {
                (Some(code), None) => code::decode(code),
                _ => None,
            };
            match node {
                Some(node) => {
                    flush_plain(plain, components);
                    components.push(node);
                }
                // Off-table code: keep the raw characters as literal text.
                None => {
                    plain.push('&');
                    plain.push_str(&name);
                }
            }
        }
    }
}
