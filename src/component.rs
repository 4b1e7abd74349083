//! The text component algebra.
//!
//! [`TextComponent`] is a closed sum type over every kind of text node:
//! plain runs, template variables, localizable placeholders, colors, styles,
//! deferred-transform wrappers and concatenation. Trees are immutable values;
//! every rewrite builds new nodes.
//!
//! # Invariants
//! - Equality is structural and recursive, with singleton-composite
//!   transparency: `Composite([x])` compares and hashes equal to `x`.
//! - A `Color` node compares by channel values only, a `Style` node by its
//!   five flags only.
//! - A `Composite`'s children are never mutated after construction.

use crate::color::Color;
use crate::normalize;
use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// A node in a text component tree.
///
/// The variant set is closed: the normalization engine and the serializer
/// match exhaustively over it, so adding a variant is a compile-visible
/// change everywhere it matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TextComponent {
    /// A literal run of text.
    Plain(String),
    /// An opaque named placeholder, resolved by the caller.
    Variable(String),
    /// A localization placeholder: a dotted path, optionally pinned to a
    /// locale. Resolution happens outside this crate.
    Localizable {
        /// Locale tag, `None` for the caller's default locale.
        locale: Option<String>,
        /// Dotted localization path, e.g. `greet.morning`.
        path: String,
    },
    /// A color change.
    Color(Color),
    /// A style change.
    Style(Style),
    /// Upper-cases the first rendered character of the resolved inner
    /// content.
    Capitalize(Box<TextComponent>),
    /// Lower-cases the first rendered character of the resolved inner
    /// content.
    Decapitalize(Box<TextComponent>),
    /// A pending substitution of named placeholders inside the inner node.
    ArgsApplied {
        /// The node the substitution applies to.
        inner: Box<TextComponent>,
        /// Argument name to replacement component.
        args: BTreeMap<String, TextComponent>,
    },
    /// Ordered concatenation. The only variant with children.
    Composite(Vec<TextComponent>),
}

impl TextComponent {
    /// Creates a plain text component.
    pub fn text(text: impl Into<String>) -> TextComponent {
        TextComponent::Plain(text.into())
    }

    /// Creates a variable placeholder.
    pub fn variable(name: impl Into<String>) -> TextComponent {
        TextComponent::Variable(name.into())
    }

    /// Creates a localizable placeholder for the caller's default locale.
    pub fn localizable(path: impl Into<String>) -> TextComponent {
        TextComponent::Localizable {
            locale: None,
            path: path.into(),
        }
    }

    /// Creates a localizable placeholder pinned to `locale`.
    pub fn localizable_in(locale: impl Into<String>, path: impl Into<String>) -> TextComponent {
        TextComponent::Localizable {
            locale: Some(locale.into()),
            path: path.into(),
        }
    }

    /// Builds a normalized composite from `components`.
    pub fn of(components: Vec<TextComponent>) -> TextComponent {
        normalize::normalize(TextComponent::Composite(components))
    }

    /// Builds a composite without normalizing it.
    ///
    /// Useful when many appends are batched before a single
    /// [`normalize::normalize`] pass.
    pub fn of_unnormalized(components: Vec<TextComponent>) -> TextComponent {
        TextComponent::Composite(components)
    }

    /// Concatenates `other` after `self`, normalizing the result.
    pub fn append(self, other: TextComponent) -> TextComponent {
        normalize::normalize(TextComponent::Composite(vec![self, other]))
    }

    /// Wraps `self` so the first rendered character is upper-cased.
    pub fn capitalize(self) -> TextComponent {
        TextComponent::Capitalize(Box::new(self))
    }

    /// Wraps `self` so the first rendered character is lower-cased.
    pub fn decapitalize(self) -> TextComponent {
        TextComponent::Decapitalize(Box::new(self))
    }

    /// Wraps `self` with a pending substitution of named placeholders.
    pub fn apply(self, args: BTreeMap<String, TextComponent>) -> TextComponent {
        TextComponent::ArgsApplied {
            inner: Box::new(self),
            args,
        }
    }

    /// Re-localizes a `Localizable` node to `locale`, producing a new
    /// instance. Any other variant is returned unchanged.
    pub fn with_locale(self, locale: impl Into<String>) -> TextComponent {
        match self {
            TextComponent::Localizable { path, .. } => TextComponent::Localizable {
                locale: Some(locale.into()),
                path,
            },
            other => other,
        }
    }

    /// Whether this component renders to nothing.
    ///
    /// True for `Plain` iff the string is empty and for `Composite` iff every
    /// child is empty (vacuously for no children). Every other variant is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            TextComponent::Plain(text) => text.is_empty(),
            TextComponent::Composite(children) => children.iter().all(TextComponent::is_empty),
            _ => false,
        }
    }

    /// Strips composite layers holding exactly one child.
    ///
    /// The canonical view backs equality and hashing, making
    /// `Composite([x])` indistinguishable from `x`.
    fn canonical(&self) -> &TextComponent {
        let mut current = self;
        while let TextComponent::Composite(children) = current {
            if children.len() != 1 {
                break;
            }
            current = &children[0];
        }
        current
    }
}

impl PartialEq for TextComponent {
    fn eq(&self, other: &Self) -> bool {
        use TextComponent::*;
        match (self.canonical(), other.canonical()) {
            (Plain(a), Plain(b)) => a == b,
            (Variable(a), Variable(b)) => a == b,
            (
                Localizable {
                    locale: la,
                    path: pa,
                },
                Localizable {
                    locale: lb,
                    path: pb,
                },
            ) => la == lb && pa == pb,
            (Color(a), Color(b)) => a == b,
            (Style(a), Style(b)) => a == b,
            (Capitalize(a), Capitalize(b)) => a == b,
            (Decapitalize(a), Decapitalize(b)) => a == b,
            (
                ArgsApplied {
                    inner: ia,
                    args: aa,
                },
                ArgsApplied {
                    inner: ib,
                    args: ab,
                },
            ) => ia == ib && aa == ab,
            (Composite(a), Composite(b)) => a.len() == b.len() && a.iter().eq(b.iter()),
            _ => false,
        }
    }
}

impl Eq for TextComponent {}

impl Hash for TextComponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use TextComponent::*;
        match self.canonical() {
            Plain(text) => {
                state.write_u8(0);
                text.hash(state);
            }
            Variable(name) => {
                state.write_u8(1);
                name.hash(state);
            }
            Localizable { locale, path } => {
                state.write_u8(2);
                locale.hash(state);
                path.hash(state);
            }
            Color(color) => {
                state.write_u8(3);
                color.hash(state);
            }
            Style(style) => {
                state.write_u8(4);
                style.hash(state);
            }
            Capitalize(inner) => {
                state.write_u8(5);
                inner.hash(state);
            }
            Decapitalize(inner) => {
                state.write_u8(6);
                inner.hash(state);
            }
            ArgsApplied { inner, args } => {
                state.write_u8(7);
                inner.hash(state);
                args.hash(state);
            }
            Composite(children) => {
                state.write_u8(8);
                state.write_usize(children.len());
                for child in children {
                    child.hash(state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(component: &TextComponent) -> u64 {
        let mut hasher = DefaultHasher::new();
        component.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn singleton_composite_is_transparent() {
        let plain = TextComponent::text("abcd");
        let wrapped = TextComponent::Composite(vec![plain.clone()]);
        let doubly = TextComponent::Composite(vec![wrapped.clone()]);
        assert_eq!(wrapped, plain);
        assert_eq!(doubly, plain);
        assert_eq!(hash_of(&wrapped), hash_of(&plain));
        assert_eq!(hash_of(&doubly), hash_of(&plain));
    }

    #[test]
    fn structural_equality_is_recursive() {
        let a = TextComponent::of_unnormalized(vec![
            TextComponent::variable("user").capitalize(),
            TextComponent::text(" says hi"),
        ]);
        let b = TextComponent::of_unnormalized(vec![
            TextComponent::variable("user").capitalize(),
            TextComponent::text(" says hi"),
        ]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn color_nodes_compare_by_channels() {
        let a = TextComponent::Color(Color::create("one", 5, 6, 7).unwrap());
        let b = TextComponent::Color(Color::create("two", 5, 6, 7).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn emptiness() {
        assert!(TextComponent::text("").is_empty());
        assert!(!TextComponent::text("x").is_empty());
        assert!(TextComponent::Composite(vec![]).is_empty());
        assert!(TextComponent::Composite(vec![
            TextComponent::text(""),
            TextComponent::Composite(vec![TextComponent::text("")]),
        ])
        .is_empty());
        assert!(!TextComponent::variable("v").is_empty());
        assert!(!TextComponent::text("x").capitalize().is_empty());
    }

    #[test]
    fn with_locale_produces_new_instance() {
        let base = TextComponent::localizable("greet.morning");
        let pinned = base.clone().with_locale("pt_br");
        assert_eq!(
            pinned,
            TextComponent::localizable_in("pt_br", "greet.morning")
        );
        assert_ne!(base, pinned);
    }

    #[test]
    fn composite_distinct_from_different_width() {
        let ab = TextComponent::of_unnormalized(vec![
            TextComponent::text("a"),
            TextComponent::text("b"),
        ]);
        let a = TextComponent::text("a");
        assert_ne!(ab, a);
    }

    #[test]
    fn serde_round_trip() {
        let tree = TextComponent::of_unnormalized(vec![
            TextComponent::text("Welcome "),
            TextComponent::variable("user"),
            TextComponent::localizable_in("en_us", "greet.morning"),
            TextComponent::Style(Style::BOLD),
        ]);
        let json = serde_json::to_string(&tree).unwrap();
        let back: TextComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
