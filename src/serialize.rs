//! Serializer to the textual component form, the partial inverse of
//! [`crate::parse`].
//!
//! The walk is depth-first and order-preserving. Wrapper nodes (capitalize,
//! decapitalize, applied arguments) have no textual representation: only
//! their inner node is emitted. This asymmetry is deliberate, the parser can
//! never produce those variants and round-tripping them is a non-goal.

use crate::code;
use crate::component::TextComponent;
use std::fmt;

/// Error raised when a node has no textual representation at all.
///
/// This signals a construction bug upstream (a color or style outside the
/// fixed code table), not a recoverable user error.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializeError {
    /// The component is not in the fixed code table.
    UnsupportedComponent {
        /// Debug rendering of the offending node.
        component: String,
    },
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::UnsupportedComponent { component } => {
                write!(f, "cannot serialize component: {}", component)
            }
        }
    }
}

impl std::error::Error for SerializeError {}

/// Serializes a component tree to its textual form.
///
/// Plain text escapes `$`, `#` and `&`; variable names escape `#` and `&`
/// (a second `$` cannot occur in a name by construction); localizable paths
/// escape `$` and `&`. Colors and styles emit `&` plus their table code.
pub fn serialize(component: &TextComponent) -> Result<String, SerializeError> {
    let mut out = String::new();
    let mut stack: Vec<&TextComponent> = vec![component];

    while let Some(node) = stack.pop() {
        match node {
            TextComponent::Composite(children) => {
                stack.extend(children.iter().rev());
            }
            TextComponent::Capitalize(inner) | TextComponent::Decapitalize(inner) => {
                stack.push(inner);
            }
            TextComponent::ArgsApplied { inner, .. } => {
                stack.push(inner);
            }
            TextComponent::Plain(text) => {
                push_escaped(text, &['$', '#', '&'], &mut out);
            }
            TextComponent::Variable(name) => {
                out.push('$');
                push_escaped(name, &['#', '&'], &mut out);
            }
            TextComponent::Localizable { path, .. } => {
                out.push('#');
                push_escaped(path, &['$', '&'], &mut out);
            }
            TextComponent::Color(_) | TextComponent::Style(_) => match code::encode(node) {
                Some(c) => {
                    out.push('&');
                    out.push(c);
                }
                None => {
                    return Err(SerializeError::UnsupportedComponent {
                        component: format!("{:?}", node),
                    });
                }
            },
        }
    }

    Ok(out)
}

fn push_escaped(text: &str, escape: &[char], out: &mut String) {
    for c in text.chars() {
        if escape.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}
