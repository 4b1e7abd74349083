//! Textweave: a composable representation for templated, localizable,
//! styled text, with a canonical normalization engine.
//!
//! This crate provides:
//! - [`TextComponent`], a closed sum type over plain runs, template
//!   variables, localizable placeholders, colors, styles, deferred-transform
//!   wrappers and concatenation.
//! - A total [`parse`] from the annotated textual form (`$var`, `#a.b.c`,
//!   `&x`, `\` escapes) and a partial-inverse [`serialize`] back to it.
//! - A non-recursive work-list [`normalize`] that flattens nested
//!   composites, merges adjacent plain runs, fuses wrapper operations onto
//!   resolved leaves and redirects duplicate values onto earlier entries.
//!
//! Every tree-producing entry point ([`TextComponent::of`], `append`,
//! `parse`) normalizes before returning, so serialization and equality
//! always see canonical trees.
//!
//! Localization itself is a caller concern: the crate only carries
//! localizable placeholders and the [`localize`] hook for transforming
//! resolved component lists.
//!
//! # Example
//!
//! ```
//! use textweave::{parse, serialize, TextComponent};
//!
//! let tree = parse("Welcome $user, #greet.morning &a");
//! assert_eq!(serialize(&tree).unwrap(), "Welcome $user, #greet.morning &a");
//!
//! let built = TextComponent::of(vec![
//!     TextComponent::text("Welcome "),
//!     TextComponent::variable("user"),
//! ]);
//! assert_eq!(built, parse("Welcome $user"));
//! ```

pub mod code;
pub mod color;
pub mod component;
pub mod localize;
pub mod normalize;
pub mod parse;
pub mod serialize;
pub mod style;

pub use color::{ChannelError, Color};
pub use component::TextComponent;
pub use localize::{LocalizedMapper, MapLocalized};
pub use normalize::normalize;
pub use parse::parse;
pub use serialize::{serialize, SerializeError};
pub use style::Style;

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::color::{ChannelError, Color};
    pub use crate::component::TextComponent;
    pub use crate::localize::{operators, LocalizedMapper, MapLocalized};
    pub use crate::normalize::normalize;
    pub use crate::parse::parse;
    pub use crate::serialize::{serialize, SerializeError};
    pub use crate::style::Style;
}
