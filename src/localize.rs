//! The localization hook boundary.
//!
//! This crate never resolves a localizable path to text; that belongs to the
//! caller's localization tables. What it does carry is the capability to
//! transform the list of components a placeholder resolves into, so callers
//! can join alternatives with a separator or pick one of them after
//! resolution.
//!
//! [`MapLocalized`] pairs a localizable placeholder with such a pending
//! transform; [`operators`] has the stock transforms.

use crate::component::TextComponent;
use std::fmt;
use std::rc::Rc;

/// A list-to-list transform over the resolved components of a localizable
/// placeholder.
pub type LocalizedMapper = Rc<dyn Fn(Vec<TextComponent>) -> Vec<TextComponent>>;

/// A localizable placeholder with a pending transform over its resolution.
///
/// Equality compares the target structurally and the mapper by pointer
/// identity; two independently built closures never compare equal even when
/// they behave identically.
#[derive(Clone)]
pub struct MapLocalized {
    target: TextComponent,
    mapper: LocalizedMapper,
}

impl MapLocalized {
    /// Pairs `target` (typically a [`TextComponent::Localizable`]) with a
    /// transform to run over its resolved components.
    pub fn new(target: TextComponent, mapper: LocalizedMapper) -> MapLocalized {
        MapLocalized { target, mapper }
    }

    /// The placeholder awaiting resolution.
    pub fn target(&self) -> &TextComponent {
        &self.target
    }

    /// Runs the pending transform over `components`, the resolved
    /// alternatives for the target.
    pub fn map(&self, components: Vec<TextComponent>) -> Vec<TextComponent> {
        (self.mapper)(components)
    }

    /// Composes a further transform after the pending one.
    pub fn map_localized(self, operator: LocalizedMapper) -> MapLocalized {
        let first = self.mapper;
        MapLocalized {
            target: self.target,
            mapper: Rc::new(move |components| operator(first(components))),
        }
    }
}

impl PartialEq for MapLocalized {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && Rc::ptr_eq(&self.mapper, &other.mapper)
    }
}

impl fmt::Debug for MapLocalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapLocalized")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Stock transforms for localized component lists.
pub mod operators {
    use super::LocalizedMapper;
    use crate::component::TextComponent;
    use std::rc::Rc;

    /// Interleaves `separator` between components (never after the last).
    pub fn join(separator: TextComponent) -> LocalizedMapper {
        Rc::new(move |components| {
            if components.len() <= 1 {
                return components;
            }
            let mut joined = Vec::with_capacity(components.len() * 2 - 1);
            for component in components {
                if !joined.is_empty() {
                    joined.push(separator.clone());
                }
                joined.push(component);
            }
            joined
        })
    }

    /// [`join`] with a line jump.
    pub fn line_jump() -> LocalizedMapper {
        join(TextComponent::text("\n"))
    }

    /// Keeps only the component at `index`; an out-of-range index yields an
    /// empty list.
    pub fn extract(index: usize) -> LocalizedMapper {
        Rc::new(move |components| {
            components
                .into_iter()
                .nth(index)
                .map(|component| vec![component])
                .unwrap_or_default()
        })
    }
}
