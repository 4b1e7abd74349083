//! Work-list normalizer for component trees.
//!
//! Rewrites an arbitrarily nested, possibly duplicated tree into a canonical
//! flattened form while preserving semantics: nested composites are spliced
//! flat, adjacent plain runs merge into one, wrapper nodes fuse onto their
//! resolved inner values, and nodes value-equal to an earlier output entry
//! are redirected onto that entry.
//!
//! The traversal is an explicit work-list, never language-level recursion,
//! so arbitrarily deep input trees cannot grow the call stack.
//!
//! # Invariants
//! - `normalize` is idempotent: the output sequence never contains two
//!   adjacent plain runs or a composite entry.
//! - When the normalized result is structurally equal to the input, the
//!   original input value is returned unchanged, so callers may treat
//!   "nothing changed" as a cheap identity question.
//! - Redirected duplicates are appended as new entries next to the original
//!   rather than collapsing into it; output length never shrinks on dedup.

use crate::component::TextComponent;
use std::collections::{BTreeMap, VecDeque};

/// A deferred wrapper operation, pending until its target resolves.
///
/// A chain of these is the composed `TextComponent -> TextComponent`
/// function of a stack of wrapper nodes, applied earliest-first so that
/// nested wrappers fuse outer-after-inner.
#[derive(Debug, Clone, PartialEq)]
enum PendingOp {
    /// Re-wrap in [`TextComponent::Capitalize`].
    Capitalize,
    /// Re-wrap in [`TextComponent::Decapitalize`].
    Decapitalize,
    /// Re-wrap in [`TextComponent::ArgsApplied`] with these arguments.
    BindArgs(BTreeMap<String, TextComponent>),
}

/// Applies a pending chain to a resolved node, earliest operation first.
fn apply_chain(node: TextComponent, chain: &[PendingOp]) -> TextComponent {
    let mut current = node;
    for op in chain {
        current = match op {
            PendingOp::Capitalize => current.capitalize(),
            PendingOp::Decapitalize => current.decapitalize(),
            PendingOp::BindArgs(args) => current.apply(args.clone()),
        };
    }
    current
}

/// Appends `node` to the output, redirecting onto an earlier value-equal
/// entry when one exists.
///
/// The redirected value is appended as an additional entry; the earlier one
/// stays in place. This deliberately ports the redundancy-preserving
/// behavior of the reference semantics instead of collapsing duplicates.
fn push_deduped(out: &mut Vec<TextComponent>, node: TextComponent) {
    if let Some(existing) = out.iter().find(|entry| **entry == node) {
        let redirected = existing.clone();
        out.push(redirected);
    } else {
        out.push(node);
    }
}

fn flush_plain(buffer: &mut String, out: &mut Vec<TextComponent>) {
    if !buffer.is_empty() {
        push_deduped(out, TextComponent::Plain(std::mem::take(buffer)));
    }
}

/// Chain for the inner node of a wrapper: the wrapper's own operation runs
/// first, anything inherited from the outside runs after it.
fn compose(op: PendingOp, inherited: Vec<PendingOp>) -> Vec<PendingOp> {
    let mut chain = Vec::with_capacity(inherited.len() + 1);
    chain.push(op);
    chain.extend(inherited);
    chain
}

/// Normalizes a component tree into its canonical flattened form.
///
/// Idempotent; returns the original input value whenever the rewrite turns
/// out to be a no-op.
pub fn normalize(component: TextComponent) -> TextComponent {
    // Singleton collapse on the way in: a composite holding exactly one
    // composite child stands for that child.
    let mut seed = &component;
    while let TextComponent::Composite(children) = seed {
        if children.len() != 1 || !matches!(children[0], TextComponent::Composite(_)) {
            break;
        }
        seed = &children[0];
    }

    let mut work: VecDeque<(TextComponent, Vec<PendingOp>)> = VecDeque::new();
    work.push_back((seed.clone(), Vec::new()));

    let mut out: Vec<TextComponent> = Vec::new();
    // Plain runs accumulate here until a non-plain entry forces a flush, so
    // runs merge even across spliced composite boundaries.
    let mut buffer = String::new();
    let mut processed = 0usize;

    while let Some((node, chain)) = work.pop_front() {
        processed += 1;
        match node {
            TextComponent::Composite(children) => {
                // Splice children onto the front, each inheriting the
                // composite's pending chain.
                for child in children.into_iter().rev() {
                    work.push_front((child, chain.clone()));
                }
            }
            TextComponent::Capitalize(inner) => {
                work.push_front((*inner, compose(PendingOp::Capitalize, chain)));
            }
            TextComponent::Decapitalize(inner) => {
                work.push_front((*inner, compose(PendingOp::Decapitalize, chain)));
            }
            TextComponent::ArgsApplied { inner, args } => {
                work.push_front((*inner, compose(PendingOp::BindArgs(args), chain)));
            }
            TextComponent::Plain(text) if chain.is_empty() => {
                buffer.push_str(&text);
            }
            leaf => {
                flush_plain(&mut buffer, &mut out);
                push_deduped(&mut out, apply_chain(leaf, &chain));
            }
        }
    }

    flush_plain(&mut buffer, &mut out);
    log::trace!(
        "normalized {} work items into {} output entries",
        processed,
        out.len()
    );

    let result = if out.len() == 1 && matches!(out[0], TextComponent::Composite(_)) {
        out.remove(0)
    } else {
        TextComponent::Composite(out)
    };

    if result == component {
        component
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TextComponent;

    fn var(name: &str) -> TextComponent {
        TextComponent::variable(name)
    }

    fn text(s: impl Into<String>) -> TextComponent {
        TextComponent::text(s)
    }

    fn composite(children: Vec<TextComponent>) -> TextComponent {
        TextComponent::Composite(children)
    }

    fn children_of(component: &TextComponent) -> &[TextComponent] {
        match component {
            TextComponent::Composite(children) => children,
            other => std::slice::from_ref(other),
        }
    }

    #[test]
    fn flattens_nested_composites() {
        let nested = composite(vec![composite(vec![var("a"), var("b")]), var("c")]);
        let flat = composite(vec![var("a"), var("b"), var("c")]);
        assert_eq!(normalize(nested), normalize(flat));
    }

    #[test]
    fn merges_adjacent_plain_runs() {
        let input = composite(vec![text("ab"), text("cd")]);
        assert_eq!(normalize(input), text("abcd"));
    }

    #[test]
    fn merges_plain_runs_across_composite_boundaries() {
        let input = composite(vec![text("a"), composite(vec![text("b")]), text("c")]);
        assert_eq!(normalize(input), text("abc"));
    }

    #[test]
    fn keeps_separated_plain_runs_separate() {
        let input = composite(vec![text("Welcome "), var("user"), text(", friend")]);
        let normalized = normalize(input.clone());
        assert_eq!(normalized, input);
        assert_eq!(children_of(&normalized).len(), 3);
    }

    #[test]
    fn collapses_singleton_composites() {
        let nested = composite(vec![composite(vec![var("x")])]);
        assert_eq!(normalize(nested), normalize(var("x")));
    }

    #[test]
    fn idempotent() {
        let inputs = vec![
            composite(vec![text("a"), composite(vec![text("b")])]),
            composite(vec![
                composite(vec![var("a"), text("x")]),
                var("a"),
                text("y"),
            ]),
            var("v").capitalize().decapitalize(),
            composite(vec![]),
            text(""),
        ];
        for input in inputs {
            let once = normalize(input.clone());
            let twice = normalize(once.clone());
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn wrapper_fusion_is_inner_first() {
        let input = text("Hi").decapitalize().capitalize();
        let normalized = normalize(input.clone());
        // Decapitalize was recorded first, so it sits closest to the leaf.
        assert_eq!(normalized, text("Hi").decapitalize().capitalize());
        // Nothing changed: the original value comes back.
        assert_eq!(normalized, input);
    }

    #[test]
    fn wrapper_propagates_over_composite_children() {
        let input = composite(vec![text("a"), var("b")]).capitalize();
        let expected = composite(vec![text("a").capitalize(), var("b").capitalize()]);
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn args_fuse_onto_resolved_inner() {
        let args: BTreeMap<String, TextComponent> = [("user".to_string(), text("somebody"))].into();
        let input = composite(vec![composite(vec![var("greet")]).apply(args.clone())]);
        assert_eq!(normalize(input), var("greet").apply(args));
    }

    #[test]
    fn duplicate_entries_are_preserved_not_collapsed() {
        // Redirection appends the fused duplicate next to the original, so
        // the output stays as wide as the input.
        let input = composite(vec![var("a"), var("a")]);
        let normalized = normalize(input.clone());
        assert_eq!(normalized, input);
        assert_eq!(children_of(&normalized).len(), 2);
    }

    #[test]
    fn no_op_returns_original_value() {
        let input = composite(vec![text("Welcome "), var("user")]);
        let normalized = normalize(input.clone());
        assert_eq!(normalized, input);
        assert_eq!(children_of(&normalized).len(), 2);
    }

    #[test]
    fn empty_plain_runs_are_dropped() {
        let input = composite(vec![text(""), var("v"), text("")]);
        let normalized = normalize(input);
        assert_eq!(children_of(&normalized).len(), 1);
        assert_eq!(normalized, var("v"));
    }

    #[test]
    fn deep_singleton_nesting_does_not_recurse() {
        let mut node = text("x");
        for _ in 0..5_000 {
            node = composite(vec![node]);
        }
        assert_eq!(normalize(node), text("x"));
    }

    #[test]
    fn deep_mixed_nesting_flattens() {
        let mut node = text("x");
        for _ in 0..5_000 {
            node = composite(vec![text("a"), node]);
        }
        let normalized = normalize(node);
        let mut expected = "a".repeat(5_000);
        expected.push('x');
        assert_eq!(normalized, text(expected));
    }
}
