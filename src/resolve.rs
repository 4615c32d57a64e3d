//! Indirection resolution.
//!
//! Reduces a value handle to the concrete value behind it. Each
//! [`Node::resolve`] implementation strips one layer (a box, a reference,
//! a lock, a nullable slot) and recurses into its target, so a single call
//! here follows the whole chain.

use crate::node::Node;

/// Resolves `value` to the concrete value behind any indirection.
///
/// Empty `Option` slots on the way are filled with their type's default,
/// mutating the caller's storage. Resolution never fails.
///
/// # Example
///
/// ```rust
/// use validity::{resolve, Shape};
///
/// let mut slot: Option<Box<Vec<u32>>> = None;
///
/// let resolved = resolve(&mut slot);
/// assert_eq!(resolved.shape(), Shape::Sequence);
///
/// assert_eq!(slot, Some(Box::new(Vec::new())));
/// ```
pub fn resolve(value: &mut dyn Node) -> &mut dyn Node {
    value.resolve()
}
