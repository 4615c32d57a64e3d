//! Traits for traversable values.
//!
//! This module provides [`Validate`], the capability a type implements to
//! check its own business rules, and [`Node`], which describes how a value
//! is laid out so the traverser can reach every validatable part of it.

use crate::error::ValidationError;
use crate::traverse::{Elements, Fields};
use crate::ValidationResult;

/// A value that can check itself.
///
/// Implement this for any type with business rules. The traverser never
/// looks at what the check does, only at whether it fails. To take part in
/// traversal the type also implements [`Node`] and returns `Some(self)` from
/// [`Node::as_validate`] (the [`node!`](crate::node!) macro does this for
/// you).
///
/// # Example
///
/// ```rust
/// use validity::{Validate, ValidationError};
///
/// struct Quantity(u32);
///
/// impl Validate for Quantity {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.0 == 0 {
///             return Err(ValidationError::new("quantity must be positive"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Quantity(3).validate().is_ok());
/// assert!(Quantity(0).validate().is_err());
/// ```
pub trait Validate {
    /// Checks the value, returning the failure if it is invalid.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Structural shape of a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An ordered list or fixed-size array; elements are visited by index.
    Sequence,
    /// A composite with named fields; public fields are visited in
    /// declaration order.
    Record,
    /// Anything else. Never descended into.
    Scalar,
}

/// Upcast to a `Node` trait object.
///
/// Implemented for every sized `Node`; it lets default methods on [`Node`]
/// hand out `self` as `&mut dyn Node`.
pub trait AsNode {
    /// Returns `self` as a mutable trait object.
    fn as_node_mut(&mut self) -> &mut dyn Node;
}

impl<T: Node> AsNode for T {
    fn as_node_mut(&mut self) -> &mut dyn Node {
        self
    }
}

/// A value the traverser can walk.
///
/// Every method has a default describing an opaque scalar with no
/// validation capability, so a bare `impl Node for T {}` is valid.
/// Records override [`shape`](Node::shape) and
/// [`visit_fields`](Node::visit_fields), sequences override
/// [`visit_elements`], and indirection (boxes, nullable slots, locks)
/// overrides [`resolve`](Node::resolve).
///
/// [`visit_elements`]: Node::visit_elements
///
/// # Example
///
/// ```rust
/// use validity::{check, Fields, Node, Shape, Validate, ValidationError, ValidationResult};
///
/// #[derive(Default)]
/// struct Customer {
///     name: String,
///     notes: Vec<String>,
/// }
///
/// impl Validate for Customer {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.name.is_empty() {
///             return Err(ValidationError::new("customer name is required"));
///         }
///         Ok(())
///     }
/// }
///
/// impl Node for Customer {
///     fn shape(&self) -> Shape {
///         Shape::Record
///     }
///
///     fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
///         fields.field("Name", &mut self.name)?;
///         fields.field("Notes", &mut self.notes)
///     }
///
///     fn as_validate(&self) -> Option<&dyn Validate> {
///         Some(self)
///     }
/// }
///
/// let mut customer = Customer::default();
/// let err = check([&mut customer as &mut dyn Node]).unwrap_err();
/// assert_eq!(err.message(), "customer name is required");
/// ```
pub trait Node: AsNode {
    /// Returns the structural shape of this value once resolved.
    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    /// Resolves one or more levels of indirection.
    ///
    /// Concrete values return themselves. Indirect values return whatever
    /// their target resolves to, materializing a default target first if
    /// the slot is empty.
    fn resolve(&mut self) -> &mut dyn Node {
        self.as_node_mut()
    }

    /// Returns true for an empty nullable slot.
    ///
    /// Only consulted for top-level values passed to [`check`](crate::check()),
    /// which are skipped rather than defaulted.
    fn is_null(&self) -> bool {
        false
    }

    /// Feeds every element, in index order, to the `Elements` sink.
    ///
    /// Called only when [`shape`](Node::shape) is [`Shape::Sequence`].
    fn visit_elements(&mut self, _elements: &mut Elements) -> ValidationResult {
        Ok(())
    }

    /// Feeds every field, in declaration order, to the `Fields` sink.
    ///
    /// Called only when [`shape`](Node::shape) is [`Shape::Record`]. Private
    /// fields may be passed; the sink filters them out.
    fn visit_fields(&mut self, _fields: &mut Fields) -> ValidationResult {
        Ok(())
    }

    /// Exposes the validation capability, if this type has one.
    fn as_validate(&self) -> Option<&dyn Validate> {
        None
    }

    /// Name of the concrete type, used in trace events.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
