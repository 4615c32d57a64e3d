//! Structural traversal.
//!
//! [`check()`] walks each value depth-first: it resolves indirection, descends
//! into elements (index order) or public fields (declaration order), and
//! only then runs the value's own [`Validate`](crate::Validate) check. The
//! first failure anywhere ends the walk.

use tracing::{debug, trace};

use crate::node::{Node, Shape};
use crate::resolve::resolve;
use crate::visibility::Visibility;
use crate::ValidationResult;

/// Checks every value in order, stopping at the first failure.
///
/// Top-level empty slots (`None`) are skipped: they are neither defaulted
/// nor descended into. Empty slots found *inside* a value are filled with
/// their default and checked, so the walk may mutate the values it is
/// given.
///
/// See also the variadic [`check!`](crate::check!) macro.
///
/// # Example
///
/// ```rust
/// use validity::{check, node, Node, Validate, ValidationError};
///
/// #[derive(Default)]
/// struct Sku(String);
///
/// impl Validate for Sku {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.0.is_empty() {
///             return Err(ValidationError::new("sku is empty"));
///         }
///         Ok(())
///     }
/// }
///
/// node!(Sku: validate);
///
/// let mut stocked = vec![Sku("A-1".into()), Sku("B-2".into())];
/// let mut missing: Option<Sku> = None;
/// assert!(check([&mut stocked as &mut dyn Node, &mut missing]).is_ok());
///
/// let mut broken = vec![Sku("A-1".into()), Sku(String::new())];
/// let err = check([&mut broken as &mut dyn Node]).unwrap_err();
/// assert_eq!(err.message(), "sku is empty");
/// ```
pub fn check<'a, I>(values: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a mut dyn Node>,
{
    for value in values {
        if (*value).is_null() {
            trace!(type_name = (*value).type_name(), "skipping empty top-level value");
            continue;
        }
        check_one(value)?;
    }
    Ok(())
}

/// Checks a single value and everything reachable from it.
pub(crate) fn check_one(value: &mut dyn Node) -> ValidationResult {
    // Calls go through `*value` so they dispatch on the resolved target,
    // not on the `&mut` handle.
    let value: &mut dyn Node = resolve(value);
    let shape = (*value).shape();
    let type_name = (*value).type_name();
    trace!(type_name, ?shape, "checking value");

    match shape {
        Shape::Sequence => {
            let mut elements = Elements::new();
            (*value).visit_elements(&mut elements)?;
            trace!(type_name, elements = elements.visited(), "sequence passed");
        }
        Shape::Record => {
            let mut fields = Fields::new();
            (*value).visit_fields(&mut fields)?;
            trace!(
                type_name,
                visited = fields.visited(),
                skipped = fields.skipped(),
                "record passed"
            );
        }
        Shape::Scalar => {}
    }

    if let Some(validatable) = (*value).as_validate() {
        if let Err(err) = validatable.validate() {
            debug!(type_name, message = %err, "validation failed");
            return Err(err);
        }
    }
    Ok(())
}

/// Sink for the elements of a [`Shape::Sequence`] value.
///
/// Each element handed to it is checked immediately; the first failure is
/// returned so the caller can stop with `?`.
#[derive(Debug, Default)]
pub struct Elements {
    index: usize,
}

impl Elements {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Checks the next element.
    pub fn element(&mut self, element: &mut dyn Node) -> ValidationResult {
        trace!(index = self.index, "visiting element");
        self.index += 1;
        check_one(element)
    }

    /// Checks every element yielded by `iter`, in order.
    pub fn elements<'a, T, I>(&mut self, iter: I) -> ValidationResult
    where
        T: Node + 'a,
        I: IntoIterator<Item = &'a mut T>,
    {
        for element in iter {
            self.element(element)?;
        }
        Ok(())
    }

    /// Number of elements visited so far.
    pub(crate) fn visited(&self) -> usize {
        self.index
    }
}

/// Sink for the fields of a [`Shape::Record`] value.
///
/// Private fields are skipped; public ones are checked immediately.
#[derive(Debug, Default)]
pub struct Fields {
    visited: usize,
    skipped: usize,
}

impl Fields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Checks a field whose visibility follows from its name.
    ///
    /// `name` is the field's declared public name: it is traversed only if
    /// it starts with an uppercase letter (see
    /// [`is_public_field`](crate::is_public_field)).
    pub fn field(&mut self, name: &str, value: &mut dyn Node) -> ValidationResult {
        self.field_with(name, Visibility::of_name(name), value)
    }

    /// Checks a field with explicitly declared visibility.
    pub fn field_with(
        &mut self,
        name: &str,
        visibility: Visibility,
        value: &mut dyn Node,
    ) -> ValidationResult {
        if !visibility.is_public() {
            trace!(field = name, "skipping private field");
            self.skipped += 1;
            return Ok(());
        }
        trace!(field = name, "visiting field");
        self.visited += 1;
        check_one(value)
    }

    /// Number of public fields visited so far.
    pub(crate) fn visited(&self) -> usize {
        self.visited
    }

    /// Number of private fields skipped so far.
    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }
}
