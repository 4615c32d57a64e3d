//! Declarative macros for the traversal entry point and `Node` impls.

/// Checks any number of values, stopping at the first failure.
///
/// Each argument is a place expression; it is borrowed mutably and passed
/// to [`check`](crate::check()) in order. `check!()` succeeds.
///
/// # Example
///
/// ```rust
/// use validity::{check, node, Validate, ValidationError};
///
/// #[derive(Default)]
/// struct Age(u8);
///
/// impl Validate for Age {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.0 > 150 {
///             return Err(ValidationError::new("age out of range"));
///         }
///         Ok(())
///     }
/// }
///
/// node!(Age: validate);
///
/// let mut ok = Age(30);
/// let mut bad = Age(200);
/// let mut ages = vec![Age(1), Age(2)];
///
/// assert!(check!().is_ok());
/// assert!(check!(ok, ages).is_ok());
/// assert_eq!(check!(ok, bad, ages).unwrap_err().message(), "age out of range");
/// ```
#[macro_export]
macro_rules! check {
    () => {
        $crate::check(::std::iter::empty::<&mut dyn $crate::Node>())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::check([$(&mut $value as &mut dyn $crate::Node),+])
    };
}

/// Implements [`Node`](crate::Node) for a host type.
///
/// - `node!(T)`: an opaque scalar with no validation capability.
/// - `node!(T: validate)`: an opaque scalar exposing its
///   [`Validate`](crate::Validate) impl.
/// - `node!(T { "Name" => field, ... })`: a record whose fields are visited
///   in the listed order. The string is the field's declared name and
///   decides its visibility (see [`is_public_field`](crate::is_public_field)).
/// - `node!(T: validate { ... })`: a record exposing its `Validate` impl.
///
/// Generic types implement `Node` by hand.
///
/// # Example
///
/// ```rust
/// use validity::{check, node, Validate, ValidationError};
///
/// #[derive(Default)]
/// struct Line {
///     sku: String,
///     quantity: u32,
/// }
///
/// impl Validate for Line {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.quantity == 0 {
///             return Err(ValidationError::new("quantity must be positive"));
///         }
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct Order {
///     lines: Vec<Line>,
///     draft: Option<Line>,
/// }
///
/// node!(Line: validate { "Sku" => sku, "Quantity" => quantity });
/// node!(Order { "Lines" => lines, "draft" => draft });
///
/// let mut order = Order {
///     lines: vec![Line { sku: "A-1".into(), quantity: 2 }],
///     draft: None,
/// };
/// assert!(check!(order).is_ok());
///
/// order.lines.push(Line::default());
/// assert!(check!(order).is_err());
/// ```
#[macro_export]
macro_rules! node {
    ($ty:ty: validate { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::Node for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Record
            }

            #[allow(unused_variables)]
            fn visit_fields(&mut self, fields: &mut $crate::Fields) -> $crate::ValidationResult {
                $(fields.field($name, &mut self.$field)?;)*
                Ok(())
            }

            fn as_validate(&self) -> ::std::option::Option<&dyn $crate::Validate> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::Node for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::Record
            }

            #[allow(unused_variables)]
            fn visit_fields(&mut self, fields: &mut $crate::Fields) -> $crate::ValidationResult {
                $(fields.field($name, &mut self.$field)?;)*
                Ok(())
            }
        }
    };
    ($ty:ty: validate) => {
        impl $crate::Node for $ty {
            fn as_validate(&self) -> ::std::option::Option<&dyn $crate::Validate> {
                ::std::option::Option::Some(self)
            }
        }
    };
    ($ty:ty) => {
        impl $crate::Node for $ty {}
    };
}
