//! Tests for field visibility during record descent.

use validity::{
    check, is_public_field, node, Fields, Node, Shape, Validate, ValidationError,
    ValidationResult, Visibility,
};

#[derive(Default)]
struct Poison;

impl Validate for Poison {
    fn validate(&self) -> Result<(), ValidationError> {
        Err(ValidationError::new("poison reached"))
    }
}

node!(Poison: validate);

#[derive(Default)]
struct Exposed {
    value: Poison,
}

#[derive(Default)]
struct Hidden {
    value: Poison,
}

node!(Exposed { "Value" => value });
node!(Hidden { "value" => value });

#[test]
fn test_public_named_field_is_traversed() {
    let mut exposed = Exposed::default();
    assert_eq!(check!(exposed).unwrap_err().message(), "poison reached");
}

#[test]
fn test_private_named_field_is_skipped() {
    let mut hidden = Hidden::default();
    assert!(check!(hidden).is_ok());
}

#[test]
fn test_underscore_and_digit_names_are_private() {
    #[derive(Default)]
    struct Odd {
        underscore: Poison,
        digit: Poison,
    }

    node!(Odd { "_Underscore" => underscore, "9Digit" => digit });

    let mut odd = Odd::default();
    assert!(check!(odd).is_ok());
}

#[test]
fn test_private_field_is_not_reached_even_when_nested() {
    #[derive(Default)]
    struct Outer {
        inner: Exposed,
    }

    node!(Outer { "inner" => inner });

    let mut outer = Outer::default();
    assert!(check!(outer).is_ok());
}

/// A record that declares visibility per field instead of by name.
#[derive(Default)]
struct Annotated {
    token: Poison,
    audit: Vec<Poison>,
}

impl Node for Annotated {
    fn shape(&self) -> Shape {
        Shape::Record
    }

    fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
        fields.field_with("Audit", Visibility::Private, &mut self.audit)?;
        fields.field_with("token", Visibility::Public, &mut self.token)
    }
}

#[test]
fn test_explicit_visibility_overrides_name() {
    let mut annotated = Annotated {
        token: Poison,
        audit: vec![Poison],
    };
    assert_eq!(check!(annotated).unwrap_err().message(), "poison reached");
}

#[test]
fn test_explicit_private_field_is_skipped() {
    #[derive(Default)]
    struct Quiet {
        token: Poison,
    }

    impl Node for Quiet {
        fn shape(&self) -> Shape {
            Shape::Record
        }

        fn visit_fields(&mut self, fields: &mut Fields) -> ValidationResult {
            fields.field_with("Token", Visibility::Private, &mut self.token)
        }
    }

    let mut quiet = Quiet::default();
    assert!(check!(quiet).is_ok());
}

#[test]
fn test_heuristic_matches_visibility() {
    for name in ["Name", "name", "_name", "1", "", "Ünicode", "ünicode"] {
        assert_eq!(
            Visibility::of_name(name).is_public(),
            is_public_field(name),
            "mismatch for {:?}",
            name
        );
    }
}
