//! Tests for empty-slot handling: skipped at the top level, defaulted inside.

use std::cell::Cell;

use validity::{check, node, Node, Validate, ValidationError};

thread_local! {
    static CHECKS: Cell<usize> = const { Cell::new(0) };
}

/// Fails while its threshold is zero, which is also its default.
#[derive(Debug, Default, PartialEq)]
struct Limit {
    threshold: u32,
}

impl Validate for Limit {
    fn validate(&self) -> Result<(), ValidationError> {
        CHECKS.with(|checks| checks.set(checks.get() + 1));
        if self.threshold == 0 {
            return Err(ValidationError::new("threshold must be set"));
        }
        Ok(())
    }
}

node!(Limit: validate { "Threshold" => threshold });

#[derive(Debug, Default)]
struct Account {
    limit: Option<Box<Limit>>,
    nickname: Option<String>,
}

node!(Account { "Limit" => limit, "Nickname" => nickname });

fn checks() -> usize {
    CHECKS.with(Cell::get)
}

#[test]
fn test_top_level_none_is_skipped() {
    let before = checks();
    let mut missing: Option<Limit> = None;

    assert!(check!(missing).is_ok());
    assert!(missing.is_none());
    assert_eq!(checks(), before);
}

#[test]
fn test_top_level_some_is_checked() {
    let mut present = Some(Limit::default());
    assert_eq!(
        check!(present).unwrap_err().message(),
        "threshold must be set"
    );
}

#[test]
fn test_none_field_is_materialized_and_checked() {
    let mut account = Account::default();

    let err = check!(account).unwrap_err();
    assert_eq!(err.message(), "threshold must be set");
    assert_eq!(account.limit, Some(Box::new(Limit { threshold: 0 })));
}

#[test]
fn test_materialized_default_that_passes() {
    let mut account = Account {
        limit: Some(Box::new(Limit { threshold: 10 })),
        nickname: None,
    };

    assert!(check!(account).is_ok());
    assert_eq!(account.nickname, Some(String::new()));
}

#[test]
fn test_none_elements_are_materialized() {
    let mut slots: Vec<Option<Limit>> = vec![Some(Limit { threshold: 1 }), None];

    assert!(check!(slots).is_err());
    assert_eq!(slots[1], Some(Limit::default()));
}

#[test]
fn test_top_level_none_inside_box_is_defaulted() {
    // Only a bare top-level slot is skipped; a boxed one is reached by descent.
    let mut boxed: Box<Option<Limit>> = Box::new(None);

    assert!(check!(boxed).is_err());
    assert!(boxed.is_some());
}

#[test]
fn test_skipped_none_does_not_stop_later_values() {
    let mut missing: Option<Limit> = None;
    let mut present = Limit { threshold: 0 };

    let err = check([&mut missing as &mut dyn Node, &mut present]).unwrap_err();
    assert_eq!(err.message(), "threshold must be set");
}

#[test]
fn test_private_none_field_is_left_alone() {
    #[derive(Default)]
    struct Settings {
        cache: Option<Limit>,
    }

    node!(Settings { "cache" => cache });

    let mut settings = Settings::default();
    assert!(check!(settings).is_ok());
    assert!(settings.cache.is_none());
}
