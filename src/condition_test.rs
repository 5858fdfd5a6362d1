// Unit tests for condition module

use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Default, PartialEq)]
struct FakeElement {
    displayed: bool,
    enabled: bool,
    selected: bool,
    text: String,
    value: Option<String>,
    stale: bool,
}

#[async_trait]
impl Element for FakeElement {
    async fn is_displayed(&self) -> Result<bool, SessionError> {
        if self.stale {
            return Err(SessionError::StaleElement);
        }
        Ok(self.displayed)
    }

    async fn is_enabled(&self) -> Result<bool, SessionError> {
        Ok(self.enabled)
    }

    async fn is_selected(&self) -> Result<bool, SessionError> {
        Ok(self.selected)
    }

    async fn text(&self) -> Result<String, SessionError> {
        Ok(self.text.clone())
    }

    async fn value_property(&self) -> Result<Option<String>, SessionError> {
        Ok(self.value.clone())
    }
}

/// Session holding at most one element, returned for any selector
#[derive(Default)]
struct FakeSession {
    element: Option<FakeElement>,
    locates: AtomicUsize,
}

impl FakeSession {
    fn with(element: FakeElement) -> Self {
        FakeSession {
            element: Some(element),
            locates: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Session for FakeSession {
    type Element = FakeElement;

    async fn locate(&self, _selector: &Selector) -> Result<Option<FakeElement>, SessionError> {
        self.locates.fetch_add(1, Ordering::SeqCst);
        Ok(self.element.clone())
    }
}

fn predicate(condition: Condition, negative: bool) -> Predicate {
    Predicate::new(Selector::new("#target"), condition, negative)
}

#[test]
fn test_phrase_lookup() {
    for name in ConditionName::ALL {
        assert_eq!(name.as_phrase().parse::<ConditionName>().unwrap(), name);
        assert_eq!(name.to_string(), name.as_phrase());
    }
}

#[test]
fn test_unknown_phrase_is_rejected() {
    let err = "be visable".parse::<ConditionName>().unwrap_err();
    assert!(matches!(err, WaitError::UnknownCondition(ref p) if p == "be visable"));

    // Lookup is exact
    assert!("Be Visible".parse::<ConditionName>().is_err());
    assert!(" exist".parse::<ConditionName>().is_err());
    assert!("".parse::<ConditionName>().is_err());
}

#[test]
fn test_phrase_to_condition() {
    assert_eq!(ConditionName::default(), ConditionName::Exist);
    assert_eq!(ConditionName::BeChecked.condition(None), Condition::Selected);
    assert_eq!(ConditionName::BeSelected.condition(None), Condition::Selected);
    assert_eq!(ConditionName::BeEnabled.condition(None), Condition::Enabled);
    assert_eq!(ConditionName::BeVisible.condition(None), Condition::Visible);
    assert_eq!(ConditionName::Exist.condition(None), Condition::Present);
    assert_eq!(
        ConditionName::ContainAText.condition(Some("Save".into())),
        Condition::ContainsText(Some("Save".into()))
    );
    assert_eq!(
        ConditionName::ContainAValue.condition(None),
        Condition::ContainsValue(None)
    );
    // Expected text only matters for the contain conditions
    assert_eq!(
        ConditionName::BeVisible.condition(Some("ignored".into())),
        Condition::Visible
    );
}

#[tokio::test]
async fn test_positive_predicates_return_element() {
    let element = FakeElement {
        displayed: true,
        enabled: true,
        selected: true,
        text: "Save changes".into(),
        value: Some("hello".into()),
        stale: false,
    };
    let session = FakeSession::with(element.clone());

    for condition in [
        Condition::Present,
        Condition::Visible,
        Condition::Enabled,
        Condition::Selected,
        Condition::ContainsText(Some("Save".into())),
        Condition::ContainsValue(Some("ell".into())),
    ] {
        let outcome = predicate(condition.clone(), false).check(&session).await.unwrap();
        assert_eq!(outcome, Some(Satisfied::Element(element.clone())), "{condition:?}");

        let negated = predicate(condition.clone(), true).check(&session).await.unwrap();
        assert_eq!(negated, None, "{condition:?}");
    }
}

#[tokio::test]
async fn test_negative_predicates_return_element_when_false() {
    let element = FakeElement::default();
    let session = FakeSession::with(element.clone());

    for condition in [
        Condition::Visible,
        Condition::Enabled,
        Condition::Selected,
        Condition::ContainsText(None),
        Condition::ContainsValue(None),
    ] {
        let outcome = predicate(condition.clone(), true).check(&session).await.unwrap();
        assert_eq!(outcome, Some(Satisfied::Element(element.clone())), "{condition:?}");

        let positive = predicate(condition.clone(), false).check(&session).await.unwrap();
        assert_eq!(positive, None, "{condition:?}");
    }
}

#[tokio::test]
async fn test_missing_element() {
    let session = FakeSession::default();

    // Nothing located satisfies "does not exist"
    let outcome = predicate(Condition::Present, true).check(&session).await.unwrap();
    assert_eq!(outcome, Some(Satisfied::Absent));

    assert_eq!(predicate(Condition::Present, false).check(&session).await.unwrap(), None);

    // Other negated conditions still need an element to inspect
    assert_eq!(predicate(Condition::Visible, true).check(&session).await.unwrap(), None);
    assert_eq!(
        predicate(Condition::ContainsText(None), true).check(&session).await.unwrap(),
        None
    );
    assert_eq!(session.locates.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_text_and_value_matching() {
    let session = FakeSession::with(FakeElement {
        text: "Cancel".into(),
        value: None,
        ..Default::default()
    });

    let save = predicate(Condition::ContainsText(Some("Save".into())), false);
    assert_eq!(save.check(&session).await.unwrap(), None);

    let any_text = predicate(Condition::ContainsText(None), false);
    assert!(any_text.check(&session).await.unwrap().is_some());

    // Missing value property reads as empty
    let any_value = predicate(Condition::ContainsValue(None), false);
    assert_eq!(any_value.check(&session).await.unwrap(), None);
    let empty_needle = predicate(Condition::ContainsValue(Some(String::new())), false);
    assert!(empty_needle.check(&session).await.unwrap().is_some());
}

#[tokio::test]
async fn test_stale_element_is_reported() {
    let session = FakeSession::with(FakeElement {
        stale: true,
        ..Default::default()
    });

    let err = predicate(Condition::Visible, false)
        .check(&session)
        .await
        .unwrap_err();
    assert!(err.is_transient());
}

#[test]
fn test_satisfied_accessors() {
    let found = Satisfied::Element(7);
    assert_eq!(found.element(), Some(&7));
    assert_eq!(found.into_element(), Some(7));

    let absent: Satisfied<i32> = Satisfied::Absent;
    assert_eq!(absent.element(), None);
    assert_eq!(absent.into_element(), None);
}
