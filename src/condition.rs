//! Element conditions a step can wait for
//!
//! Step definitions name conditions with short phrases ("be visible",
//! "contain a text", ...). Each phrase resolves to a [`Condition`], and a
//! [`Predicate`] binds a condition to a selector and a polarity so it can be
//! evaluated against a live session one attempt at a time.

use std::fmt;
use std::str::FromStr;

use crate::errors::WaitError;
use crate::selector::Selector;
use crate::session::{Element, Session, SessionError};

/// Condition phrases understood by the wait step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConditionName {
    BeChecked,
    BeEnabled,
    BeSelected,
    BeVisible,
    ContainAText,
    ContainAValue,
    /// Used when a step names no condition
    #[default]
    Exist,
}

impl ConditionName {
    /// Every supported phrase, in the order they are listed to users
    pub const ALL: [ConditionName; 7] = [
        ConditionName::BeChecked,
        ConditionName::BeEnabled,
        ConditionName::BeSelected,
        ConditionName::BeVisible,
        ConditionName::ContainAText,
        ConditionName::ContainAValue,
        ConditionName::Exist,
    ];

    /// The phrase as it appears in step text
    pub fn as_phrase(&self) -> &'static str {
        match self {
            ConditionName::BeChecked => "be checked",
            ConditionName::BeEnabled => "be enabled",
            ConditionName::BeSelected => "be selected",
            ConditionName::BeVisible => "be visible",
            ConditionName::ContainAText => "contain a text",
            ConditionName::ContainAValue => "contain a value",
            ConditionName::Exist => "exist",
        }
    }

    /// Build the condition this phrase stands for.
    ///
    /// `expected` is only used by the text and value conditions; without it
    /// they check for any non-empty content.
    pub fn condition(self, expected: Option<String>) -> Condition {
        match self {
            ConditionName::BeChecked | ConditionName::BeSelected => Condition::Selected,
            ConditionName::BeEnabled => Condition::Enabled,
            ConditionName::BeVisible => Condition::Visible,
            ConditionName::ContainAText => Condition::ContainsText(expected),
            ConditionName::ContainAValue => Condition::ContainsValue(expected),
            ConditionName::Exist => Condition::Present,
        }
    }
}

impl FromStr for ConditionName {
    type Err = WaitError;

    /// Exact, case-sensitive phrase lookup
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionName::ALL
            .into_iter()
            .find(|name| name.as_phrase() == s)
            .ok_or_else(|| WaitError::UnknownCondition(s.to_string()))
    }
}

impl fmt::Display for ConditionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_phrase())
    }
}

/// A check that can be made against a located element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Present,
    Visible,
    Enabled,
    Selected,
    /// Rendered text contains the substring, or is non-empty when `None`
    ContainsText(Option<String>),
    /// `value` property contains the substring, or is non-empty when `None`
    ContainsValue(Option<String>),
}

impl Condition {
    async fn holds<E: Element>(&self, element: &E) -> Result<bool, SessionError> {
        match self {
            Condition::Present => Ok(true),
            Condition::Visible => element.is_displayed().await,
            Condition::Enabled => element.is_enabled().await,
            Condition::Selected => element.is_selected().await,
            Condition::ContainsText(expected) => {
                let text = element.text().await?;
                Ok(contains(&text, expected.as_deref()))
            }
            Condition::ContainsValue(expected) => {
                // A missing value property reads as empty
                let value = element.value_property().await?.unwrap_or_default();
                Ok(contains(&value, expected.as_deref()))
            }
        }
    }
}

fn contains(haystack: &str, expected: Option<&str>) -> bool {
    match expected {
        Some(needle) => haystack.contains(needle),
        None => !haystack.is_empty(),
    }
}

/// What a satisfied predicate hands back
#[derive(Debug, Clone, PartialEq)]
pub enum Satisfied<E> {
    /// The element the condition was checked on
    Element(E),
    /// Nothing matched the selector, which is what a negated `exist` waits for
    Absent,
}

impl<E> Satisfied<E> {
    pub fn element(&self) -> Option<&E> {
        match self {
            Satisfied::Element(element) => Some(element),
            Satisfied::Absent => None,
        }
    }

    pub fn into_element(self) -> Option<E> {
        match self {
            Satisfied::Element(element) => Some(element),
            Satisfied::Absent => None,
        }
    }
}

/// A condition bound to a selector and a polarity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub selector: Selector,
    pub condition: Condition,
    /// Wait for the condition to be false instead of true
    pub negative: bool,
}

impl Predicate {
    pub fn new(selector: Selector, condition: Condition, negative: bool) -> Self {
        Predicate {
            selector,
            condition,
            negative,
        }
    }

    /// Make exactly one attempt against the session.
    ///
    /// `Ok(None)` means the predicate does not hold right now. An element
    /// that cannot be located never satisfies a predicate, except a negated
    /// presence check.
    pub async fn check<S: Session>(
        &self,
        session: &S,
    ) -> Result<Option<Satisfied<S::Element>>, SessionError> {
        let Some(element) = session.locate(&self.selector).await? else {
            let absent_ok = self.negative && self.condition == Condition::Present;
            return Ok(absent_ok.then_some(Satisfied::Absent));
        };

        let holds = self.condition.holds(&element).await?;
        Ok((holds != self.negative).then_some(Satisfied::Element(element)))
    }
}

#[cfg(test)]
#[path = "condition_test.rs"]
mod condition_test;
