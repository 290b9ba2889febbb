use crate::WorksError;
use serde::Serialize;
use std::fmt;

/// Owner record attached to assembly receipts.
///
/// This is an immutable value object: it is only ever constructed through
/// [`OwnerProfileBuilder`] and never changes after `build` returns.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    first_name: String,
    last_name: String,
    age: u32,
    email: String,
}

impl OwnerProfile {
    /// Entry point to the fluent builder.
    pub fn builder() -> OwnerProfileBuilder {
        OwnerProfileBuilder::new()
    }

    /// Returns the owner's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the owner's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the owner's age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the owner's email address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for OwnerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) - {}",
            self.first_name, self.last_name, self.age, self.email
        )
    }
}

/// Fluent accumulator for [`OwnerProfile`].
///
/// Setters take and return the builder by value, so they chain in any order
/// and the last write per field wins. `build` consumes the builder: a
/// builder is single-use by construction, and reuse after `build` is a
/// compile error rather than a runtime rule. Clone the builder first to
/// keep the accumulated state for a second build.
#[derive(Debug, Clone, Default)]
pub struct OwnerProfileBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<u32>,
    email: Option<String>,
}

impl OwnerProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name<S: Into<String>>(mut self, first_name: S) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name<S: Into<String>>(mut self, last_name: S) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Snapshots the accumulated fields into an immutable [`OwnerProfile`].
    ///
    /// Only presence is validated: every field must have been set at least
    /// once, and there are no cross-field rules.
    ///
    /// # Returns
    /// * `Ok(OwnerProfile)` - Value object reflecting the last-set values
    /// * `Err(WorksError)` - A field was never set
    pub fn build(self) -> Result<OwnerProfile, WorksError> {
        Ok(OwnerProfile {
            first_name: required("first_name", self.first_name)?,
            last_name: required("last_name", self.last_name)?,
            age: required("age", self.age)?,
            email: required("email", self.email)?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T, WorksError> {
    value.ok_or_else(|| WorksError::validation(format!("Owner profile is missing `{}`", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_all_fields() {
        let profile = OwnerProfile::builder()
            .first_name("Jane")
            .last_name("Doe")
            .age(34)
            .email("jane.doe@example.com")
            .build()
            .unwrap();

        assert_eq!(profile.first_name(), "Jane");
        assert_eq!(profile.last_name(), "Doe");
        assert_eq!(profile.age(), 34);
        assert_eq!(profile.email(), "jane.doe@example.com");
    }

    #[test]
    fn test_setter_order_does_not_matter() {
        let a = OwnerProfile::builder()
            .email("a@example.com")
            .age(51)
            .last_name("Ortiz")
            .first_name("Ana")
            .build()
            .unwrap();

        let b = OwnerProfile::builder()
            .first_name("Ana")
            .last_name("Ortiz")
            .age(51)
            .email("a@example.com")
            .build()
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_last_write_per_field_wins() {
        let profile = OwnerProfile::builder()
            .first_name("Draft")
            .last_name("Doe")
            .age(20)
            .email("draft@example.com")
            .first_name("Jane")
            .age(34)
            .build()
            .unwrap();

        assert_eq!(profile.first_name(), "Jane");
        assert_eq!(profile.age(), 34);
        assert_eq!(profile.email(), "draft@example.com");
    }

    #[test]
    fn test_missing_field_fails_presence_check() {
        let result = OwnerProfile::builder()
            .first_name("Jane")
            .last_name("Doe")
            .age(34)
            .build();

        match result {
            Err(WorksError::ValidationError(msg)) => assert!(msg.contains("email")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_cloned_builder_builds_equal_profiles() {
        let builder = OwnerProfile::builder()
            .first_name("Jane")
            .last_name("Doe")
            .age(34)
            .email("jane.doe@example.com");

        let first = builder.clone().build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_display_matches_receipt_format() {
        let profile = OwnerProfile::builder()
            .first_name("Jane")
            .last_name("Doe")
            .age(34)
            .email("jane.doe@example.com")
            .build()
            .unwrap();

        assert_eq!(profile.to_string(), "Jane Doe (34) - jane.doe@example.com");
    }
}
