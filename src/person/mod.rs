//! Person records and the greeting capability.
//!
//! Behavior that differs between kinds of person lives behind [`Greeter`];
//! field storage and the derived full name live only in [`Person`]. Variants
//! wrap a `Person` instead of duplicating its fields.

pub mod pirate;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use pirate::Pirate;

/// Age at which [`Person::is_adult`] starts returning `true`.
pub const ADULT_AGE: u32 = 18;

/// Anything that can introduce itself.
pub trait Greeter {
    fn greeting(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// Recomputed from the current fields on every call.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

impl Greeter for Person {
    fn greeting(&self) -> String {
        format!(
            "Hi, my name is {} and I am {} years old.",
            self.full_name(),
            self.age
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.age)
    }
}

impl AsRef<Person> for Person {
    fn as_ref(&self) -> &Person {
        self
    }
}

impl AsMut<Person> for Person {
    fn as_mut(&mut self) -> &mut Person {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_tracks_fields() {
        let mut me = Person::new("Brad", "Daily", 35);
        assert_eq!(me.full_name(), "Brad Daily");

        me.last_name = "Weekly".to_string();
        assert_eq!(me.full_name(), "Brad Weekly");
    }

    #[test]
    fn test_is_adult_boundary() {
        let mut me = Person::new("Brad", "Daily", 18);
        assert!(me.is_adult());

        me.age = 17;
        assert!(!me.is_adult());
    }

    #[test]
    fn test_greeting_reflects_latest_age() {
        let mut me = Person::new("Brad", "Daily", 35);
        assert_eq!(me.greeting(), "Hi, my name is Brad Daily and I am 35 years old.");

        me.age = 36;
        assert_eq!(me.greeting(), "Hi, my name is Brad Daily and I am 36 years old.");
    }

    #[test]
    fn test_serde_field_names() {
        let me = Person::new("Brad", "Daily", 35);
        let json = serde_json::to_value(&me).unwrap();
        assert_eq!(json["first_name"], "Brad");
        assert_eq!(json["age"], 35);
    }
}
