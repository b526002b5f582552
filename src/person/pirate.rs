use serde::{Deserialize, Serialize};

use super::{Greeter, Person};

/// A person who greets like a sailor.
///
/// Everything except [`Greeter::greeting`] is delegated to the wrapped [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pirate {
    person: Person,
}

impl Pirate {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            person: Person::new(first_name, last_name, age),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn into_person(self) -> Person {
        self.person
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    pub fn is_adult(&self) -> bool {
        self.person.is_adult()
    }
}

impl Greeter for Pirate {
    fn greeting(&self) -> String {
        format!(
            "Arggh, me name is {} and I've been sailing these here seas for {} years.",
            self.person.full_name(),
            self.person.age
        )
    }
}

impl From<Person> for Pirate {
    fn from(person: Person) -> Self {
        Self { person }
    }
}

impl AsRef<Person> for Pirate {
    fn as_ref(&self) -> &Person {
        &self.person
    }
}

impl AsMut<Person> for Pirate {
    fn as_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
