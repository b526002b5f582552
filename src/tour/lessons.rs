//! Small building blocks used by the tour.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLD: &str = "Nothin'";

pub fn introduce(first_name: &str, last_name: &str) -> String {
    format!("My name is {} {}.", first_name, last_name)
}

pub fn introduce_multiline(first_name: &str, last_name: &str) -> String {
    format!(
        "My name is {} {}.\nReally nice to meet ya.",
        first_name, last_name
    )
}

pub fn hello_world() -> &'static str {
    "Hello world."
}

/// `told` falls back to [`DEFAULT_TOLD`] when absent.
pub fn repeat(told: Option<&str>) -> String {
    format!("You told me {}.", told.unwrap_or(DEFAULT_TOLD))
}

/// Status line of a canned "not found" response, meant to be destructured.
pub fn http() -> (u16, &'static str) {
    (404, "Not found")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    pub owner: String,
    pub fruits: Vec<String>,
}

impl Pantry {
    pub fn new<I, S>(owner: impl Into<String>, fruits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            owner: owner.into(),
            fruits: fruits.into_iter().map(Into::into).collect(),
        }
    }

    /// One line per fruit; the closure borrows `self` explicitly for the owner.
    pub fn say_fruits(&self) -> Vec<String> {
        let owner = &self.owner;
        self.fruits
            .iter()
            .map(|fruit| format!("{}'s pantry has {}s", owner, fruit))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
}

impl Coordinates {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Stand-in for a document node: an object whose identity, not contents, matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{tag}>{}</{tag}>", self.text, tag = self.tag)
    }
}
