use std::fmt;
use std::str::FromStr;

use crate::core::PrimerError;

/// One block of the tour, in the order the tour runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Bindings,
    Templates,
    Spread,
    Arrows,
    Pantry,
    Literals,
    Destructuring,
    Classes,
    Defaults,
    Sets,
    Maps,
}

impl Section {
    pub const ALL: [Section; 11] = [
        Section::Bindings,
        Section::Templates,
        Section::Spread,
        Section::Arrows,
        Section::Pantry,
        Section::Literals,
        Section::Destructuring,
        Section::Classes,
        Section::Defaults,
        Section::Sets,
        Section::Maps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bindings => "bindings",
            Self::Templates => "templates",
            Self::Spread => "spread",
            Self::Arrows => "arrows",
            Self::Pantry => "pantry",
            Self::Literals => "literals",
            Self::Destructuring => "destructuring",
            Self::Classes => "classes",
            Self::Defaults => "defaults",
            Self::Sets => "sets",
            Self::Maps => "maps",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| PrimerError::InvalidArgument(format!("Unknown section '{}'", s)))
    }
}

/// Inputs for a tour run.
///
/// The default reproduces the canonical walkthrough.
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// First name used in templates and person records
    pub first_name: String,

    /// Last name used in templates and person records
    pub last_name: String,

    /// Starting age of the person record
    pub age: u32,

    /// Owner of the pantry
    pub pantry_owner: String,

    /// Pantry contents, in order
    pub fruits: Vec<String>,

    /// Coordinates literal
    pub x: i64,
    pub y: i64,

    /// Text of the heading element used as an object key
    pub heading: String,

    /// Sections to run; always executed in tour order
    pub sections: Vec<Section>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            first_name: "Brad".to_string(),
            last_name: "Daily".to_string(),
            age: 35,
            pantry_owner: "Jim".to_string(),
            fruits: vec!["apple".into(), "orange".into(), "pear".into()],
            x: 50,
            y: 100,
            heading: "Primer".to_string(),
            sections: Section::ALL.to_vec(),
        }
    }
}

impl TourConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    pub fn first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    /// Set the last name
    pub fn last_name(mut self, last_name: &str) -> Self {
        self.last_name = last_name.to_string();
        self
    }

    /// Set the starting age
    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn pantry(mut self, owner: &str, fruits: &[&str]) -> Self {
        self.pantry_owner = owner.to_string();
        self.fruits = fruits.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn coordinates(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn heading(mut self, heading: &str) -> Self {
        self.heading = heading.to_string();
        self
    }

    /// Restrict the run to `sections`. An empty list means every section.
    pub fn sections(mut self, sections: &[Section]) -> Self {
        self.sections = if sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            sections.to_vec()
        };
        self
    }

    /// Enabled sections, deduplicated and in tour order.
    pub fn enabled_sections(&self) -> Vec<Section> {
        let mut sections = self.sections.clone();
        sections.sort();
        sections.dedup();
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_everything() {
        let config = TourConfig::default();
        assert_eq!(config.enabled_sections(), Section::ALL.to_vec());
        assert_eq!(config.first_name, "Brad");
        assert_eq!(config.age, 35);
    }

    #[test]
    fn test_builder() {
        let config = TourConfig::new()
            .first_name("Anne")
            .last_name("Bonny")
            .age(20)
            .pantry("Mary", &["plum"])
            .coordinates(1, 2)
            .sections(&[Section::Maps, Section::Sets, Section::Maps]);

        assert_eq!(config.last_name, "Bonny");
        assert_eq!(config.fruits, vec!["plum".to_string()]);
        assert_eq!(config.enabled_sections(), vec![Section::Sets, Section::Maps]);
    }

    #[test]
    fn test_empty_sections_means_all() {
        let config = TourConfig::new().sections(&[]);
        assert_eq!(config.enabled_sections().len(), Section::ALL.len());
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("Sets".parse::<Section>().unwrap(), Section::Sets);
        assert_eq!(" maps ".parse::<Section>().unwrap(), Section::Maps);
        assert!("loops".parse::<Section>().unwrap_err().is_invalid_argument());

        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }
}
