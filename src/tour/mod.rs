//! Guided walkthrough of the library, printed line by line through a [`Logger`].

pub mod config;
pub mod lessons;

use std::io::Write;

use tracing::{debug, debug_span};

use crate::collections::{AssociativeCollection, Identity, Key, UniqueCollection};
use crate::core::Result;
use crate::logger::Logger;
use crate::ops::{from_less_than, sorted_by, sum};
use crate::person::{Greeter, Person, Pirate};

pub use config::{Section, TourConfig};
pub use lessons::{Coordinates, Element, Pantry};

pub struct Tour {
    config: TourConfig,
}

impl Tour {
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn run<W: Write>(&self, logger: &mut Logger<W>) -> Result<()> {
        for section in self.config.enabled_sections() {
            let _span = debug_span!("tour_section", section = section.name()).entered();
            let before = logger.lines();
            self.run_section(section, logger)?;
            debug!(lines = logger.lines() - before, "section finished");
        }
        logger.flush()
    }

    pub fn run_section<W: Write>(&self, section: Section, log: &mut Logger<W>) -> Result<()> {
        match section {
            Section::Bindings => self.bindings(log),
            Section::Templates => self.templates(log),
            Section::Spread => self.spread(log),
            Section::Arrows => self.arrows(log),
            Section::Pantry => self.pantry(log),
            Section::Literals => self.literals(log),
            Section::Destructuring => self.destructuring(log),
            Section::Classes => self.classes(log),
            Section::Defaults => self.defaults(log),
            Section::Sets => self.sets(log),
            Section::Maps => self.maps(log),
        }
    }

    fn bindings<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let mut some_variable = "some value";
        log.emit(some_variable)?;

        some_variable = "another value";
        log.emit(some_variable)
    }

    fn templates<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let TourConfig {
            first_name,
            last_name,
            ..
        } = &self.config;

        log.emit(lessons::introduce(first_name, last_name))?;
        log.emit(lessons::introduce_multiline(first_name, last_name))
    }

    fn spread<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        log.emit(format!("{:?}", crate::spread!(1, 2, 3)))
    }

    fn arrows<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        log.emit(lessons::hello_world())?;
        log.emit(format!("{:?}", crate::spread!(3, 4, 5)))?;
        log.emit(sum([1, 5, 10, 20])?)?;

        let sorted = sorted_by([1, 5, 8, 2, 3, 4], from_less_than(|a: &i32, b: &i32| a < b));
        log.emit(format!("{:?}", sorted))
    }

    fn pantry<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let pantry = Pantry::new(self.config.pantry_owner.as_str(), &self.config.fruits);
        for line in pantry.say_fruits() {
            log.emit(line)?;
        }
        Ok(())
    }

    fn literals<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let (x, y) = (self.config.x, self.config.y);
        let coordinates = Coordinates { x, y };

        log.emit(serde_json::to_string(&coordinates)?)
    }

    fn destructuring<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let (status, text_response) = lessons::http();
        log.emit(status)?;
        log.emit(text_response)
    }

    fn classes<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let TourConfig {
            first_name,
            last_name,
            age,
            ..
        } = &self.config;

        let mut me = Person::new(first_name.as_str(), last_name.as_str(), *age);
        log.emit(me.is_adult())?;
        log.emit(me.greeting())?;

        me.age = me.age.saturating_add(1);
        log.emit(me.greeting())?;

        let pirate = Pirate::new(first_name.as_str(), last_name.as_str(), *age);
        log.emit(pirate.greeting())
    }

    fn defaults<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        log.emit(lessons::repeat(None))?;
        log.emit(lessons::repeat(Some("Somethin'")))
    }

    fn sets<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let mut letters = UniqueCollection::new();
        letters.add("A");
        log.emit(letters.size())?;

        letters.add("A");
        log.emit(letters.size())?;

        log.emit(letters.has(&"A"))?;
        log.emit(letters.has(&"B"))?;

        letters.add("B");
        for letter in &letters {
            log.emit(letter)?;
        }

        log.emit(letters.delete(&"Z"))?;
        log.emit(letters.delete(&"A"))?;

        letters.clear();
        log.emit(letters.size())
    }

    fn maps<W: Write>(&self, log: &mut Logger<W>) -> Result<()> {
        let heading = Identity::new(Element::new("h1", self.config.heading.as_str()));

        let mut map: AssociativeCollection<Key<Element>, String> = AssociativeCollection::new();
        map.set("string-key".into(), "I belong to the string-key".to_string());
        map.set(
            heading.clone().into(),
            "I belong to the first <h1> in the DOM.".to_string(),
        );

        log.emit(map.size())?;

        if let Some(value) = map.get(&Key::Object(heading)) {
            log.emit(value)?;
        }

        for (key, value) in map.entries() {
            match key {
                Key::Value(v) => log.emit(v)?,
                Key::Object(element) => log.emit(&**element)?,
            }
            log.emit(value)?;
        }
        Ok(())
    }
}
