//! The three-stage "new environment" form.
//!
//! Stages are freely navigable: Back/Next clamp at the ends and the stage
//! indicator jumps anywhere without checking earlier stages. The only check is
//! in [`Wizard::finish`], which refuses an empty name.

use serde::{Deserialize, Serialize};

use crate::components::{Tag, TagList};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Details = 1,
    Description = 2,
    Tags = 3,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Details, Stage::Description, Stage::Tags];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Details => "Name & visibility",
            Stage::Description => "Description",
            Stage::Tags => "Tags",
        }
    }

    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Details => Some(Stage::Description),
            Stage::Description => Some(Stage::Tags),
            Stage::Tags => None,
        }
    }

    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Details => None,
            Stage::Description => Some(Stage::Details),
            Stage::Tags => Some(Stage::Description),
        }
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Payload handed to whoever creates the environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnvironment {
    pub name: String,
    pub private: bool,
    pub description: String,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardError {
    NameRequired,
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::NameRequired => f.write_str("Give the environment a name"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    pub stage: Stage,
    pub name: String,
    pub private: bool,
    pub description: String,
    pub tags: TagList,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            stage: Stage::Details,
            name: String::new(),
            private: false,
            description: String::new(),
            tags: TagList::new(),
        }
    }
}

impl Wizard {
    pub fn next(&mut self) {
        if let Some(stage) = self.stage.next() {
            self.stage = stage;
        }
    }

    pub fn back(&mut self) {
        if let Some(stage) = self.stage.previous() {
            self.stage = stage;
        }
    }

    pub fn jump(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Build the submit payload. The name is taken verbatim (not trimmed) but may not be empty.
    pub fn finish(&self) -> Result<NewEnvironment, WizardError> {
        if self.name.is_empty() {
            return Err(WizardError::NameRequired);
        }
        Ok(NewEnvironment {
            name: self.name.clone(),
            private: self.private,
            description: self.description.clone(),
            tags: self.tags.clone().into_vec(),
        })
    }
}
