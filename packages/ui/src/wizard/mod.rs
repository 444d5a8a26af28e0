//! Multi-step wizard for creating a new environment.

pub mod stages;
pub use stages::{NewEnvironment, Stage, Wizard, WizardError};

mod component;
pub use component::NewEnvironmentWizard;
