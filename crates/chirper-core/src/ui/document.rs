use std::collections::HashMap;
use std::fmt;

use anyhow::Result;

use super::elements;
use crate::HandlerError;

/// CSS `display` values the handlers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Display::None)
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The page a handler runs against: input values and element styles
/// looked up by element id.
pub trait Document {
    /// Current value of an input, `None` if no such input exists
    fn input_value(&self, id: &str) -> Option<String>;

    /// Display style of an element, `None` if no such element exists
    fn display(&self, id: &str) -> Option<Display>;

    fn set_display(&mut self, id: &str, display: Display) -> Result<()>;
}

/// In-memory document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    inputs: HashMap<String, String>,
    elements: HashMap<String, Display>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign-in form: empty `email` and `psw` inputs and a visible `id01` panel
    pub fn login_form() -> Self {
        Self::new()
            .with_input(elements::EMAIL, "")
            .with_input(elements::PASSWORD, "")
            .with_element(elements::SIGN_IN_PANEL, Display::Block)
    }

    /// Sign-up form: empty `email_reg`, `psw_reg`, `psw2` inputs and a visible `id02` panel
    pub fn register_form() -> Self {
        Self::new()
            .with_input(elements::REGISTER_EMAIL, "")
            .with_input(elements::REGISTER_PASSWORD, "")
            .with_input(elements::REGISTER_PASSWORD_REPEAT, "")
            .with_element(elements::SIGN_UP_PANEL, Display::Block)
    }

    pub fn with_input(mut self, id: &str, value: impl Into<String>) -> Self {
        self.inputs.insert(id.to_string(), value.into());
        self
    }

    pub fn with_element(mut self, id: &str, display: Display) -> Self {
        self.elements.insert(id.to_string(), display);
        self
    }

    /// Type into an existing input
    pub fn set_input(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        match self.inputs.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(HandlerError::MissingElement(id.to_string()).into()),
        }
    }
}

impl Document for MemoryDocument {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn display(&self, id: &str) -> Option<Display> {
        self.elements.get(id).copied()
    }

    fn set_display(&mut self, id: &str, display: Display) -> Result<()> {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = display;
                Ok(())
            }
            None => Err(HandlerError::MissingElement(id.to_string()).into()),
        }
    }
}
