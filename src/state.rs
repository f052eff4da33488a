//! # Per-instance UI state
//!
//! Every rendered card owns one [`CardState`], every anchor with
//! supplementary text owns one [`Tooltip`]. Neither is shared, and neither
//! touches the catalog or the index.
use crate::{Error, Examples, Language};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Disclosure and active example tab of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    disclosure: Disclosure,
    languages: Vec<Language>,
    active: usize,
}

impl CardState {
    /// Collapsed, showing the first declared language
    pub fn new(examples: &Examples) -> Self {
        Self {
            disclosure: Disclosure::Collapsed,
            languages: examples.languages(),
            active: 0,
        }
    }

    pub fn expanded(mut self) -> Self {
        self.disclosure = Disclosure::Expanded;
        self
    }

    pub fn toggle(&mut self) {
        self.disclosure = self.disclosure.toggled();
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn is_expanded(&self) -> bool {
        self.disclosure == Disclosure::Expanded
    }

    /// Switches the example tab; the disclosure is left alone
    pub fn select_language(&mut self, language: Language) -> Result<(), Error> {
        let pos = self
            .languages
            .iter()
            .position(|l| *l == language)
            .ok_or(Error::LanguageNotDeclared(language))?;
        self.active = pos;
        Ok(())
    }

    /// `None` only for a record without examples, which the catalog rejects
    pub fn active_language(&self) -> Option<Language> {
        self.languages.get(self.active).copied()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
}

bitflags::bitflags! {
    /// Interactions currently holding a tooltip open
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct Trigger: u8 {
        /// The pointer is over the anchor
        const HOVER = 0b01;
        /// The anchor has keyboard focus
        const FOCUS = 0b10;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnchorEvent {
    MouseEnter,
    MouseLeave,
    Focus,
    Blur,
}

/// Show/hide state of the supplementary text attached to one anchor
///
/// Hover and focus are equivalent: either one shows the text, and it is
/// hidden once neither holds it open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Tooltip {
    active: Trigger,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: AnchorEvent) {
        match event {
            AnchorEvent::MouseEnter => self.active.insert(Trigger::HOVER),
            AnchorEvent::MouseLeave => self.active.remove(Trigger::HOVER),
            AnchorEvent::Focus => self.active.insert(Trigger::FOCUS),
            AnchorEvent::Blur => self.active.remove(Trigger::FOCUS),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn triggers(&self) -> Trigger {
        self.active
    }
}
