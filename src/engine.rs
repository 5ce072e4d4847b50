use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::subscript::subscript_digit;
use crate::traits::TextField;

/// What the engine did with an event.
///
/// Hosts should treat `Handled` as consuming the keystroke: the appended
/// glyph already represents it, and letting default insertion run as well
/// would type the literal digit next to the subscript.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A subscript glyph was appended to the field.
    Handled,
    /// The event did not match; the field is untouched.
    Ignored,
}

impl Outcome {
    /// True when the event appended a glyph.
    pub fn is_handled(self) -> bool {
        matches!(self, Outcome::Handled)
    }
}

/// Per-event decision function for subscript entry.
///
/// The engine holds configuration only; it has no mutable state, so a
/// single instance can serve any number of fields and events.
#[derive(Debug, Clone)]
pub struct Engine {
    trigger: Modifiers,
}

pub struct EngineBuilder {
    trigger: Modifiers,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            trigger: Modifiers::CTRL,
        }
    }
}

impl EngineBuilder {
    /// Set the modifier that arms subscript entry. Defaults to Ctrl.
    pub fn trigger(mut self, trigger: Modifiers) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            trigger: self.trigger,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::default().build()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The modifier set that arms subscript entry.
    pub fn trigger(&self) -> Modifiers {
        self.trigger
    }

    /// Decide one keystroke.
    ///
    /// Appends the mapped subscript glyph to `field` when the trigger
    /// modifier is held and the key is an ASCII digit; otherwise leaves
    /// the field untouched. Extra modifiers held alongside the trigger do
    /// not disqualify the event.
    ///
    /// Every call is a complete unit of work: repeating a digit event
    /// appends again.
    pub fn handle_event<T: TextField>(&self, field: &mut T, event: KeyEvent) -> Outcome {
        if !event.mods.contains(self.trigger) {
            return Outcome::Ignored;
        }
        if let KeyCode::Char(c) = event.code
            && c.is_ascii_digit()
            && let Some(glyph) = subscript_digit(c)
        {
            field.push_char(glyph);
            return Outcome::Handled;
        }
        // Named keys, non-digit characters, and a map miss all fall
        // through without touching the field.
        Outcome::Ignored
    }
}
