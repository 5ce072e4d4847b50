pub mod datetime;
pub mod engine;
pub mod key;
pub mod subscript;
pub mod theme;
pub mod traits;

pub use crate::datetime::{localize_date, localize_datetime};
pub use crate::engine::{Engine, EngineBuilder, Outcome};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::subscript::{
    SUBSCRIPT_DIGITS, base_digit, flatten_formula, subscript_digit, subscript_formula,
};
pub use crate::theme::{FontFamily, Screens, ThemeConfig, hex_rgb};
pub use crate::traits::TextField;
