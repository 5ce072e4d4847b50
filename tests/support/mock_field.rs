use chem_input::traits::TextField;

/// Host-owned text input for tests. The engine only ever borrows it.
#[derive(Default, Debug, Clone)]
pub struct MockField {
    value: String,
}

impl MockField {
    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
        }
    }
}

impl TextField for MockField {
    fn value(&self) -> &str {
        &self.value
    }

    fn push_char(&mut self, ch: char) {
        self.value.push(ch);
    }
}
