use unicode_segmentation::UnicodeSegmentation;

/// A mutable handle to a host-owned text input.
///
/// The engine borrows the field for the duration of a single event and
/// writes through this trait. The host keeps ownership, focus handling,
/// and rendering to itself; nothing in this crate queries the UI.
pub trait TextField {
    /// Current contents of the field.
    fn value(&self) -> &str;

    /// Append a single glyph to the end of the field.
    fn push_char(&mut self, ch: char);

    /// Number of grapheme clusters in the current value, for hosts that
    /// track cursor width after appends.
    fn grapheme_len(&self) -> usize {
        self.value().graphemes(true).count()
    }
}

impl TextField for String {
    fn value(&self) -> &str {
        self
    }

    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }
}
