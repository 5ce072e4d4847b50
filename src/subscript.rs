/// Unicode subscript digits U+2080..U+2089, indexed by their base digit.
///
/// Initialized once for the whole process and never mutated; the mapping
/// is bijective between `'0'..='9'` and these glyphs.
pub const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Look up the subscript glyph for an ASCII digit.
///
/// Returns `None` for anything outside `'0'..='9'`, including digits from
/// other scripts and characters that merely look digit-like.
pub fn subscript_digit(ch: char) -> Option<char> {
    if !ch.is_ascii_digit() {
        return None;
    }
    SUBSCRIPT_DIGITS.get(ch as usize - '0' as usize).copied()
}

/// Inverse lookup: the ASCII digit for a subscript glyph (`'₂'` → `'2'`).
pub fn base_digit(ch: char) -> Option<char> {
    SUBSCRIPT_DIGITS
        .iter()
        .position(|&glyph| glyph == ch)
        .and_then(|i| char::from_digit(i as u32, 10))
}

/// Convert every ASCII digit in a formula to its subscript glyph.
///
/// Non-digit characters pass through unchanged: `"H2SO4"` → `"H₂SO₄"`.
pub fn subscript_formula(formula: &str) -> String {
    formula
        .chars()
        .map(|c| subscript_digit(c).unwrap_or(c))
        .collect()
}

/// Replace subscript glyphs with their base digits: `"H₂SO₄"` → `"H2SO4"`.
///
/// Useful for normalizing display formulas back to the plain-digit form
/// inventory backends store and search against.
pub fn flatten_formula(formula: &str) -> String {
    formula.chars().map(|c| base_digit(c).unwrap_or(c)).collect()
}
