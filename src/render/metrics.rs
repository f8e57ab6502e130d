/// Advance width of `c` in em units under the form font's width model.
///
/// Printable ASCII is half-width; everything else (kana, kanji, box glyphs) is full-width. The
/// PDF backend declares the same widths for the font, so measured and drawn text agree.
pub fn char_advance_em(c: char) -> f64 {
    if (' '..='~').contains(&c) { 0.5 } else { 1.0 }
}

/// Advance width of `text` in points at `size`.
pub fn text_advance(text: &str, size: f64) -> f64 {
    text.chars().map(char_advance_em).sum::<f64>() * size
}
