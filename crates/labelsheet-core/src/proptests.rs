use crate::{fit::lines_fit, fit_text, types::GlyphId, FontRef};
use proptest::prelude::*;

/// Proportional-ish stub: narrow lowercase, wide capitals, thin spaces
struct ProportionalFont;

impl FontRef for ProportionalFont {
    fn name(&self) -> &str {
        "Proportional"
    }

    fn data(&self) -> &[u8] {
        &[]
    }

    fn units_per_em(&self) -> u16 {
        2048
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        Some(ch as u32)
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        match char::from_u32(glyph_id) {
            Some(' ') => 569.0,
            Some(ch) if ch.is_uppercase() => 1366.0,
            _ => 1139.0,
        }
    }
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{0,14}", 1..6).prop_map(|words| words.join(" "))
}

// Property: never more than two lines, never outside [min, base]
proptest! {
    #[test]
    fn prop_at_most_two_lines(text in words(), max_width in 5.0f32..200.0) {
        let fitted = fit_text(&text, &ProportionalFont, 9.0, 6.0, max_width);
        prop_assert!(!fitted.lines.is_empty());
        prop_assert!(fitted.lines.len() <= 2);
        prop_assert!(fitted.size <= 9.0);
        prop_assert!(fitted.size >= 6.0 - 1e-4);
    }
}

// Property: lines overflow only once shrinking has hit the floor
proptest! {
    #[test]
    fn prop_fits_or_reaches_minimum(text in words(), max_width in 5.0f32..200.0) {
        let fitted = fit_text(&text, &ProportionalFont, 9.0, 6.0, max_width);
        let fits = lines_fit(&fitted.lines, &ProportionalFont, fitted.size, max_width);
        prop_assert!(fits || (fitted.size - 6.0).abs() < 1e-4);
    }
}

// Property: wrapping never drops or reorders letters. Rebalancing may repeat
// one word on line 1, so the input only has to appear in order.
proptest! {
    #[test]
    fn prop_no_letters_lost(text in words(), max_width in 5.0f32..200.0) {
        let fitted = fit_text(&text, &ProportionalFont, 9.0, 6.0, max_width);
        let letters = |s: &str| s.chars().filter(|ch| ch.is_alphabetic()).collect::<Vec<_>>();
        let joined = letters(&fitted.lines.concat());
        let mut remaining = joined.iter();
        let in_order = letters(&text)
            .iter()
            .all(|ch| remaining.any(|other| other == ch));
        prop_assert!(in_order, "{:?} lost letters of {:?}", fitted.lines, text);
    }
}

// Property: text that fits at the base size comes back untouched
proptest! {
    #[test]
    fn prop_fitting_text_untouched(text in words()) {
        let width = ProportionalFont.text_width(&text, 9.0);
        let fitted = fit_text(&text, &ProportionalFont, 9.0, 6.0, width + 0.01);
        prop_assert_eq!(fitted.lines, vec![text]);
        prop_assert_eq!(fitted.size, 9.0);
    }
}
