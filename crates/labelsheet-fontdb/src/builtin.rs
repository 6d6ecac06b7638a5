//! Helvetica from the PDF standard 14, measured without a font file
//!
//! When no TrueType font can be found the sheet falls back to Helvetica,
//! which PDF viewers must supply themselves. Text is written in WinAnsi
//! encoding, so the glyph id of a character is its WinAnsi byte and the
//! advance widths come from Adobe's published Helvetica metrics (1000 units
//! per em). Characters WinAnsi cannot express are measured and drawn as `?`.

use labelsheet_core::{traits::FontRef, types::GlyphId};

/// What unmappable characters are drawn as
pub const REPLACEMENT: u8 = b'?';

/// Name of the built-in font in the output document
pub const HELVETICA: &str = "Helvetica";

/// Helvetica advance widths for WinAnsi codes 0x20..=0xFF
///
/// `WIDTHS[i]` is the width of code `i + 32`. Zero marks codes WinAnsi leaves
/// undefined.
#[rustfmt::skip]
static WIDTHS: [u16; 224] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
      278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0     1    2    3    4    5    6    7    8    9    :    ;    <    =    >    ?
      556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // @     A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
     1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // P     Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
      667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // `     a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
      333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // p     q    r    s    t    u    v    w    x    y    z    {    |    }    ~   DEL
      556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,   0,
    // €     -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
      556,   0, 222, 556, 333,1000, 556, 556, 333,1000, 667, 333,1000,   0, 611,   0,
    // -     ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
        0, 222, 222, 333, 333, 350, 556,1000, 333,1000, 500, 333, 944,   0, 500, 667,
    // nbsp  ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬   shy   ®    ¯
      278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // °     ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
      400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // À     Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
      667, 667, 667, 667, 667, 667,1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // Ð     Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
      722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // à     á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
      556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // ð     ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
      556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Maps a character to its WinAnsi byte, if it has one
pub fn winansi_code(ch: char) -> Option<u8> {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
        return u8::try_from(code).ok();
    }
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Encodes text as WinAnsi bytes, replacing what cannot be encoded
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_code(ch).unwrap_or(REPLACEMENT))
        .collect()
}

/// Helvetica, measured from the static width table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    pub fn helvetica() -> Self {
        Self
    }
}

impl FontRef for BuiltinFont {
    fn name(&self) -> &str {
        HELVETICA
    }

    fn data(&self) -> &[u8] {
        &[]
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        winansi_code(ch).map(GlyphId::from)
    }

    fn advance_width(&self, glyph_id: GlyphId) -> f32 {
        let width = usize::try_from(glyph_id)
            .ok()
            .and_then(|code| code.checked_sub(32))
            .and_then(|index| WIDTHS.get(index).copied())
            .filter(|&width| width > 0)
            .unwrap_or(WIDTHS[usize::from(REPLACEMENT - 32)]);
        f32::from(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        let font = BuiltinFont::helvetica();
        assert_eq!(font.advance_width(u32::from(b' ')), 278.0);
        assert_eq!(font.advance_width(u32::from(b'A')), 667.0);
        assert_eq!(font.advance_width(u32::from(b'i')), 222.0);
        assert_eq!(font.advance_width(u32::from(b'~')), 584.0);
    }

    #[test]
    fn test_text_width_at_size() {
        // H=722 e=556 l=222 l=222 o=556 -> 2278 units
        let width = BuiltinFont.text_width("Hello", 10.0);
        assert!((width - 22.78).abs() < 1e-3);
    }

    #[test]
    fn test_latin1_accents() {
        assert_eq!(winansi_code('é'), Some(0xE9));
        assert_eq!(winansi_code('Ñ'), Some(0xD1));
        assert_eq!(BuiltinFont.advance_width(0xE9), 556.0);
        assert_eq!(BuiltinFont.text_width("José", 10.0), BuiltinFont.text_width("Jose", 10.0));
        assert_eq!(BuiltinFont.advance_width(0xED), 278.0);
    }

    #[test]
    fn test_windows_specials() {
        assert_eq!(winansi_code('€'), Some(0x80));
        assert_eq!(winansi_code('—'), Some(0x97));
        assert_eq!(BuiltinFont.advance_width(0x97), 1000.0);
    }

    #[test]
    fn test_unmappable_measured_as_question_mark() {
        assert_eq!(winansi_code('ł'), None);
        assert_eq!(
            BuiltinFont.text_width("ł", 10.0),
            BuiltinFont.text_width("?", 10.0)
        );
        assert_eq!(encode_winansi("Łódź"), vec![b'?', 0xF3, b'd', b'?']);
    }

    #[test]
    fn test_undefined_code_measured_as_question_mark() {
        assert_eq!(BuiltinFont.advance_width(0x81), 556.0);
        assert_eq!(BuiltinFont.advance_width(0), 556.0);
    }
}
