//! Text normalization for keyword comparison.
//!
//! Every keyword and every user message goes through [`normalize`] before
//! they are compared, so matching is insensitive to case, accents and
//! punctuation without any per-keyword logic.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize text for substring comparison.
///
/// Lower-cases, decomposes (NFD) and drops combining marks, removes anything
/// that is not an ASCII word character (`[a-z0-9_]`) or a space character
/// (see [`is_space`]), then trims. Inner whitespace is preserved as-is.
///
/// ```
/// use themis_core::normalize;
///
/// assert_eq!(normalize("¿Cómo hago la matrícula?"), "como hago la matricula");
/// assert_eq!(normalize("Hola, buenos dias!"), "hola buenos dias");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| is_word_char(*c) || is_space(*c))
        .collect();

    folded.trim_matches(is_space).to_string()
}

/// ASCII word character: `[A-Za-z0-9_]`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Space characters kept (inside) and trimmed (at the ends) by [`normalize`].
///
/// Same set as the JavaScript `\s` class. It differs from
/// [`char::is_whitespace`] in two code points: U+FEFF counts as space here
/// and U+0085 does not.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize("Cómo"), normalize("como"));
        assert_eq!(normalize("MATRÍCULA"), "matricula");
        assert_eq!(normalize("Añadir"), "anadir");
    }

    #[test]
    fn test_strips_punctuation_and_symbols() {
        assert_eq!(normalize("¡Hola!"), "hola");
        assert_eq!(normalize("hola 👋 qué tal?"), "hola  que tal");
        assert_eq!(normalize("snake_case-word"), "snake_caseword");
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize("   gracias \n"), "gracias");
        assert_eq!(normalize("\t¿?\t"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_space_set() {
        assert_eq!(normalize("\u{FEFF}hola\u{FEFF}"), "hola");
        assert_eq!(normalize("hola\u{FEFF}mundo"), "hola\u{FEFF}mundo");
        assert_eq!(normalize("hola\u{0085}mundo"), "holamundo");
        assert_eq!(normalize("\u{3000}becas\u{00A0}"), "becas");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Hola, buenos días!",
            "¿CÓMO hago la matrícula?",
            "  ñandú   Über  ",
            "İstanbul ǅ ﬁ ß",
            "123 -- test_case ...",
            "emoji 🎉🎉 only",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
