use proptest::prelude::*;
use themis_core::normalize;
use themis_core::normalize::{is_space, is_word_char};

/// Latin-1 letters whose upper and lower case map onto each other.
const LATIN: &str = "[a-zA-Z0-9À-ÖØ-Þà-öø-ÿ _¿?¡!,.]{0,60}";

fn accent(c: char) -> char {
    match c {
        'a' => 'á',
        'e' => 'é',
        'i' => 'í',
        'o' => 'ó',
        'u' => 'ü',
        'n' => 'ñ',
        other => other,
    }
}

proptest! {
    #[test]
    fn idempotent_on_any_text(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn idempotent_on_printable_text(s in "\\PC{0,80}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn case_insensitive_on_latin_text(s in LATIN) {
        prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s));
        prop_assert_eq!(normalize(&s.to_lowercase()), normalize(&s));
    }

    #[test]
    fn accent_insensitive(s in "[a-z ]{0,60}") {
        let accented: String = s.chars().map(accent).collect();
        prop_assert_eq!(normalize(&accented), normalize(&s));
    }

    #[test]
    fn output_is_lowercase_word_chars_and_inner_space(s in any::<String>()) {
        let out = normalize(&s);
        for c in out.chars() {
            prop_assert!(
                (is_word_char(c) && !c.is_ascii_uppercase()) || is_space(c),
                "unexpected {:?} in {:?}",
                c,
                out
            );
        }
        prop_assert!(!out.starts_with(is_space));
        prop_assert!(!out.ends_with(is_space));
    }
}
