//! Casing helpers. Only ASCII letters change case; everything else passes
//! through untouched, so character counts are preserved.

/// Whitespace as ECMAScript `trim` sees it: Unicode `White_Space` minus
/// U+0085 (NEL), plus U+FEFF (BOM).
pub fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strips leading and trailing [`is_trim_whitespace`] characters.
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(is_trim_whitespace)
}

/// First character upper-cased, the rest lower-cased.
///
/// Applies to the whole string, not per word: `"new delhi"` becomes
/// `"New delhi"`.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// The first `len` characters of `s`, upper-cased. Shorter input is used
/// whole, without padding.
pub fn code_prefix(s: &str, len: usize) -> String {
    s.chars().take(len).map(|c| c.to_ascii_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(trim_whitespace("  dadar\t\n"), "dadar");
        assert_eq!(trim_whitespace("\u{FEFF}dadar\u{FEFF}"), "dadar");
        assert_eq!(trim_whitespace("\u{A0}\u{2003}vt\u{3000}"), "vt");
        assert_eq!(trim_whitespace("\u{85}"), "\u{85}");
        assert_eq!(trim_whitespace("\u{85}ko "), "\u{85}ko");
        assert_eq!(trim_whitespace("\u{FEFF} "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("dadar"), "Dadar");
        assert_eq!(title_case("ANDHERI"), "Andheri");
        assert_eq!(title_case("new delhi"), "New delhi");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_is_stable() {
        for input in ["dadar", "CST", "new DELHI", "vIle PaRle", "9th lane"] {
            let once = title_case(input);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn test_code_prefix() {
        assert_eq!(code_prefix("dadar", 3), "DAD");
        assert_eq!(code_prefix("Ko", 3), "KO");
        assert_eq!(code_prefix("vt", 3), "VT");
        assert_eq!(code_prefix("", 3), "");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(code_prefix("ßüx", 3), "ßüX");
        assert_eq!(code_prefix("ठाणे", 3).chars().count(), 3);
        assert_eq!(title_case("éCOLE"), "école");
    }
}
