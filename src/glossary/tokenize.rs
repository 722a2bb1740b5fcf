//! Phrase tokenization.

/// Splits a phrase into lowercase word tokens.
///
/// Every ASCII punctuation character acts as a separator, so `"Wi-Fi"`
/// yields `["wi", "fi"]` and `"75%"` yields `["75"]`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Code point ranges of digit characters: decimal digits in every script
/// plus superscript, subscript and circled digits. Letter-like numerals
/// such as `Ⅻ` and fractions such as `½` are not digits.
const DIGIT_RANGES: &[(char, char)] = &[
    ('\u{30}', '\u{39}'), ('\u{B2}', '\u{B3}'), ('\u{B9}', '\u{B9}'), ('\u{660}', '\u{669}'),
    ('\u{6F0}', '\u{6F9}'), ('\u{7C0}', '\u{7C9}'), ('\u{966}', '\u{96F}'), ('\u{9E6}', '\u{9EF}'),
    ('\u{A66}', '\u{A6F}'), ('\u{AE6}', '\u{AEF}'), ('\u{B66}', '\u{B6F}'), ('\u{BE6}', '\u{BEF}'),
    ('\u{C66}', '\u{C6F}'), ('\u{CE6}', '\u{CEF}'), ('\u{D66}', '\u{D6F}'), ('\u{DE6}', '\u{DEF}'),
    ('\u{E50}', '\u{E59}'), ('\u{ED0}', '\u{ED9}'), ('\u{F20}', '\u{F29}'), ('\u{1040}', '\u{1049}'),
    ('\u{1090}', '\u{1099}'), ('\u{1369}', '\u{1371}'), ('\u{17E0}', '\u{17E9}'), ('\u{1810}', '\u{1819}'),
    ('\u{1946}', '\u{194F}'), ('\u{19D0}', '\u{19DA}'), ('\u{1A80}', '\u{1A89}'), ('\u{1A90}', '\u{1A99}'),
    ('\u{1B50}', '\u{1B59}'), ('\u{1BB0}', '\u{1BB9}'), ('\u{1C40}', '\u{1C49}'), ('\u{1C50}', '\u{1C59}'),
    ('\u{2070}', '\u{2070}'), ('\u{2074}', '\u{2079}'), ('\u{2080}', '\u{2089}'), ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247C}'), ('\u{2488}', '\u{2490}'), ('\u{24EA}', '\u{24EA}'), ('\u{24F5}', '\u{24FD}'),
    ('\u{24FF}', '\u{24FF}'), ('\u{2776}', '\u{277E}'), ('\u{2780}', '\u{2788}'), ('\u{278A}', '\u{2792}'),
    ('\u{A620}', '\u{A629}'), ('\u{A8D0}', '\u{A8D9}'), ('\u{A900}', '\u{A909}'), ('\u{A9D0}', '\u{A9D9}'),
    ('\u{A9F0}', '\u{A9F9}'), ('\u{AA50}', '\u{AA59}'), ('\u{ABF0}', '\u{ABF9}'), ('\u{FF10}', '\u{FF19}'),
    ('\u{104A0}', '\u{104A9}'), ('\u{10A40}', '\u{10A43}'), ('\u{10D30}', '\u{10D39}'), ('\u{10E60}', '\u{10E68}'),
    ('\u{11052}', '\u{1105A}'), ('\u{11066}', '\u{1106F}'), ('\u{110F0}', '\u{110F9}'), ('\u{11136}', '\u{1113F}'),
    ('\u{111D0}', '\u{111D9}'), ('\u{112F0}', '\u{112F9}'), ('\u{11450}', '\u{11459}'), ('\u{114D0}', '\u{114D9}'),
    ('\u{11650}', '\u{11659}'), ('\u{116C0}', '\u{116C9}'), ('\u{11730}', '\u{11739}'), ('\u{118E0}', '\u{118E9}'),
    ('\u{11950}', '\u{11959}'), ('\u{11C50}', '\u{11C59}'), ('\u{11D50}', '\u{11D59}'), ('\u{11DA0}', '\u{11DA9}'),
    ('\u{16A60}', '\u{16A69}'), ('\u{16AC0}', '\u{16AC9}'), ('\u{16B50}', '\u{16B59}'), ('\u{1D7CE}', '\u{1D7FF}'),
    ('\u{1E140}', '\u{1E149}'), ('\u{1E2F0}', '\u{1E2F9}'), ('\u{1E950}', '\u{1E959}'), ('\u{1F100}', '\u{1F10A}'),
    ('\u{1FBF0}', '\u{1FBF9}'),
];

/// Returns `true` if `c` is a digit character in any script.
#[must_use]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    DIGIT_RANGES
        .binary_search_by(|&(start, end)| {
            if end < c {
                std::cmp::Ordering::Less
            } else if start > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns `true` if `token` is a non-empty run of digit characters.
#[must_use]
pub fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(tokenize("Wi-Fi"), vec!["wi", "fi"]);
        assert_eq!(tokenize("U.S. president"), vec!["u", "s", "president"]);
    }

    #[test]
    fn lowercases_and_splits_on_whitespace() {
        assert_eq!(
            tokenize("  Solar   Flares\t"),
            vec!["solar".to_string(), "flares".to_string()]
        );
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?!%").is_empty());
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(tokenize("World War Ⅰ"), vec!["world", "war", "ⅰ"]);
        assert_eq!(tokenize("Café—Crème"), vec!["café—crème"]);
    }

    #[test]
    fn digits() {
        assert!(is_digits("1969"));
        assert!(!is_digits(""));
        assert!(!is_digits("19a"));
        assert!(!is_digits("12.5"));
    }

    #[test]
    fn digits_in_other_scripts() {
        assert!(is_digits("２０２０"));
        assert!(is_digits("١٩٦٩"));
        assert!(is_digits("²"));
        assert!(is_digits("①"));
        assert!(!is_digits("Ⅱ"));
        assert!(!is_digits("½"));
        assert!(!is_digits("二"));
    }

    #[test]
    fn digit_ranges_are_sorted_and_disjoint() {
        for pair in DIGIT_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
