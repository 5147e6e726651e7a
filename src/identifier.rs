//! Machine-friendly identifiers built from free-form property names.
//!
//! Status names such as `FooBarNotFound` are produced by compacting the
//! property into title-case letters and appending the kind suffix.

/// Strip every non-letter character and title-case each run of letters.
///
/// A letter is a character that is alphabetic and not numeric, so letter
/// numerals such as `Ⅻ` are dropped like digits. Combining vowel signs that
/// Unicode classifies as alphabetic are kept.
///
/// The first letter of the input and the first letter following any removed
/// character are title-cased one character at a time; all other letters are
/// kept as-is. A letter whose capital form needs several characters (`ß`)
/// is left unchanged.
///
/// ```rust
/// use ddd_errors::sanitize_to_identifier;
///
/// assert_eq!(sanitize_to_identifier("foo_bar-baz"), "FooBarBaz");
/// assert_eq!(sanitize_to_identifier("-e"), "E");
/// assert_eq!(sanitize_to_identifier("-"), "");
/// ```
pub fn sanitize_to_identifier(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize = true;
    for ch in input.chars() {
        if !is_letter(ch) {
            capitalize = true;
            continue;
        }
        if capitalize {
            out.push(to_title(ch));
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[inline]
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

/// Single-character title case of `ch`.
fn to_title(ch: char) -> char {
    match ch {
        // Latin digraphs: the title form differs from the upper form.
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        // Greek with ypogegrammeni: title form keeps the subscript iota.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(ch as u32 + 8).unwrap_or(ch)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        }
    }
}

/// Build a status name from a property and a kind suffix.
///
/// An empty property yields the bare suffix.
pub(crate) fn status_name(property: &str, suffix: &str) -> String {
    if property.is_empty() {
        return suffix.to_owned();
    }
    let mut name = sanitize_to_identifier(property);
    name.push_str(suffix);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_edge_cases() {
        assert_eq!(sanitize_to_identifier(""), "");
        assert_eq!(sanitize_to_identifier("-"), "");
        assert_eq!(sanitize_to_identifier("-e"), "E");
        assert_eq!(sanitize_to_identifier("foo-bar-baz"), "FooBarBaz");
        assert_eq!(sanitize_to_identifier("foo#bar#baz"), "FooBarBaz");
        assert_eq!(sanitize_to_identifier("foo_bar-baz"), "FooBarBaz");
    }

    #[test]
    fn digits_are_separators() {
        assert_eq!(sanitize_to_identifier("user2profile"), "UserProfile");
    }

    #[test]
    fn inner_case_is_preserved() {
        assert_eq!(sanitize_to_identifier("userId"), "UserId");
        assert_eq!(sanitize_to_identifier("__API_key"), "APIKey");
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(sanitize_to_identifier("über-straße"), "ÜberStraße");
    }

    #[test]
    fn capitalization_is_one_to_one() {
        assert_eq!(sanitize_to_identifier("ßx"), "ßx");
        assert_eq!(sanitize_to_identifier("ǆemal"), "ǅemal");
        assert_eq!(sanitize_to_identifier("ǅemal"), "ǅemal");
        assert_eq!(sanitize_to_identifier("ljubav-njiva"), "LjubavNjiva");
        assert_eq!(sanitize_to_identifier("ᾳx"), "ᾼx");
    }

    #[test]
    fn letter_numerals_are_separators() {
        assert_eq!(sanitize_to_identifier("fooⅫbar"), "FooBar");
        assert_eq!(sanitize_to_identifier("Ⅻ"), "");
        assert_eq!(sanitize_to_identifier("x²y"), "XY");
    }

    #[test]
    fn status_name_with_and_without_property() {
        assert_eq!(status_name("", "NotFound"), "NotFound");
        assert_eq!(status_name("foo", "NotFound"), "FooNotFound");
        assert_eq!(status_name("--", "IsRequired"), "IsRequired");
    }
}
