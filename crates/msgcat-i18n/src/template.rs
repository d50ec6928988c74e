//! Text transformations applied to a raw message: line-ending
//! normalization, color codes, line splitting and tag substitution.

use std::borrow::Cow;

/// Two-character sequence that separates lines inside a raw message.
pub const LINE_BREAK_MARKER: &str = "\\n";

/// Color prefix understood by chat clients.
pub const COLOR_CHAR: char = '\u{a7}';

/// Prefix used in message files in place of [`COLOR_CHAR`].
pub const ALT_COLOR_CHAR: char = '&';

const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replaces physical line endings (`\r\n`, `\r`, `\n`) with the line break
/// marker so both spellings split the same way.
#[must_use]
pub fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\r', '\n']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(
        raw.replace("\r\n", LINE_BREAK_MARKER)
            .replace(['\r', '\n'], LINE_BREAK_MARKER),
    )
}

/// Splits on the line break marker. Empty lines are kept and an empty
/// message yields a single empty line.
#[must_use]
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split(LINE_BREAK_MARKER).collect()
}

/// Inverse of [`split_lines`].
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LINE_BREAK_MARKER)
}

/// Turns `&c` style codes into `§c`. Unknown codes are left untouched.
#[must_use]
pub fn translate_color_codes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match chars.peek() {
            Some(&code) if ch == ALT_COLOR_CHAR && COLOR_CODES.contains(code) => {
                out.push(COLOR_CHAR);
                out.push(code.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Replaces each occurrence of `tags[i]` with `replacements[i]` in a single
/// left-to-right pass. Tags without a replacement stay literal, surplus
/// replacements are ignored, and replaced text is never rescanned.
pub fn substitute<S: AsRef<str>>(line: &str, tags: &[&str], replacements: &[S]) -> String {
    if tags.is_empty() || replacements.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(ch) = rest.chars().next() {
        if let Some((index, tag)) = match_tag(rest, tags) {
            match replacements.get(index) {
                Some(value) => out.push_str(value.as_ref()),
                None => out.push_str(tag),
            }
            rest = &rest[tag.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Longest tag that `text` starts with.
fn match_tag<'t>(text: &str, tags: &[&'t str]) -> Option<(usize, &'t str)> {
    tags.iter()
        .copied()
        .enumerate()
        .filter(|(_, tag)| !tag.is_empty() && text.starts_with(tag))
        .max_by_key(|(_, tag)| tag.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_on_marker() {
        assert_eq!(
            split_lines("We've got\\nnew lines\\nand ' apostrophes"),
            vec!["We've got", "new lines", "and ' apostrophes"]
        );
    }

    #[test]
    fn test_split_keeps_empty_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\\n\\nb\\n"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\nc\rd"), "a\\nb\\nc\\nd");
        assert!(matches!(normalize_line_endings("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_translate_color_codes() {
        assert_eq!(
            translate_color_codes("&cHere we have&bdefined some colors &dand some other &lthings"),
            "\u{a7}cHere we have\u{a7}bdefined some colors \u{a7}dand some other \u{a7}lthings"
        );
        assert_eq!(translate_color_codes("&Ared"), "\u{a7}ared");
        assert_eq!(translate_color_codes("Tom & Jerry &z &"), "Tom & Jerry &z &");
    }

    #[test]
    fn test_substitute_all_tags() {
        let line = substitute("The player %name has %count accounts:", &["%name", "%count"], &["Bobby", "3"]);
        assert_eq!(line, "The player Bobby has 3 accounts:");
    }

    #[test]
    fn test_substitute_repeated_tag() {
        assert_eq!(substitute("%x and %x", &["%x"], &["y"]), "y and y");
    }

    #[test]
    fn test_substitute_partial_fill_leaves_tags() {
        let line = substitute("%a-%b-%c", &["%a", "%b", "%c"], &["1"]);
        assert_eq!(line, "1-%b-%c");
    }

    #[test]
    fn test_substitute_ignores_surplus() {
        assert_eq!(substitute("code %c", &["%c"], &["1", "2", "3"]), "code 1");
    }

    #[test]
    fn test_substitute_prefers_longest_tag() {
        let line = substitute("%count/%c", &["%c", "%count"], &["C", "COUNT"]);
        assert_eq!(line, "COUNT/C");
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        assert_eq!(substitute("%a %b", &["%a", "%b"], &["%b", "x"]), "%b x");
    }

    #[test]
    fn test_substitute_handles_multibyte_text() {
        assert_eq!(substitute("\u{a7}c%n \u{e9}t\u{e9}", &["%n"], &["Zo\u{eb}"]), "\u{a7}cZo\u{eb} \u{e9}t\u{e9}");
    }

    proptest! {
        #[test]
        fn test_split_join_round_trip(raw in "[a-z '\\\\n%]{0,40}") {
            let lines = split_lines(&raw);
            prop_assert!(!lines.is_empty());
            prop_assert_eq!(join_lines(&lines), raw);
        }

        #[test]
        fn test_full_substitution_leaves_no_tag(
            prefix in "[a-z ]{0,10}",
            middle in "[a-z ]{0,10}",
            value in "[a-z0-9]{1,8}",
        ) {
            let line = format!("{prefix}%code{middle}%code");
            let rendered = substitute(&line, &["%code"], &[value.as_str()]);
            prop_assert!(!rendered.contains("%code"));
            prop_assert_eq!(rendered, format!("{prefix}{value}{middle}{value}"));
        }
    }
}
