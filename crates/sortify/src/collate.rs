//! Primary-strength collation keys.
//!
//! Text is folded (case, accents, `ß`), then split into elements. Each
//! element has a group and a weight. Groups order as whitespace,
//! punctuation and symbols, digit runs, then letters. Digit runs weigh by
//! numeric value with leading zeros dropped, so `b01` and `b1` collate
//! equal and `b2` sorts before `b10`.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// ASCII punctuation and symbols in root collation order.
const ASCII_MARKS: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Mark,
    Digits,
    Letter,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Element {
    group: Group,
    /// Code point order for characters, run length for digits.
    weight: u32,
    digits: String,
}

impl Element {
    fn of(c: char) -> Self {
        let (group, weight) = if c.is_whitespace() {
            (Group::Space, u32::from(c))
        } else if c.is_alphanumeric() {
            (Group::Letter, u32::from(c))
        } else {
            match ASCII_MARKS.find(c) {
                Some(ix) => (Group::Mark, ix as u32),
                None => (Group::Mark, 0x80 + u32::from(c)),
            }
        };
        Self {
            group,
            weight,
            digits: String::new(),
        }
    }

    fn digits(run: &str) -> Self {
        let digits = run.trim_start_matches('0');
        Self {
            group: Group::Digits,
            weight: digits.len() as u32,
            digits: digits.to_string(),
        }
    }
}

/// Sort key for one text value. Keys compare element by element and a
/// prefix sorts first.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey(Vec<Element>);

impl CollationKey {
    pub fn new(value: &str) -> Self {
        let folded = fold_text(value);
        let mut elements = Vec::new();
        let mut chars = folded.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            if !c.is_ascii_digit() {
                elements.push(Element::of(c));
                continue;
            }
            while chars.next_if(|(_, d)| d.is_ascii_digit()).is_some() {}
            let end = chars.peek().map_or(folded.len(), |(ix, _)| *ix);
            elements.push(Element::digits(&folded[start..end]));
        }
        Self(elements)
    }
}

/// Base-sensitivity folding: "É", "e" and "E" fold alike, as do "ß" and
/// "ss".
pub fn fold_text(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .fold(String::with_capacity(value.len()), |mut folded, c| {
            match c {
                'ß' => folded.push_str("ss"),
                c => folded.push(c),
            }
            folded
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn cmp(a: &str, b: &str) -> Ordering {
        CollationKey::new(a).cmp(&CollationKey::new(b))
    }

    #[test]
    fn test_fold_text() {
        assert_eq!(fold_text("Éclair"), "eclair");
        assert_eq!(fold_text("README.MD"), "readme.md");
        assert_eq!(fold_text("Straße"), "strasse");
        assert_eq!(fold_text("GROẞ"), "gross");
    }

    #[test]
    fn test_punctuation_before_digits_and_letters() {
        assert_eq!(cmp("a~", "ab"), Ordering::Less);
        assert_eq!(cmp("file{1}", "file1"), Ordering::Less);
        assert_eq!(cmp("@home", "1home"), Ordering::Less);
        assert_eq!(cmp("notes;old", "notesa"), Ordering::Less);
        assert_eq!(cmp("_build", "-build"), Ordering::Less);
        assert_eq!(cmp("a b", "a-b"), Ordering::Less);
    }

    #[test]
    fn test_digit_runs_ignore_leading_zeros() {
        assert_eq!(cmp("b01", "b1"), Ordering::Equal);
        assert_eq!(cmp("track007", "track7"), Ordering::Equal);
        assert_eq!(cmp("b02", "b10"), Ordering::Less);
        assert_eq!(cmp("v1.9", "v1.10"), Ordering::Less);
        assert_eq!(cmp("2024x", "a"), Ordering::Less);
        assert_eq!(
            cmp("img99999999999999999999", "img100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_base_strength_equalities() {
        assert_eq!(cmp("ß", "ss"), Ordering::Equal);
        assert_eq!(cmp("Café", "cafe"), Ordering::Equal);
        assert_eq!(cmp("apple", "apples"), Ordering::Less);
    }
}
