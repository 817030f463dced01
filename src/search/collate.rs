//! Swedish alphabetical ordering
//!
//! Builds primary-strength collation keys following Swedish rules: case and
//! accents are ignored, but `å`, `ä` and `ö` are letters of their own that sort
//! after `z`, in that order. A few foreign letters follow Swedish dictionary
//! practice (`ü` as `y`, `æ` as `ä`, `ø` as `ö`). Latin letters without a
//! decomposition fold to their base (`ł` as `l`, `ß` as `ss`).
//!
//! ```
//! use svenskdb::search::collate::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("Zoégas", "Åhléns"), Ordering::Less);
//! assert_eq!(compare("Åhléns", "Öresund"), Ordering::Less);
//! assert_eq!(compare("café", "CAFE"), Ordering::Equal);
//! ```

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const CLASS_SHIFT: u32 = 24;
const CLASS_SPACE: u32 = 0;
const CLASS_PUNCT: u32 = 1;
const CLASS_DIGIT: u32 = 2;
const CLASS_LETTER: u32 = 3;

const AFTER_Z: u32 = 'z' as u32;

/// Primary collation key for a string
///
/// Keys compare lexicographically; equal keys mean the strings are equal at
/// base strength.
#[must_use]
pub fn sort_key(text: &str) -> Vec<u32> {
    let mut key = Vec::with_capacity(text.len());
    for c in text.nfc().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }
        match expansion(c) {
            Some(letters) => key.extend(letters.chars().map(weight)),
            None => key.push(weight(c)),
        }
    }
    key
}

/// Compare two strings in Swedish order at base strength
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

fn weight(c: char) -> u32 {
    let (class, value) = match c {
        'å' => (CLASS_LETTER, AFTER_Z + 1),
        'ä' | 'æ' => (CLASS_LETTER, AFTER_Z + 2),
        'ö' | 'ø' | 'œ' => (CLASS_LETTER, AFTER_Z + 3),
        'ü' => (CLASS_LETTER, 'y' as u32),
        c if c.is_whitespace() => (CLASS_SPACE, 0),
        c if c.is_numeric() => (CLASS_DIGIT, c.to_digit(10).unwrap_or(c as u32)),
        c if c.is_alphabetic() => (CLASS_LETTER, base_letter(c) as u32),
        c => (CLASS_PUNCT, c as u32),
    };
    (class << CLASS_SHIFT) | value
}

/// Latin letters that NFD leaves alone
const fn expansion(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'þ' => Some("th"),
        'ł' => Some("l"),
        'đ' | 'ð' => Some("d"),
        'ħ' => Some("h"),
        'ı' => Some("i"),
        'ŋ' => Some("n"),
        _ => None,
    }
}

/// Strip diacritics from a lowercase letter
fn base_letter(c: char) -> char {
    std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .unwrap_or(c)
}
