//! Russian-locale string ordering for product names and group titles.
//!
//! A small multi-level collation in the spirit of the CLDR `ru` tailoring:
//!
//! 1. primary: separators and punctuation < digits < Latin < Cyrillic < other,
//!    letters compared case-insensitively, `ё` weighed as `е`;
//! 2. secondary: `е` before `ё`;
//! 3. tertiary: lowercase before uppercase;
//! 4. code points, so only identical strings compare equal.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Separator,
    Digit,
    Latin,
    Cyrillic,
    Other,
}

#[derive(Debug, Clone, Copy)]
struct Weights {
    primary: (Class, u32),
    secondary: u8,
    tertiary: u8,
}

fn lower(c: char) -> char {
    // Single-char lowercase mappings cover every letter we care about.
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn weights(c: char) -> Weights {
    let tertiary = u8::from(c.is_uppercase());
    let l = lower(c);

    let (primary, secondary) = if l == 'ё' {
        ((Class::Cyrillic, 'е' as u32), 1)
    } else if c.is_ascii_digit() {
        ((Class::Digit, l as u32), 0)
    } else if l.is_ascii_lowercase() {
        ((Class::Latin, l as u32), 0)
    } else if ('\u{0400}'..='\u{04FF}').contains(&l) && l.is_alphabetic() {
        ((Class::Cyrillic, l as u32), 0)
    } else if l.is_alphanumeric() {
        ((Class::Other, l as u32), 0)
    } else {
        ((Class::Separator, l as u32), 0)
    };

    Weights {
        primary,
        secondary,
        tertiary,
    }
}

fn compare_level<K: Ord>(a: &str, b: &str, key: impl Fn(Weights) -> K) -> Ordering {
    let ka = a.chars().map(|c| key(weights(c)));
    let kb = b.chars().map(|c| key(weights(c)));
    ka.cmp(kb)
}

/// Compare two strings the way a Russian-locale UI sorts them.
pub fn compare_ru(a: &str, b: &str) -> Ordering {
    compare_level(a, b, |w| w.primary)
        .then_with(|| compare_level(a, b, |w| w.secondary))
        .then_with(|| compare_level(a, b, |w| w.tertiary))
        .then_with(|| a.cmp(b))
}
