//! Locale-aware string ordering for list views.
//!
//! Strings are compared in three passes, the way a root-locale collator does: base letters
//! first (case and accents folded away), then accents, then case with lowercase sorting
//! ahead of uppercase. Only strings identical at every level compare equal.
//!
//! At the base level whitespace and punctuation sort before digits, and digits before letters.
//! Accent folding covers Latin-1 and Latin Extended-A; letters of other scripts keep their
//! code point order, which places them after Latin.

use std::cmp::Ordering;

pub fn compare(left: &str, right: &str) -> Ordering {
    primary_key(left)
        .cmp(&primary_key(right))
        .then_with(|| accent_weights(left).cmp(&accent_weights(right)))
        .then_with(|| case_weights(left).cmp(&case_weights(right)))
        .then_with(|| left.cmp(right))
}

fn primary_key(value: &str) -> Vec<(u8, char)> {
    let mut key = Vec::with_capacity(value.len());
    for c in value.chars().flat_map(char::to_lowercase) {
        match c {
            'ß' => key.extend([weighted('s'), weighted('s')]),
            'æ' => key.extend([weighted('a'), weighted('e')]),
            'œ' => key.extend([weighted('o'), weighted('e')]),
            other => key.push(weighted(fold_accent(other))),
        }
    }
    key
}

fn weighted(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c)
}

fn accent_weights(value: &str) -> Vec<u32> {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if fold_accent(c) == c { 0 } else { c as u32 })
        .collect()
}

fn case_weights(value: &str) -> Vec<u8> {
    value.chars().map(|c| u8::from(c.is_uppercase())).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
