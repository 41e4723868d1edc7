//! Sentence and word segmentation used by the metrics engine.
//!
//! Both splitters walk the Unicode word boundaries (UAX #29) of the text.
//! Sentences end at `.`, `!` or `?` followed by whitespace, or at a blank
//! line; a period after a known abbreviation or an initial does not end a
//! sentence, and neither does one followed by a lowercase word. A single line
//! break is plain whitespace.
//!
//! Word tokens get Treebank-style adjustments on top of the raw boundaries:
//! hyphenated compounds written without spaces stay one token, abbreviations
//! keep their period (`Mr.`, `U.S.`), English clitics (`n't`, `'s`, `'re`, ...)
//! are split from their stem and fused forms are split (`cannot` -> `can`
//! `not`, `gonna` -> `gon` `na`).

use unicode_segmentation::UnicodeSegmentation;

const CLITICS: [&str; 6] = ["s", "m", "d", "re", "ve", "ll"];

/// Fused forms and the byte offset they split at.
const FUSED: [(&str, usize); 6] = [
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Lowercase forms, without the trailing period.
const ABBREVIATIONS: [&str; 51] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft",
    "gen", "gov", "sen", "rep", "rev", "hon", "pres", "capt", "col", "lt",
    "sgt", "cmdr", "adm", "maj", "cpl", "vs", "etc", "inc", "ltd", "co",
    "corp", "bros", "dept", "univ", "est", "approx", "fig", "jan", "feb", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "ave", "blvd",
    "assn",
];

const TERMINALS: [&str; 3] = [".", "!", "?"];

const CLOSERS: [&str; 7] = ["\"", "'", "\u{201D}", "\u{2019}", ")", "]", "}"];

/// Splits text into sentences, dropping segments that are blank once trimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut bounds = Vec::new();
    let mut i = 0;

    while i < segments.len() {
        let (offset, segment) = segments[i];

        if is_whitespace(segment) {
            let mut j = i;
            let mut newlines = 0;
            while j < segments.len() && is_whitespace(segments[j].1) {
                newlines += segments[j].1.matches('\n').count();
                j += 1;
            }
            if newlines >= 2 {
                bounds.push(offset);
            }
            i = j;
            continue;
        }

        if !TERMINALS.contains(&segment) {
            i += 1;
            continue;
        }

        let mut j = i;
        while j < segments.len() && TERMINALS.contains(&segments[j].1) {
            j += 1;
        }
        let periods_only = segments[i..j].iter().all(|(_, s)| *s == ".");
        while j < segments.len() && CLOSERS.contains(&segments[j].1) {
            j += 1;
        }
        let (last_offset, last) = segments[j - 1];
        let end = last_offset + last.len();

        let followed_by_space = segments.get(j).map_or(true, |(_, s)| is_whitespace(s));
        let boundary = followed_by_space
            && (!periods_only || {
                let previous = i.checked_sub(1).map(|k| segments[k].1);
                let abbreviated = previous.is_some_and(|p| is_word_segment(p) && is_abbreviation(p));
                let next_lowercase = segments[j..]
                    .iter()
                    .find(|(_, s)| !is_whitespace(s))
                    .and_then(|(_, s)| s.chars().next())
                    .is_some_and(char::is_lowercase);
                !abbreviated && !next_lowercase
            });
        if boundary {
            bounds.push(end);
        }
        i = j;
    }

    let mut result = Vec::new();
    let mut start = 0;
    for end in bounds.into_iter().chain(std::iter::once(text.len())) {
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            result.push(sentence);
        }
        start = end;
    }
    result
}

/// Splits text into word tokens. Punctuation and whitespace never become tokens.
pub fn words(text: &str) -> Vec<String> {
    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut tokens = Vec::new();
    let mut pending: Option<String> = None;
    let mut hyphen = false;

    for (i, &segment) in segments.iter().enumerate() {
        if is_word_segment(segment) {
            match pending.take() {
                Some(mut compound) if hyphen => {
                    compound.push('-');
                    compound.push_str(segment);
                    pending = Some(compound);
                }
                Some(previous) => {
                    push_token(&mut tokens, &previous);
                    pending = Some(segment.to_string());
                }
                None => pending = Some(segment.to_string()),
            }
            hyphen = false;
        } else if segment == "-" && pending.is_some() && !hyphen {
            hyphen = true;
        } else if segment == "."
            && !hyphen
            && pending.as_deref().is_some_and(is_abbreviation)
            && segments[i + 1..].iter().any(|s| is_word_segment(s))
        {
            // a period that does not close the text stays on the abbreviation
            if let Some(mut abbreviation) = pending.take() {
                abbreviation.push('.');
                tokens.push(abbreviation);
            }
        } else {
            if let Some(previous) = pending.take() {
                push_token(&mut tokens, &previous);
            }
            hyphen = false;
        }
    }

    if let Some(previous) = pending {
        push_token(&mut tokens, &previous);
    }

    tokens
}

/// True when the token is non-empty and made only of alphabetic characters.
pub fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Syllable proxy: occurrences of `a e i o u y`, case-insensitive.
pub fn vowel_count(word: &str) -> usize {
    word.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
        .count()
}

/// Known abbreviation, dotted form (`U.S`, `e.g`) or a capital initial other than `I`.
fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }
    if word.contains('.') && word.chars().any(char::is_alphabetic) {
        return true;
    }
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_uppercase() && c != 'I'
    )
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn is_whitespace(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}

fn push_token(tokens: &mut Vec<String>, token: &str) {
    let (stem, clitic) = split_clitic(token);
    let (head, tail) = split_fused(stem);
    tokens.push(head.to_string());
    if let Some(tail) = tail {
        tokens.push(tail.to_string());
    }
    if let Some(clitic) = clitic {
        tokens.push(clitic.to_string());
    }
}

fn split_fused(token: &str) -> (&str, Option<&str>) {
    let lower = token.to_ascii_lowercase();
    FUSED
        .iter()
        .find(|(form, _)| lower == *form)
        .map_or((token, None), |(_, at)| (&token[..*at], Some(&token[*at..])))
}

fn split_clitic(token: &str) -> (&str, Option<&str>) {
    let Some((idx, apostrophe)) = token
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '\'' || *c == '\u{2019}')
    else {
        return (token, None);
    };
    if idx == 0 {
        return (token, None);
    }

    let suffix = token[idx + apostrophe.len_utf8()..].to_lowercase();
    if suffix == "t" {
        // "don't" -> "do" + "n't"
        let head = &token[..idx];
        return match head.char_indices().last() {
            Some((n_idx, c)) if n_idx > 0 && c.eq_ignore_ascii_case(&'n') => {
                (&token[..n_idx], Some(&token[n_idx..]))
            }
            _ => (token, None),
        };
    }
    if CLITICS.contains(&suffix.as_str()) {
        return (&token[..idx], Some(&token[idx..]));
    }
    (token, None)
}
