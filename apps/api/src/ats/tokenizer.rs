//! Treebank-style word tokenizer.
//!
//! Splits on whitespace, then peels punctuation and English clitics off each chunk.
//! Hyphens, slashes and single internal periods are kept inside the token, so
//! `full-stack` and `node.js` come out whole, while `go..kafka` does not.

/// Characters that always form their own token.
const ALWAYS_SPLIT: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"', '`',
    '*', '“', '”',
];

/// Clitic suffixes split from the word they attach to, matched case-insensitively.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Whole words split in two at the given byte offset.
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        for piece in split_punctuation(chunk) {
            split_word(piece, &mut tokens);
        }
    }
    tokens
}

fn split_punctuation(chunk: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = chunk.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        let width = match ch {
            ',' | ':' if !next.is_some_and(|c| c.is_ascii_digit()) => 1,
            '-' if next == Some('-') => {
                chars.next();
                2
            }
            // Two or more periods in a row are one token: `..`, `...`, `....`.
            '.' if next == Some('.') => {
                let mut width = 1;
                while chars.next_if(|&(_, c)| c == '.').is_some() {
                    width += 1;
                }
                width
            }
            c if ALWAYS_SPLIT.contains(&c) => c.len_utf8(),
            _ => continue,
        };

        if start < idx {
            pieces.push(&chunk[start..idx]);
        }
        pieces.push(&chunk[idx..idx + width]);
        start = idx + width;
    }

    if start < chunk.len() {
        pieces.push(&chunk[start..]);
    }
    pieces
}

fn split_word(piece: &str, tokens: &mut Vec<String>) {
    if piece.chars().count() == 1 || !piece.chars().any(char::is_alphanumeric) {
        tokens.push(piece.to_string());
        return;
    }

    // A leading single quote stays attached; only trailing ones split.
    let mut word = piece;
    let mut trailing = Vec::new();
    loop {
        if let Some(rest) = word.strip_suffix('\'').filter(|r| !r.is_empty()) {
            trailing.push("'");
            word = rest;
        } else if let Some(rest) = word
            .strip_suffix('.')
            .filter(|r| !r.is_empty() && !r.contains('.'))
        {
            trailing.push(".");
            word = rest;
        } else {
            break;
        }
    }

    push_with_clitics(word, tokens);
    tokens.extend(trailing.into_iter().rev().map(String::from));
}

fn push_with_clitics(word: &str, tokens: &mut Vec<String>) {
    // ASCII lowering keeps byte offsets aligned with `word`.
    let lower = word.to_ascii_lowercase();

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let at = word.len() - clitic.len();
            tokens.push(word[..at].to_string());
            tokens.push(word[at..].to_string());
            return;
        }
    }

    if let Some(&(_, at)) = SPLIT_WORDS.iter().find(|(whole, _)| lower == *whole) {
        tokens.push(word[..at].to_string());
        tokens.push(word[at..].to_string());
        return;
    }

    tokens.push(word.to_string());
}
