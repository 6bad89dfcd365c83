/// Words that end in a period without ending the sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "fig", "figs", "approx", "dept", "est", "inc", "ltd", "co", "corp", "no", "vol", "pp", "ch",
    "sec", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "u.s", "u.k", "a.m", "p.m", "ph.d",
];

/// Characters that may trail a sentence terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}'];

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (plus any closing quotes or brackets)
/// followed by whitespace, or at a blank line. Periods after known
/// abbreviations and single-letter initials, periods inside numbers, and
/// periods followed by a lowercase word do not end a sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if matches!(c, '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len()
                && (matches!(chars[j].1, '.' | '!' | '?') || CLOSERS.contains(&chars[j].1))
            {
                j += 1;
            }

            let at_end = j == chars.len();
            if (at_end || chars[j].1.is_whitespace())
                && (c != '.' || ends_sentence(&text[start..pos], &chars[j..]))
            {
                let end = if at_end { text.len() } else { chars[j].0 };
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }

            i = j;
            continue;
        }

        if c == '\n' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 != '\n' && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j].1 == '\n' {
                push_sentence(&mut sentences, &text[start..pos]);
                start = chars[j].0;
                i = j + 1;
                continue;
            }
        }

        i += 1;
    }

    if start < text.len() {
        push_sentence(&mut sentences, &text[start..]);
    }

    sentences
}

/// Decide whether a period closes the sentence, given the text before it
/// and the characters after it
fn ends_sentence(before: &str, after: &[(usize, char)]) -> bool {
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    if ABBREVIATIONS.contains(&word.as_str()) {
        return false;
    }

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next())
        && first.is_alphabetic()
    {
        return false;
    }

    let next = after.iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
    !next.is_some_and(|c| c.is_lowercase())
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Split a sentence into words, dropping surrounding punctuation.
///
/// Internal apostrophes and hyphens are kept ("don't", "well-known");
/// a trailing possessive `'s` is split off as its own word.
pub fn split_words(sentence: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for piece in sentence.split(|c: char| c.is_whitespace() || matches!(c, '/' | '—' | '–')) {
        let word = piece.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }

        match word
            .strip_suffix("'s")
            .or_else(|| word.strip_suffix("’s"))
            .filter(|stem| !stem.is_empty())
        {
            Some(stem) => {
                words.push(stem);
                words.push(&word[stem.len()..]);
            }
            None => words.push(word),
        }
    }

    words
}
