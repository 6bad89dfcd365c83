use super::segment::{split_sentences, split_words};
use super::{PartOfSpeech, Tagger, Token};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "my", "your", "his", "her", "its",
    "our", "their", "whose", "which", "what", "much", "many", "few", "several", "most", "more",
    "less", "least", "enough",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "mine", "yours",
    "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "themselves", "who", "whom", "someone", "somebody", "something", "anyone", "anybody",
    "anything", "everyone", "everybody", "everything", "nobody", "nothing", "one", "none",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "within", "without", "along", "across", "behind", "beyond", "near",
    "around", "among", "toward", "towards", "upon", "onto", "via", "per", "despite", "like",
    "throughout", "inside", "outside", "beneath", "beside", "besides", "except", "since",
    "until", "till", "than",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "whether", "when", "whenever", "where", "wherever", "as",
    "once", "that",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't",
    "doesn't", "don't", "didn't", "won't", "wouldn't", "can't", "cannot", "couldn't",
    "shouldn't", "mustn't",
];

const PARTICLES: &[&str] = &["not", "'s", "’s"];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "yes", "okay", "ok", "alas", "oops", "hmm",
];

const ADVERBS: &[&str] = &[
    "very", "also", "often", "never", "always", "sometimes", "usually", "here", "there", "then",
    "now", "soon", "again", "already", "still", "just", "only", "even", "too", "quite",
    "rather", "almost", "perhaps", "maybe", "however", "therefore", "thus", "instead",
    "together", "away", "back", "well", "ever", "yet", "later", "early", "today", "tomorrow",
    "yesterday", "why", "how", "far", "fast", "hard", "much", "once", "twice",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "large", "little", "long", "short", "high",
    "low", "young", "great", "important", "different", "same", "other", "right", "wrong",
    "early", "late", "hot", "cold", "warm", "cool", "red", "blue", "green", "yellow", "black",
    "white", "brown", "dark", "heavy", "full", "empty", "easy", "difficult", "simple",
    "major", "minor", "main", "first", "last", "next", "whole", "free", "true", "false",
    "real", "strong", "weak", "fast", "slow", "rich", "poor", "happy", "sad", "quick",
    "common", "human", "natural", "modern", "ancient", "local", "public", "private", "social",
    "political", "national", "central", "general", "special", "possible", "several", "certain",
];

/// Frequent verbs whose forms the suffix rules cannot recognise
const VERBS: &[&str] = &[
    "sat", "sit", "sits", "ran", "run", "runs", "went", "go", "goes", "gone", "came", "come",
    "comes", "saw", "see", "sees", "seen", "took", "take", "takes", "taken", "made", "make",
    "makes", "gave", "give", "gives", "given", "found", "find", "finds", "got", "get", "gets",
    "knew", "know", "knows", "known", "thought", "think", "thinks", "told", "tell", "tells",
    "became", "become", "becomes", "left", "leave", "leaves", "felt", "feel", "feels",
    "brought", "bring", "brings", "began", "begin", "begins", "begun", "kept", "keep", "keeps",
    "held", "hold", "holds", "wrote", "write", "writes", "written", "stood", "stand", "stands",
    "heard", "hear", "hears", "meant", "mean", "means", "met", "meet", "meets", "paid", "pay",
    "pays", "led", "lead", "leads", "grew", "grow", "grows", "grown", "drew", "draw", "draws",
    "drawn", "fell", "fall", "falls", "fallen", "ate", "eat", "eats", "eaten", "drank",
    "drink", "drinks", "flew", "fly", "flies", "swam", "swim", "swims", "sang", "sing",
    "sings", "spoke", "speak", "speaks", "spoken", "built", "build", "builds", "sent", "send",
    "sends", "spent", "spend", "spends", "lost", "lose", "loses", "won", "win", "wins",
    "sold", "sell", "sells", "bought", "buy", "buys", "caught", "catch", "catches", "taught",
    "teach", "teaches", "fought", "fight", "fights", "rose", "rise", "rises", "risen", "lay",
    "lie", "lies", "lain", "said", "say", "says", "put", "puts", "set", "sets", "let", "lets",
    "cut", "cuts", "hit", "hits", "contain", "contains", "include", "includes",
    "produce", "produces", "provide", "provides", "use", "uses", "need", "needs", "want",
    "wants", "live", "lives", "work", "works", "help", "helps", "move", "moves", "show",
    "shows", "seem", "seems", "allow", "allows", "consist", "consists", "occur", "occurs",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

const NUMBER_WORDS: &[&str] = &[
    "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "billion",
];

/// Rule-based English tagger.
///
/// Lexicons cover the closed word classes and frequent verbs; everything
/// else is decided from suffixes, capitalisation and the neighbouring words.
/// Unknown open-class words default to common nouns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl Tagger for RuleTagger {
    fn segment(&self, text: &str) -> Vec<String> {
        split_sentences(text)
    }

    fn tag(&self, sentence: &str) -> Vec<Token> {
        let words = split_words(sentence);
        let lexical: Vec<Option<PartOfSpeech>> =
            words.iter().map(|w| lexicon_class(&w.to_lowercase())).collect();

        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let prev = tokens.last().map(|t| t.pos);
            let next = lexical.get(i + 1).copied();
            let pos = tag_word(word, i == 0, prev, next);
            tokens.push(Token::new(*word, pos));
        }

        tokens
    }
}

/// Closed-class lookup, independent of context
fn lexicon_class(lower: &str) -> Option<PartOfSpeech> {
    if is_number(lower) {
        Some(PartOfSpeech::Numeral)
    } else if DETERMINERS.contains(&lower) {
        Some(PartOfSpeech::Determiner)
    } else if PRONOUNS.contains(&lower) {
        Some(PartOfSpeech::Pronoun)
    } else if AUXILIARIES.contains(&lower) {
        Some(PartOfSpeech::Auxiliary)
    } else if ADPOSITIONS.contains(&lower) {
        Some(PartOfSpeech::Adposition)
    } else if CONJUNCTIONS.contains(&lower) {
        Some(PartOfSpeech::Conjunction)
    } else if PARTICLES.contains(&lower) {
        Some(PartOfSpeech::Particle)
    } else if INTERJECTIONS.contains(&lower) {
        Some(PartOfSpeech::Interjection)
    } else if ADVERBS.contains(&lower) {
        Some(PartOfSpeech::Adverb)
    } else {
        None
    }
}

/// `next` describes the following word: `None` at the end of the sentence,
/// `Some(None)` for an open-class word, `Some(Some(class))` for a lexicon word.
fn tag_word(
    word: &str,
    is_first: bool,
    prev: Option<PartOfSpeech>,
    next: Option<Option<PartOfSpeech>>,
) -> PartOfSpeech {
    use PartOfSpeech::*;

    let lower = word.to_lowercase();

    if let Some(class) = lexicon_class(&lower) {
        return class;
    }

    if !word.chars().any(|c| c.is_alphabetic()) {
        return Other;
    }

    let capitalized = word.chars().next().is_some_and(|c| c.is_uppercase());
    let acronym = word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().all(|c| !c.is_lowercase());
    if (capitalized && !is_first) || acronym {
        return ProperNoun;
    }

    let after_modifier = matches!(prev, Some(Determiner | Adjective | Numeral));
    let after_subject = matches!(prev, Some(Noun | ProperNoun | Pronoun));
    let at_end = next.is_none();
    let next_class = next.flatten();

    if ADJECTIVES.contains(&lower.as_str()) {
        return Adjective;
    }

    if VERBS.contains(&lower.as_str()) {
        return if after_modifier { Noun } else { Verb };
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return if after_modifier { Noun } else { Adverb };
    }

    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| lower.len() > s.len() + 2 && lower.ends_with(s))
        && !at_end
        && next_class.is_none_or(|c| c == Adjective)
    {
        return Adjective;
    }

    if lower.len() > 4 && lower.ends_with("ing") {
        return if after_modifier { Noun } else { Verb };
    }

    if lower.len() > 3 && lower.ends_with("ed") {
        return match prev {
            Some(Determiner) => Adjective,
            _ => Verb,
        };
    }

    if matches!(prev, Some(Pronoun | Auxiliary)) {
        return Verb;
    }

    if after_subject {
        let third_person = lower.ends_with('s') && !lower.ends_with("ss");
        let next_is_function_word = next_class.is_some_and(|c| {
            c.is_closed_class() || matches!(c, Adverb | Numeral)
        });
        if third_person || next_is_function_word || at_end {
            return Verb;
        }
    }

    Noun
}

fn is_number(lower: &str) -> bool {
    let digits = lower.chars().any(|c| c.is_ascii_digit())
        && lower
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%'));
    digits || NUMBER_WORDS.contains(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nouns(sentence: &str) -> Vec<String> {
        RuleTagger
            .tag(sentence)
            .into_iter()
            .filter(|t| t.pos.is_noun())
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_simple_nouns() {
        assert_eq!(nouns("The cat sat on the mat."), vec!["cat", "mat"]);
        assert_eq!(nouns("The dog ran in the park."), vec!["dog", "park"]);
    }

    #[test]
    fn test_tags() {
        let tags: Vec<PartOfSpeech> = RuleTagger
            .tag("The cat sat on the mat.")
            .into_iter()
            .map(|t| t.pos)
            .collect();
        assert_eq!(
            tags,
            vec![
                PartOfSpeech::Determiner,
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Adposition,
                PartOfSpeech::Determiner,
                PartOfSpeech::Noun,
            ]
        );
    }

    #[test]
    fn test_proper_nouns() {
        let tokens = RuleTagger.tag("In 1898 the scientist Marie Curie discovered radium in Paris.");
        let proper: Vec<&str> = tokens
            .iter()
            .filter(|t| t.pos == PartOfSpeech::ProperNoun)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(proper, vec!["Marie", "Curie", "Paris"]);

        let year = tokens.iter().find(|t| t.text == "1898").unwrap();
        assert_eq!(year.pos, PartOfSpeech::Numeral);
    }

    #[test]
    fn test_verbs_after_subjects() {
        let tokens = RuleTagger.tag("Plants need sunlight and the leaf converts it.");
        let pos_of = |w: &str| tokens.iter().find(|t| t.text == w).unwrap().pos;
        assert_eq!(pos_of("Plants"), PartOfSpeech::Noun);
        assert_eq!(pos_of("need"), PartOfSpeech::Verb);
        assert_eq!(pos_of("sunlight"), PartOfSpeech::Noun);
        assert_eq!(pos_of("leaf"), PartOfSpeech::Noun);
        assert_eq!(pos_of("converts"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_modifiers() {
        let tokens = RuleTagger.tag("A famous painter quickly finished the painting.");
        let pos_of = |w: &str| tokens.iter().find(|t| t.text == w).unwrap().pos;
        assert_eq!(pos_of("famous"), PartOfSpeech::Adjective);
        assert_eq!(pos_of("painter"), PartOfSpeech::Noun);
        assert_eq!(pos_of("quickly"), PartOfSpeech::Adverb);
        assert_eq!(pos_of("finished"), PartOfSpeech::Verb);
        assert_eq!(pos_of("painting"), PartOfSpeech::Noun);
    }

    #[test]
    fn test_no_nouns() {
        assert!(nouns("It is what it is.").is_empty());
        assert!(nouns("").is_empty());
    }

    #[test]
    fn test_annotate() {
        let sentences = RuleTagger.annotate("The cat sat on the mat. Oh no!");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].nouns().collect::<Vec<_>>(), vec!["cat", "mat"]);
        assert_eq!(sentences[1].nouns().count(), 0);
    }
}
