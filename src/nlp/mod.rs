//! Sentence segmentation and part-of-speech tagging.
//!
//! The question generator only needs two capabilities: split a document into
//! sentences and label each word of a sentence with a grammatical category.
//! Both sit behind the [`Tagger`] trait so a model-based tagger can replace
//! the built-in [`RuleTagger`] without touching the generator.

pub mod segment;
pub mod tagger;

pub use tagger::RuleTagger;

/// Grammatical category of a word (subset of the Universal POS tags)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Particle,
    Interjection,
    Other,
}

impl PartOfSpeech {
    /// Common or proper noun, i.e. a word that can become a quiz answer
    pub fn is_noun(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }

    /// Function words drawn from a fixed, closed vocabulary
    pub fn is_closed_class(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Auxiliary
                | PartOfSpeech::Pronoun
                | PartOfSpeech::Determiner
                | PartOfSpeech::Adposition
                | PartOfSpeech::Conjunction
                | PartOfSpeech::Particle
                | PartOfSpeech::Interjection
        )
    }
}

/// A word as it appears in the sentence, with its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// A sentence with its tagged words
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Words tagged as common or proper nouns, in sentence order
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.pos.is_noun())
            .map(|t| t.text.as_str())
    }
}

/// Pluggable linguistic analysis used by the question generator
pub trait Tagger {
    /// Split text into sentences, in document order
    fn segment(&self, text: &str) -> Vec<String>;

    /// Tag every word of a single sentence
    fn tag(&self, sentence: &str) -> Vec<Token>;

    /// Segment the text and tag each sentence
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        self.segment(text)
            .into_iter()
            .map(|text| {
                let tokens = self.tag(&text);
                Sentence { text, tokens }
            })
            .collect()
    }
}
