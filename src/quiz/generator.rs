use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{AnswerOption, OPTION_LABELS, Question};
use crate::nlp::{RuleTagger, Tagger};

/// Marker that replaces the answer in the prompt
pub const BLANK: &str = "_____";

/// Distractor draws allowed per question before it is skipped
pub const DEFAULT_MAX_DRAW_ATTEMPTS: usize = 100;

/// Which occurrences of the answer word are blanked in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankPolicy {
    /// Only the first occurrence; later ones stay visible
    #[default]
    FirstOccurrence,
    AllOccurrences,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub blank_marker: String,
    pub blank_policy: BlankPolicy,
    pub max_draw_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            blank_marker: BLANK.to_string(),
            blank_policy: BlankPolicy::default(),
            max_draw_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
        }
    }
}

/// Builds fill-in-the-blank multiple-choice questions from nouns in a text
#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator<T = RuleTagger> {
    tagger: T,
    config: GeneratorConfig,
}

impl QuestionGenerator<RuleTagger> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_tagger(RuleTagger, config)
    }
}

impl<T: Tagger> QuestionGenerator<T> {
    pub fn with_tagger(tagger: T, config: GeneratorConfig) -> Self {
        Self { tagger, config }
    }

    /// Generate up to `count` questions, one per sentence, in document order.
    ///
    /// Returns fewer questions when the text runs out of sentences with
    /// nouns. Each question blanks a random noun of its sentence and offers
    /// three distractors drawn from the nouns of the whole document; a
    /// document with fewer than four distinct nouns yields no questions.
    pub fn generate<R: Rng + ?Sized>(&self, text: &str, count: usize, rng: &mut R) -> Vec<Question> {
        if count == 0 {
            return Vec::new();
        }

        let sentences = self.tagger.annotate(text);
        let pool: Vec<&str> = sentences.iter().flat_map(|s| s.nouns()).collect();

        let distinct = pool.iter().copied().collect::<HashSet<&str>>().len();
        if distinct < OPTION_LABELS.len() {
            tracing::debug!(
                distinct,
                "not enough distinct nouns for four options, no questions generated"
            );
            return Vec::new();
        }

        let mut questions = Vec::new();

        for sentence in &sentences {
            if questions.len() >= count {
                break;
            }

            let candidates: Vec<&str> = sentence.nouns().collect();
            let Some(&answer) = candidates.choose(rng) else {
                continue;
            };

            let Some(mut options) = self.draw_options(answer, &pool, rng) else {
                tracing::debug!(answer, "distractor draw exhausted, skipping sentence");
                continue;
            };
            options.shuffle(rng);

            let Some(index) = options.iter().position(|o| o == answer) else {
                continue;
            };

            questions.push(Question {
                prompt: blank_out(
                    &sentence.text,
                    answer,
                    &self.config.blank_marker,
                    self.config.blank_policy,
                ),
                options: OPTION_LABELS
                    .iter()
                    .zip(options)
                    .map(|(label, text)| AnswerOption {
                        label: label.to_string(),
                        text,
                    })
                    .collect(),
                correct: OPTION_LABELS[index].to_string(),
            });
        }

        tracing::debug!(requested = count, generated = questions.len(), "generated questions");
        questions
    }

    /// The answer plus three distinct distractors, or `None` when the
    /// bounded number of draws does not find enough distinct words
    fn draw_options<R: Rng + ?Sized>(
        &self,
        answer: &str,
        pool: &[&str],
        rng: &mut R,
    ) -> Option<Vec<String>> {
        let mut options = vec![answer.to_string()];

        for _ in 0..self.config.max_draw_attempts {
            if options.len() == OPTION_LABELS.len() {
                break;
            }
            let word = pool.choose(rng)?;
            if !options.iter().any(|o| o == word) {
                options.push(word.to_string());
            }
        }

        (options.len() == OPTION_LABELS.len()).then_some(options)
    }
}

/// Generate questions with the rule-based tagger and default settings
#[allow(dead_code)]
pub fn generate<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> Vec<Question> {
    QuestionGenerator::<RuleTagger>::default().generate(text, count, rng)
}

/// Replace `word` in `sentence` with `marker`.
///
/// Only whole-word matches are replaced; if the word only occurs inside
/// another word, the first raw occurrence is replaced instead.
pub fn blank_out(sentence: &str, word: &str, marker: &str, policy: BlankPolicy) -> String {
    let mut starts = whole_word_matches(sentence, word);
    if starts.is_empty() {
        return sentence.replacen(word, marker, 1);
    }
    if policy == BlankPolicy::FirstOccurrence {
        starts.truncate(1);
    }

    let mut out = String::with_capacity(sentence.len());
    let mut last = 0;
    for start in starts {
        out.push_str(&sentence[last..start]);
        out.push_str(marker);
        last = start + word.len();
    }
    out.push_str(&sentence[last..]);
    out
}

fn whole_word_matches(sentence: &str, word: &str) -> Vec<usize> {
    if word.is_empty() {
        return Vec::new();
    }

    sentence
        .match_indices(word)
        .filter(|&(i, _)| {
            let before = sentence[..i].chars().next_back();
            let after = sentence[i + word.len()..].chars().next();
            before.is_none_or(|c| !c.is_alphanumeric()) && after.is_none_or(|c| !c.is_alphanumeric())
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{PartOfSpeech, Token};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CAT_AND_DOG: &str = "The cat sat on the mat. The dog ran in the park.";

    const GARDEN: &str = "Photosynthesis happens in the leaf. The plant needs water from the soil. \
        Sunlight gives the plant energy. The farmer waters the garden every morning. \
        Bees visit the flowers in the meadow.";

    fn assert_well_formed(q: &Question) {
        assert_eq!(q.options.len(), 4);

        let labels: Vec<&str> = q.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, OPTION_LABELS);

        let texts: HashSet<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts.len(), 4, "options must be distinct: {:?}", q.options);

        assert!(OPTION_LABELS.contains(&q.correct.as_str()));
        assert!(q.prompt.contains(BLANK));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(GARDEN, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_round_trip_cat_and_dog() {
        let mut rng = StdRng::seed_from_u64(42);
        let questions = generate(CAT_AND_DOG, 2, &mut rng);

        assert_eq!(questions.len(), 2);
        assert_ne!(questions[0].prompt, questions[1].prompt);

        let sentences = ["The cat sat on the mat.", "The dog ran in the park."];
        let nouns: HashSet<&str> = ["cat", "mat", "dog", "park"].into_iter().collect();

        for (q, sentence) in questions.iter().zip(sentences) {
            assert_well_formed(q);

            let texts: HashSet<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
            assert_eq!(texts, nouns);

            // the correct option is exactly the word that was blanked
            let answer = q.answer().unwrap();
            assert_eq!(q.prompt.replacen(BLANK, answer, 1), sentence);
        }
    }

    #[test]
    fn test_never_more_than_requested() {
        for seed in 0..20 {
            for n in 0..8 {
                let mut rng = StdRng::seed_from_u64(seed);
                let questions = generate(GARDEN, n, &mut rng);
                assert!(questions.len() <= n);
                questions.iter().for_each(assert_well_formed);
            }
        }
    }

    #[test]
    fn test_stops_at_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(GARDEN, 3, &mut rng).len(), 3);
    }

    #[test]
    fn test_fewer_than_four_nouns_terminates() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = "The cat sat on the mat. The cat sat on the mat again.";
        assert!(generate(text, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_draw_attempts_are_bounded() {
        // four distinct nouns, but one dominates the pool
        let mut text = String::from("The cat sat on the mat. The dog ran in the park. ");
        for _ in 0..200 {
            text.push_str("The cat sat. ");
        }

        let config = GeneratorConfig {
            max_draw_attempts: 3,
            ..GeneratorConfig::default()
        };
        let generator = QuestionGenerator::new(config);
        let mut rng = StdRng::seed_from_u64(9);

        let questions = generator.generate(&text, 50, &mut rng);
        assert!(questions.len() <= 50);
        questions.iter().for_each(assert_well_formed);
    }

    #[test]
    fn test_same_seed_same_questions() {
        let a = generate(GARDEN, 4, &mut StdRng::seed_from_u64(11));
        let b = generate(GARDEN, 4, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sentences_without_nouns_skipped() {
        let text = "It is what it is. The cat sat on the mat. Oh well! The dog ran in the park.";
        let mut rng = StdRng::seed_from_u64(5);
        let questions = generate(text, 10, &mut rng);

        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| !q.prompt.starts_with("It is")));
    }

    #[test]
    fn test_blank_first_occurrence_only() {
        assert_eq!(
            blank_out("The cat chased the other cat.", "cat", BLANK, BlankPolicy::FirstOccurrence),
            "The _____ chased the other cat."
        );
    }

    #[test]
    fn test_blank_all_occurrences() {
        assert_eq!(
            blank_out("The cat chased the other cat.", "cat", BLANK, BlankPolicy::AllOccurrences),
            "The _____ chased the other _____."
        );
    }

    #[test]
    fn test_blank_respects_word_boundaries() {
        assert_eq!(
            blank_out("A category for the cat.", "cat", BLANK, BlankPolicy::FirstOccurrence),
            "A category for the _____."
        );
        assert_eq!(
            blank_out("Cats everywhere.", "Cat", BLANK, BlankPolicy::FirstOccurrence),
            "_____s everywhere."
        );
    }

    /// Splits on `|` and calls every word a noun
    struct PipeTagger;

    impl Tagger for PipeTagger {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split('|').map(|s| s.trim().to_string()).collect()
        }

        fn tag(&self, sentence: &str) -> Vec<Token> {
            sentence
                .split_whitespace()
                .map(|w| Token::new(w, PartOfSpeech::Noun))
                .collect()
        }
    }

    #[test]
    fn test_custom_tagger() {
        let generator = QuestionGenerator::with_tagger(PipeTagger, GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(2);

        let questions = generator.generate("red green | blue yellow | purple", 5, &mut rng);
        assert_eq!(questions.len(), 3);
        questions.iter().for_each(assert_well_formed);
    }
}
