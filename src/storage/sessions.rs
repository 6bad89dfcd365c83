use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::quiz::{Question, QuizSession};

/// Length of the keys handed out to students
pub const SESSION_KEY_LEN: usize = 8;

/// In-memory quiz sessions keyed by their short session key.
///
/// Cloning is cheap and every clone shares the same map, so one store can be
/// handed to each request handler. Sessions live until the process exits.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under `key`, replacing any previous one
    #[allow(dead_code)]
    pub fn put(&self, key: impl Into<String>, session: QuizSession) {
        self.sessions.insert(key.into(), session);
    }

    pub fn get(&self, key: &str) -> Option<QuizSession> {
        self.sessions.get(key).map(|entry| entry.value().clone())
    }

    /// Store questions under a freshly minted key and return the new session
    pub fn create(&self, questions: Vec<Question>, timer_seconds: u32) -> QuizSession {
        loop {
            match self.sessions.entry(new_session_key()) {
                Entry::Occupied(entry) => {
                    tracing::warn!(key = %entry.key(), "session key collision, minting another");
                }
                Entry::Vacant(entry) => {
                    let session = QuizSession::new(entry.key().clone(), questions, timer_seconds);
                    entry.insert(session.clone());
                    tracing::info!(
                        key = %session.id,
                        questions = session.questions.len(),
                        timer_seconds,
                        "created quiz session"
                    );
                    return session;
                }
            }
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn new_session_key() -> String {
    let mut key = uuid::Uuid::new_v4().simple().to_string();
    key.truncate(SESSION_KEY_LEN);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{NOT_ANSWERED, generate, grade};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_put_and_get() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        store.put("abc123", QuizSession::new("abc123", Vec::new(), 30));

        let session = store.get("abc123").unwrap();
        assert_eq!(session.id, "abc123");
        assert_eq!(session.timer_seconds, 30);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_key() {
        let store = SessionStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_create_mints_short_unique_keys() {
        let store = SessionStore::new();
        let keys: HashSet<String> = (0..50).map(|_| store.create(Vec::new(), 0).id).collect();

        assert_eq!(keys.len(), 50);
        assert_eq!(store.len(), 50);
        assert!(keys.iter().all(|k| k.len() == SESSION_KEY_LEN));
        assert!(keys.iter().all(|k| k.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn test_shared_across_clones_and_threads() {
        let store = SessionStore::new();

        std::thread::scope(|s| {
            for _ in 0..8 {
                let store = store.clone();
                s.spawn(move || {
                    for _ in 0..25 {
                        store.create(Vec::new(), 0);
                    }
                });
            }
        });

        assert_eq!(store.len(), 200);
    }

    #[test]
    fn test_generate_store_and_grade() {
        let text = "The cat sat on the mat. The dog ran in the park. \
            The farmer waters the garden. Bees visit the flowers in the meadow. \
            The river flows past the village.";

        let mut rng = StdRng::seed_from_u64(21);
        let questions = generate(text, 3, &mut rng);
        assert_eq!(questions.len(), 3);

        let store = SessionStore::new();
        store.put("abc123", QuizSession::new("abc123", questions, 0));

        let session = store.get("abc123").unwrap();
        let answers = HashMap::from([(0, session.questions[0].correct.to_lowercase())]);
        let graded = grade(&session.questions, &answers);

        assert_eq!(graded.len(), 3);
        assert!(graded[0].is_correct);
        for answered in &graded[1..] {
            assert!(!answered.is_correct);
            assert_eq!(answered.user_answer, NOT_ANSWERED);
        }
    }
}
