use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use speller_core::VocabularyEntry;

use super::{WordSource, catalog, dedupe_by_target, shuffle_take};
use crate::error::{GenerationError, WordSourceError};
use crate::generation::TextGenerator;

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful language tutor designed to help Turkish speakers learn English spelling.";

/// Difficulty and topic constraints sent with a generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCriteria {
    pub level: String,
    pub category: Option<String>,
}

impl WordCriteria {
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("SPELLER_AI_LEVEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "A1 or A2".into());
        let category = env::var("SPELLER_AI_CATEGORY")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self { level, category }
    }

    fn prompt(&self, count: usize) -> String {
        let topic = self
            .category
            .as_deref()
            .map_or_else(String::new, |category| format!(" related to {category}"));
        format!(
            "Generate a list of {count} distinct {level} level Turkish words{topic} that are \
             commonly used in daily life. For each word, provide the English translation and a \
             short English definition. Use simple nouns, verbs, or adjectives suitable for a \
             learner. Do not include phrases, only single words. Respond with a JSON array of \
             objects with the string fields \"turkish\", \"english\" and \"definition\", and \
             nothing else.",
            level = self.level,
        )
    }
}

impl Default for WordCriteria {
    fn default() -> Self {
        Self {
            level: "A1 or A2".into(),
            category: None,
        }
    }
}

/// Asks a `TextGenerator` for fresh entries and degrades to the built-in
/// fallback list on any failure.
#[derive(Clone)]
pub struct RemoteWordSource {
    generator: Arc<dyn TextGenerator>,
    criteria: WordCriteria,
    fallback: Vec<VocabularyEntry>,
    seed: Option<u64>,
}

impl RemoteWordSource {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, criteria: WordCriteria) -> Self {
        Self {
            generator,
            criteria,
            fallback: catalog::fallback_entries(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<VocabularyEntry>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Use a fixed shuffle seed so results are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    async fn generate(&self, count: usize) -> Result<Vec<VocabularyEntry>, GenerationError> {
        let prompt = self.criteria.prompt(count);
        let text = self.generator.generate(SYSTEM_INSTRUCTION, &prompt).await?;
        let entries = parse_generated(&text)?;
        let entries = shuffle_take(&entries, count, self.seed);
        if entries.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(entries)
    }
}

#[async_trait]
impl WordSource for RemoteWordSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch_session(&self, count: usize) -> Result<Vec<VocabularyEntry>, WordSourceError> {
        if count == 0 {
            return Err(WordSourceError::InvalidCount);
        }

        match self.generate(count).await {
            Ok(entries) => {
                tracing::info!(
                    source = self.name(),
                    count = entries.len(),
                    "fetched vocabulary session"
                );
                Ok(entries)
            }
            Err(err) => {
                tracing::warn!(error = %err, "word generation failed, using fallback list");
                let entries = shuffle_take(&self.fallback, count, self.seed);
                if entries.is_empty() {
                    return Err(WordSourceError::Unavailable);
                }
                Ok(entries)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedEntry {
    turkish: String,
    english: String,
    #[serde(default)]
    definition: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneratedPayload {
    List(Vec<GeneratedEntry>),
    Wrapped { words: Vec<GeneratedEntry> },
}

/// Parse a generator reply into entries, skipping invalid and duplicate items.
fn parse_generated(text: &str) -> Result<Vec<VocabularyEntry>, GenerationError> {
    let payload: GeneratedPayload = serde_json::from_str(strip_code_fence(text))?;
    let items = match payload {
        GeneratedPayload::List(items) | GeneratedPayload::Wrapped { words: items } => items,
    };

    let entries = items
        .into_iter()
        .filter(|item| !item.turkish.trim().is_empty())
        .filter_map(|item| VocabularyEntry::new(item.turkish, item.english, item.definition).ok())
        .collect();
    Ok(dedupe_by_target(entries))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
