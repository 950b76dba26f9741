// src/daily/mod.rs
// Daily prompt rotation: up to three unique AI prompts per calendar day,
// populated sequentially with per-slot fallback, cycled by index.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub mod fetch;
pub mod store;

pub use fetch::{HttpPromptFetcher, PromptFetcher};
pub use store::{JsonFileStore, MemoryStore, PromptStore};

use crate::prompt::APOLOGY;

/// Rotation slots collected per day.
pub const DAILY_PROMPT_CAP: usize = 3;

/// Per-slot defaults used when a population fetch fails. The first is also
/// what an empty rotation cycles to.
pub const DEFAULT_PROMPTS: [&str; DAILY_PROMPT_CAP] = [
    "Take a moment to reflect on something that brought you joy recently.",
    "What is one small thing you could do today to take care of yourself?",
    "Describe a moment from this week that you would like to remember.",
];

/// Where a rotation slot came from. Only `Ai` prompts are persisted, so
/// fallback text never permanently occupies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptOrigin {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrompt {
    pub text: String,
    pub origin: PromptOrigin,
}

/// One day's collected prompts plus the rotation cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPromptSet {
    /// Local calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub prompts: Vec<DailyPrompt>,
    pub cursor: usize,
}

impl DailyPromptSet {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            prompts: Vec::new(),
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Returns the prompt at the cursor and advances it, wrapping to the
    /// first slot after the last. An empty set yields the first default and
    /// leaves the cursor alone.
    pub fn cycle(&mut self) -> String {
        if self.prompts.is_empty() {
            return DEFAULT_PROMPTS[0].to_string();
        }
        // Modulo on read also repairs an out-of-range cursor from a stale
        // persisted set.
        let idx = self.cursor % self.prompts.len();
        let text = self.prompts[idx].text.clone();
        self.cursor = (idx + 1) % self.prompts.len();
        text
    }

    /// Copy containing only AI-sourced prompts, for persistence.
    fn persistable(&self) -> DailyPromptSet {
        DailyPromptSet {
            date: self.date.clone(),
            prompts: self
                .prompts
                .iter()
                .filter(|p| p.origin == PromptOrigin::Ai)
                .take(DAILY_PROMPT_CAP)
                .cloned()
                .collect(),
            cursor: 0,
        }
    }
}

/// Store key for a calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Returns the prompt set for `today`, populating and persisting it on the
/// first request of the day.
///
/// A stored set for a different date is treated as absent rather than stale.
/// Population issues up to [`DAILY_PROMPT_CAP`] sequential fetches separated
/// by `delay`; each failed or apology-shaped fetch substitutes the slot's
/// default, and duplicate AI texts are dropped. The persisted set keeps only
/// the AI prompts; the returned set keeps the fallbacks too so the caller
/// has something to display for every slot.
pub async fn get_or_fetch(
    today: NaiveDate,
    fetcher: &dyn PromptFetcher,
    store: &dyn PromptStore,
    delay: Duration,
) -> DailyPromptSet {
    let key = day_key(today);

    match store.load() {
        Ok(Some(set)) if set.date == key => return set,
        Ok(Some(set)) => debug!(stored = %set.date, today = %key, "stored prompts expired"),
        Ok(None) => {}
        Err(e) => warn!("failed to load stored prompts: {}", e),
    }

    let mut set = DailyPromptSet::new(key);

    for slot in 0..DAILY_PROMPT_CAP {
        if slot > 0 {
            tokio::time::sleep(delay).await;
        }

        match fetcher.fetch_daily().await {
            Ok(text) if text != APOLOGY => {
                if set.prompts.iter().any(|p| p.text == text) {
                    debug!(slot, "duplicate prompt dropped");
                } else {
                    set.prompts.push(DailyPrompt {
                        text,
                        origin: PromptOrigin::Ai,
                    });
                }
            }
            Ok(_) => {
                warn!(slot, "upstream substituted apology text, using default");
                set.prompts.push(DailyPrompt {
                    text: DEFAULT_PROMPTS[slot].to_string(),
                    origin: PromptOrigin::Fallback,
                });
            }
            Err(e) => {
                warn!(slot, "prompt fetch failed: {}", e);
                set.prompts.push(DailyPrompt {
                    text: DEFAULT_PROMPTS[slot].to_string(),
                    origin: PromptOrigin::Fallback,
                });
            }
        }
    }

    // Persisted regardless of how many slots succeeded; fallbacks excluded.
    if let Err(e) = store.save(&set.persistable()) {
        warn!("failed to persist daily prompts: {}", e);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays a fixed script of fetch results; `None` entries fail.
    struct ScriptedFetcher {
        replies: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedFetcher {
        fn new(replies: &[Option<&str>]) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .iter()
                        .rev()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl PromptFetcher for ScriptedFetcher {
        async fn fetch_daily(&self) -> Result<String> {
            match self.replies.lock().unwrap().pop() {
                Some(Some(text)) => Ok(text),
                _ => Err(anyhow::anyhow!("scripted failure")),
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[tokio::test]
    async fn collects_three_distinct_prompts_in_order() {
        let fetcher = ScriptedFetcher::new(&[Some("A"), Some("B"), Some("C")]);
        let store = MemoryStore::new();

        let mut set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        let texts: Vec<&str> = set.prompts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "C"]);
        assert_eq!(set.cycle(), "A");
        assert_eq!(set.cycle(), "B");
        assert_eq!(set.cycle(), "C");
        assert_eq!(set.cycle(), "A");
    }

    #[tokio::test]
    async fn failed_slot_gets_positional_default_and_rotation_still_wraps() {
        let fetcher = ScriptedFetcher::new(&[Some("A"), None, Some("C")]);
        let store = MemoryStore::new();

        let mut set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        assert_eq!(set.prompts.len(), 3);
        assert_eq!(set.prompts[1].text, DEFAULT_PROMPTS[1]);
        assert_eq!(set.prompts[1].origin, PromptOrigin::Fallback);
        assert_eq!(
            set.prompts
                .iter()
                .filter(|p| p.origin == PromptOrigin::Ai)
                .count(),
            2
        );

        assert_eq!(set.cycle(), "A");
        assert_eq!(set.cycle(), DEFAULT_PROMPTS[1]);
        assert_eq!(set.cycle(), "C");
        assert_eq!(set.cycle(), "A");
    }

    #[tokio::test]
    async fn fallbacks_are_not_persisted() {
        let fetcher = ScriptedFetcher::new(&[Some("A"), None, None]);
        let store = MemoryStore::new();

        get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        let stored = store.load().unwrap().unwrap();
        assert_eq!(stored.prompts.len(), 1);
        assert_eq!(stored.prompts[0].text, "A");
        assert_eq!(stored.prompts[0].origin, PromptOrigin::Ai);
    }

    #[tokio::test]
    async fn apology_text_counts_as_a_failed_slot() {
        let fetcher = ScriptedFetcher::new(&[Some(APOLOGY), Some("B"), Some("C")]);
        let store = MemoryStore::new();

        let set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        assert_eq!(set.prompts[0].text, DEFAULT_PROMPTS[0]);
        assert_eq!(set.prompts[0].origin, PromptOrigin::Fallback);

        let stored = store.load().unwrap().unwrap();
        assert!(stored.prompts.iter().all(|p| p.text != DEFAULT_PROMPTS[0]));
    }

    #[tokio::test]
    async fn duplicates_collapse_and_rotation_uses_captured_length() {
        let fetcher = ScriptedFetcher::new(&[Some("A"), Some("A"), Some("A")]);
        let store = MemoryStore::new();

        let mut set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        assert_eq!(set.prompts.len(), 1);
        assert_eq!(set.cycle(), "A");
        assert_eq!(set.cycle(), "A");
    }

    #[tokio::test]
    async fn existing_entry_for_today_is_returned_unchanged() {
        let store = MemoryStore::new();
        let mut existing = DailyPromptSet::new(day_key(today()));
        existing.prompts.push(DailyPrompt {
            text: "cached".to_string(),
            origin: PromptOrigin::Ai,
        });
        existing.cursor = 0;
        store.save(&existing).unwrap();

        // No scripted replies: any fetch attempt would produce a fallback
        // slot, so an unchanged result proves the cache hit short-circuits.
        let fetcher = ScriptedFetcher::new(&[]);
        let set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        assert_eq!(set, existing);
    }

    #[tokio::test]
    async fn entry_from_another_day_is_treated_as_absent() {
        let store = MemoryStore::new();
        let mut yesterday = DailyPromptSet::new("2026-08-29");
        yesterday.prompts.push(DailyPrompt {
            text: "old".to_string(),
            origin: PromptOrigin::Ai,
        });
        store.save(&yesterday).unwrap();

        let fetcher = ScriptedFetcher::new(&[Some("fresh"), Some("newer"), Some("newest")]);
        let set = get_or_fetch(today(), &fetcher, &store, Duration::ZERO).await;

        assert_eq!(set.date, "2026-08-30");
        assert!(set.prompts.iter().all(|p| p.text != "old"));
    }

    #[test]
    fn empty_set_cycles_to_first_default() {
        let mut set = DailyPromptSet::new("2026-08-30");
        assert!(set.is_empty());
        assert_eq!(set.cycle(), DEFAULT_PROMPTS[0]);
        assert_eq!(set.cursor, 0);
    }

    #[test]
    fn stale_cursor_is_repaired_on_cycle() {
        let mut set = DailyPromptSet::new("2026-08-30");
        set.prompts.push(DailyPrompt {
            text: "only".to_string(),
            origin: PromptOrigin::Ai,
        });
        set.cursor = 7;
        assert_eq!(set.cycle(), "only");
        assert_eq!(set.cursor, 0);
    }
}
