//! Fake key source and cache wiring.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use github_keys_server::cache::{CacheConfig, KeyCache, ManualClock};
use github_keys_server::{AppState, create_router};
use github_keys_source::{KeyRecord, KeySource, KeySourceError};

use super::client::TestClient;

/// Key source replaying scripted answers. `None` answers fail; once the
/// script runs out every call fails.
pub struct FakeSource {
    answers: Mutex<VecDeque<Option<Vec<String>>>>,
    calls: AtomicU32,
    delay: Duration,
}

impl FakeSource {
    pub fn new(answers: Vec<Option<Vec<&str>>>) -> Arc<Self> {
        Self::with_delay(answers, Duration::ZERO)
    }

    /// Each fetch sleeps for `delay` before answering.
    pub fn with_delay(answers: Vec<Option<Vec<&str>>>, delay: Duration) -> Arc<Self> {
        let answers = answers
            .into_iter()
            .map(|a| a.map(|keys| keys.into_iter().map(String::from).collect()))
            .collect();

        Arc::new(Self {
            answers: Mutex::new(answers),
            calls: AtomicU32::new(0),
            delay,
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeySource for FakeSource {
    async fn fetch(&self, _identity: &str) -> Result<Vec<KeyRecord>, KeySourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let answer = self.answers.lock().unwrap().pop_front().flatten();
        match answer {
            Some(keys) => Ok(keys.into_iter().map(KeyRecord::new).collect()),
            None => Err(KeySourceError::Status {
                uri: "https://api.github.test/users/octocat/keys".to_string(),
                status: 502,
            }),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub const TTL: u64 = 60;

/// Builds a cache over `source` with a manual clock starting at 1000.
pub fn cache_with(source: Arc<FakeSource>) -> (Arc<KeyCache>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000));
    let cache = Arc::new(KeyCache::with_clock(
        "octocat",
        source,
        CacheConfig { ttl_seconds: TTL },
        clock.clone(),
    ));
    (cache, clock)
}

/// Builds a test client serving keys from `source`.
pub fn client_with(source: Arc<FakeSource>) -> (TestClient, Arc<ManualClock>) {
    let (cache, clock) = cache_with(source);
    let client = TestClient::new(create_router(AppState::new(cache)));
    (client, clock)
}
