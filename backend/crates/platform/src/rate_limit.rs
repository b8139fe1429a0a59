//! Rate Limiting Infrastructure
//!
//! Storage abstraction plus a process-local sliding-window implementation.
//! Counters live in memory and reset when the process restarts.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Sliding window length
    pub window: Duration,
    /// Upper bound on distinct keys held in memory
    pub max_tracked_keys: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
            max_tracked_keys: 10_000,
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            ..Self::default()
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Requests left in the current window after this one
    pub remaining: u32,
    /// When the oldest counted request leaves the window (Unix ms)
    pub reset_at_ms: i64,
    /// Seconds until another request would be allowed (0 when allowed)
    pub retry_after_secs: u64,
}

#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("Rate limit store lock poisoned")]
    LockPoisoned,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Record a request for `key` if it is within the limit.
    /// Rejected requests are not recorded.
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;
}

#[derive(Debug, Default)]
struct ClientWindow {
    hits: VecDeque<i64>,
    last_seen_ms: i64,
}

impl ClientWindow {
    fn evict_before(&mut self, window_start_ms: i64) {
        while self.hits.front().is_some_and(|&t| t <= window_start_ms) {
            self.hits.pop_front();
        }
    }
}

/// Process-local sliding-window rate limiter
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateLimitStore {
    windows: Arc<Mutex<HashMap<String, ClientWindow>>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic core of [`RateLimitStore::check_and_increment`]
    pub fn check_and_increment_at(
        &self,
        key: &str,
        config: &RateLimitConfig,
        now_ms: i64,
    ) -> Result<RateLimitResult, RateLimitError> {
        let window_ms = config.window_ms();
        let window_start_ms = now_ms - window_ms;

        let mut windows = self
            .windows
            .lock()
            .map_err(|_| RateLimitError::LockPoisoned)?;

        let capacity = config.max_tracked_keys.max(1);
        if !windows.contains_key(key) && windows.len() >= capacity {
            make_room(&mut windows, capacity, window_start_ms);
        }

        let window = windows.entry(key.to_string()).or_default();
        window.evict_before(window_start_ms);
        window.last_seen_ms = now_ms;

        let used = window.hits.len() as u32;
        if used >= config.max_requests {
            let reset_at_ms = window
                .hits
                .front()
                .map(|&oldest| oldest + window_ms)
                .unwrap_or(now_ms + window_ms);
            let wait_ms = (reset_at_ms - now_ms).max(0) as u64;

            return Ok(RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
                retry_after_secs: wait_ms.div_ceil(1000).max(1),
            });
        }

        window.hits.push_back(now_ms);
        let reset_at_ms = window.hits.front().copied().unwrap_or(now_ms) + window_ms;

        Ok(RateLimitResult {
            allowed: true,
            remaining: config.max_requests - used - 1,
            reset_at_ms,
            retry_after_secs: 0,
        })
    }

    /// Drop keys with no request inside the window. Returns how many were removed.
    pub fn purge_expired_at(&self, window: Duration, now_ms: i64) -> Result<usize, RateLimitError> {
        let window_start_ms = now_ms - window.as_millis() as i64;
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| RateLimitError::LockPoisoned)?;

        let before = windows.len();
        windows.retain(|_, w| w.hits.back().is_some_and(|&t| t > window_start_ms));
        Ok(before - windows.len())
    }

    pub fn purge_expired(&self, window: Duration) -> Result<usize, RateLimitError> {
        self.purge_expired_at(window, Utc::now().timestamp_millis())
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }
}

/// Free a slot: drop fully expired keys first, then the least recently seen one.
fn make_room(windows: &mut HashMap<String, ClientWindow>, capacity: usize, window_start_ms: i64) {
    windows.retain(|_, w| w.hits.back().is_some_and(|&t| t > window_start_ms));

    if windows.len() < capacity {
        return;
    }

    let oldest = windows
        .iter()
        .min_by_key(|(_, w)| w.last_seen_ms)
        .map(|(k, _)| k.clone());

    if let Some(key) = oldest {
        tracing::debug!(evicted = %key, "Rate limiter at capacity, evicting oldest client");
        windows.remove(&key);
    }
}

impl RateLimitStore for InMemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        self.check_and_increment_at(key, config, Utc::now().timestamp_millis())
    }
}
