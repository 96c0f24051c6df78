//! Cache abstraction used by the rate providers

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait Cache<K, V>: Send + Sync {
    /// Returns the value for `key` unless it is missing or expired.
    async fn get(&self, key: &K) -> Option<V>;

    /// Stores `value`, expiring it after `ttl` when one is given.
    async fn put(&self, key: K, value: V, ttl: Option<Duration>);

    async fn remove(&self, key: &K);

    async fn clear(&self);
}
