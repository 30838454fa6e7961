//! Documentation topic lookup with a time-bounded response cache.
//!
//! Entries expire after a fixed TTL (one hour by default) and are never
//! evicted proactively; a caller may clear the cache wholesale. The clock is
//! injected so expiry is testable without sleeping.

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub const SHOPIFY_DEV_BASE_URL: &str = "https://shopify.dev";

pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTopic {
    pub slug: &'static str,
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TOPICS: &[DocTopic] = &[
    DocTopic {
        slug: "graphql",
        url: "/api/graphql",
        title: "GraphQL API",
        description: "Shopify GraphQL API documentation",
    },
    DocTopic {
        slug: "polaris",
        url: "/design-system",
        title: "Polaris Design System",
        description: "Shopify design system components",
    },
    DocTopic {
        slug: "app bridge",
        url: "/app-bridge",
        title: "App Bridge",
        description: "Embedded app framework",
    },
    DocTopic {
        slug: "webhooks",
        url: "/api/webhooks",
        title: "Webhooks",
        description: "Shopify webhook documentation",
    },
    DocTopic {
        slug: "oauth",
        url: "/api/authentication",
        title: "OAuth Authentication",
        description: "Shopify OAuth authentication",
    },
    DocTopic {
        slug: "admin api",
        url: "/api/admin",
        title: "Admin API",
        description: "Shopify Admin API documentation",
    },
    DocTopic {
        slug: "storefront api",
        url: "/api/storefront",
        title: "Storefront API",
        description: "Shopify Storefront API",
    },
    DocTopic {
        slug: "app development",
        url: "/apps",
        title: "App Development",
        description: "Shopify app development guides",
    },
    DocTopic {
        slug: "themes",
        url: "/themes",
        title: "Theme Development",
        description: "Shopify theme development",
    },
    DocTopic {
        slug: "liquid",
        url: "/docs/api/liquid",
        title: "Liquid Template Language",
        description: "Shopify Liquid documentation",
    },
];

/// TTL cache over the topic table. Single logical thread of control, so no
/// locking; &mut is enough.
pub struct DocsCache<C: Clock = SystemClock> {
    clock: C,
    ttl: Duration,
    entries: HashMap<String, (DocTopic, Instant)>,
}

impl DocsCache<SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<C: Clock> DocsCache<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self { clock, ttl, entries: HashMap::new() }
    }

    /// A hit only while the entry is younger than the TTL. Expired entries
    /// stay in the map until overwritten or cleared.
    pub fn get(&self, key: &str) -> Option<&DocTopic> {
        let (topic, inserted_at) = self.entries.get(key)?;
        if self.clock.now().duration_since(*inserted_at) < self.ttl {
            Some(topic)
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, topic: DocTopic) {
        let now = self.clock.now();
        self.entries.insert(key.into(), (topic, now));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cached lookup into the topic table, keyed on the lowercased query.
    pub fn lookup(&mut self, topic: &str) -> Option<DocTopic> {
        let key = topic.trim().to_lowercase();
        if let Some(hit) = self.get(&key) {
            return Some(hit.clone());
        }
        let found = TOPICS.iter().find(|t| t.slug == key)?.clone();
        self.insert(key, found.clone());
        Some(found)
    }
}
