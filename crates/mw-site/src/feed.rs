//! Randomized activity ticker
//!
//! Draws distinct messages from the activity table, stamps each with a
//! random `HH:MM`, and lists them latest first. All randomness comes from
//! the caller's RNG; a seeded RNG gives a reproducible ticker.

use std::fmt;

use mw_catalog::{builtin_activity, ActivityEntry, CatalogError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Icon for messages of an unknown kind
pub const FALLBACK_ICON: &str = "📡";

/// Icon for a message kind
#[must_use]
pub fn icon_for(kind: &str) -> &'static str {
    match kind {
        "repérage" => "🔍",
        "incident" => "💥",
        "mise à jour" => "📝",
        "alerte" => "🚨",
        "observation" => "👁️",
        _ => FALLBACK_ICON,
    }
}

/// Time of day shown on a ticker line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp {
    hour: u8,
    minute: u8,
}

impl Stamp {
    /// Stamp for `hour:minute`, `None` when out of range
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Uniformly random time of day
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hour: rng.gen_range(0..24),
            minute: rng.gen_range(0..60),
        }
    }

    /// Hour, `0..24`
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute, `0..60`
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One ticker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem<'a> {
    /// Random time of day
    pub stamp: Stamp,
    /// Icon of the entry's kind
    pub icon: &'static str,
    /// Message drawn from the table
    pub entry: &'a ActivityEntry,
}

impl fmt::Display for FeedItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} — {}", self.stamp, self.icon, self.entry.text)
    }
}

/// Ticker generator over a message table
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    entries: Vec<ActivityEntry>,
}

impl ActivityFeed {
    /// Feed over `entries`
    #[must_use]
    pub fn new(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    /// Feed over the compiled-in message table
    ///
    /// # Errors
    ///
    /// Fails only if the embedded table is broken.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(builtin_activity()?))
    }

    /// Messages available to the generator
    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Pick up to `count` distinct messages, stamp them, latest first
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<FeedItem<'_>> {
        let mut picked: Vec<&ActivityEntry> = self.entries.iter().collect();
        picked.shuffle(rng);
        picked.truncate(count);

        let mut items: Vec<FeedItem<'_>> = picked
            .into_iter()
            .map(|entry| FeedItem {
                stamp: Stamp::random(rng),
                icon: icon_for(&entry.kind),
                entry,
            })
            .collect();

        items.sort_by(|a, b| b.stamp.cmp(&a.stamp));
        tracing::debug!(requested = count, produced = items.len(), "Generated activity feed");
        items
    }
}
