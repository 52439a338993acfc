use std::time::Duration;

use rand::Rng;

/// Replies served by the mock provider
pub const CANNED_REPLIES: [&str; 10] = [
    "That's an interesting point. Can you elaborate further?",
    "I understand. Let me think about that for a moment.",
    "Your perspective is intriguing. Have you considered alternative viewpoints?",
    "That's a complex topic. There are several factors to consider.",
    "I see where you're coming from. Let's explore this idea further.",
    "Your question touches on some fundamental concepts. Let's break it down.",
    "That's a great observation. How do you think this relates to [topic]?",
    "I'm curious to hear more about your thoughts on this matter.",
    "Interesting point. In my analysis, there are pros and cons to consider.",
    "Your input is valuable. Let's dive deeper into this subject.",
];

/// Pick one reply uniformly at random
pub fn choose_reply<'a, R: Rng + ?Sized>(rng: &mut R, catalog: &[&'a str]) -> Option<&'a str> {
    if catalog.is_empty() {
        return None;
    }

    Some(catalog[rng.gen_range(0..catalog.len())])
}

/// Inclusive window the simulated latency is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyWindow {
    min: Duration,
    max: Duration,
}

impl LatencyWindow {
    /// Bounds are reordered if given the wrong way round
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            return self.min;
        }

        let millis = rng.gen_range(self.min.as_millis() as u64..=self.max.as_millis() as u64);
        Duration::from_millis(millis)
    }
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self::from_millis(500, 2000)
    }
}
