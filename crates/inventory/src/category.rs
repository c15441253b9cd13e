use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, QUALITY_MIN, lower_quality, raise_quality};

/// Item category: selects which day-advance and quality rules apply.
///
/// The set is closed. Former names are accepted when parsing or deserializing
/// so older stock lists keep loading; both paths go through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    /// Ordinary goods; degrade daily, twice as fast once past the sell date.
    Standard,
    /// Improve with age.
    Appreciating,
    /// Never change.
    Permanent,
    /// Rise in tiers as the event approaches, worthless once it has passed.
    TimedEvent,
    /// Degrade at double the standard rate.
    Accelerated,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Appreciating,
        Category::Permanent,
        Category::TimedEvent,
        Category::Accelerated,
    ];

    /// Canonical lowercase tag (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Appreciating => "appreciating",
            Category::Permanent => "permanent",
            Category::TimedEvent => "timed_event",
            Category::Accelerated => "accelerated",
        }
    }

    /// Days-to-sell after one simulated day.
    pub fn advance_day(self, days_to_sell: i64) -> i64 {
        match self {
            Category::Permanent => days_to_sell,
            Category::Standard
            | Category::Appreciating
            | Category::TimedEvent
            | Category::Accelerated => days_to_sell.saturating_sub(1),
        }
    }

    /// Quality after one simulated day.
    ///
    /// `days_to_sell` must be the value already returned by
    /// [`Category::advance_day`] for the same day.
    pub fn adjust_quality(self, days_to_sell: i64, quality: i64) -> i64 {
        match self {
            Category::Standard => {
                if days_to_sell > 0 {
                    lower_quality(quality, 1)
                } else {
                    lower_quality(quality, 2)
                }
            }
            Category::Appreciating => raise_quality(quality, 1),
            Category::Permanent => quality,
            Category::TimedEvent => match days_to_sell {
                d if d < 0 => QUALITY_MIN,
                d if d <= 5 => raise_quality(quality, 3),
                d if d <= 10 => raise_quality(quality, 2),
                _ => raise_quality(quality, 1),
            },
            // No extra decay past the sell date, unlike Standard.
            Category::Accelerated => lower_quality(quality, 2),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(DomainError::validation("category tag cannot be empty"));
        }

        match tag.to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(Category::Standard),
            "appreciating" | "aged" => Ok(Category::Appreciating),
            "permanent" | "legendary" => Ok(Category::Permanent),
            "timed_event" | "ticket" => Ok(Category::TimedEvent),
            "accelerated" | "conjured" => Ok(Category::Accelerated),
            _ => Err(DomainError::unknown_category(tag)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
