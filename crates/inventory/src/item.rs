use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A stocked item.
///
/// Construction performs no validation: a quality outside `[0, 50]` is kept
/// as given until the first update that touches quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    days_to_sell: i64,
    quality: i64,
    category: Category,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        days_to_sell: i64,
        quality: i64,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            days_to_sell,
            quality,
            category,
        }
    }

    pub fn standard(name: impl Into<String>, days_to_sell: i64, quality: i64) -> Self {
        Self::new(name, days_to_sell, quality, Category::Standard)
    }

    pub fn appreciating(name: impl Into<String>, days_to_sell: i64, quality: i64) -> Self {
        Self::new(name, days_to_sell, quality, Category::Appreciating)
    }

    pub fn permanent(name: impl Into<String>, days_to_sell: i64, quality: i64) -> Self {
        Self::new(name, days_to_sell, quality, Category::Permanent)
    }

    pub fn timed_event(name: impl Into<String>, days_to_sell: i64, quality: i64) -> Self {
        Self::new(name, days_to_sell, quality, Category::TimedEvent)
    }

    pub fn accelerated(name: impl Into<String>, days_to_sell: i64, quality: i64) -> Self {
        Self::new(name, days_to_sell, quality, Category::Accelerated)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days_to_sell(&self) -> i64 {
        self.days_to_sell
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Apply one simulated day: advance the sell date, then adjust quality
    /// against the new sell date.
    pub fn advance_one_day(&mut self) {
        self.days_to_sell = self.category.advance_day(self.days_to_sell);
        self.quality = self.category.adjust_quality(self.days_to_sell, self.quality);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.days_to_sell, self.quality)
    }
}
