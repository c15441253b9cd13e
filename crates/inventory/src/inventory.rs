use crate::item::Item;

/// Advance every item in `items` by one simulated day, in order.
///
/// Items share no state; each one only reads and writes its own fields.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.advance_one_day();
    }
}

/// The shop's stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One item per line, in stock order.
impl core::fmt::Display for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use gildedrose_core::{QUALITY_MAX, QUALITY_MIN};
    use proptest::prelude::*;

    fn sample_stock() -> Inventory {
        Inventory::new(vec![
            Item::standard("cake", 20, 40),
            Item::appreciating("wine", 20, 40),
            Item::permanent("pillow", 20, 40),
            Item::timed_event("concert", 2, 40),
            Item::accelerated("genie", 8, 40),
        ])
    }

    #[test]
    fn advance_one_day_updates_every_item_in_place() {
        let mut inventory = sample_stock();
        inventory.advance_one_day();

        let state: Vec<(i64, i64)> = inventory
            .iter()
            .map(|i| (i.days_to_sell(), i.quality()))
            .collect();
        assert_eq!(state, vec![(19, 39), (19, 41), (20, 40), (1, 43), (7, 38)]);
    }

    #[test]
    fn free_function_matches_inventory_method() {
        let mut items = sample_stock().into_items();
        advance_one_day(&mut items);

        let mut inventory = sample_stock();
        inventory.advance_one_day();

        assert_eq!(items, inventory.into_items());
    }

    #[test]
    fn advance_days_repeats_the_daily_update() {
        let mut stepped = sample_stock();
        for _ in 0..7 {
            stepped.advance_one_day();
        }

        let mut jumped = sample_stock();
        jumped.advance_days(7);

        assert_eq!(stepped, jumped);
    }

    #[test]
    fn advance_zero_days_is_a_no_op() {
        let mut inventory = sample_stock();
        inventory.advance_days(0);
        assert_eq!(inventory, sample_stock());
    }

    #[test]
    fn empty_inventory_is_fine() {
        let mut inventory = Inventory::default();
        inventory.advance_one_day();
        assert!(inventory.is_empty());
        assert_eq!(inventory.to_string(), "");
    }

    #[test]
    fn display_lists_items_in_order() {
        let inventory: Inventory = vec![
            Item::standard("cake", 20, 40),
            Item::permanent("pillow", 0, 80),
        ]
        .into_iter()
        .collect();
        assert_eq!(inventory.to_string(), "cake, 20, 40\npillow, 0, 80\n");
        assert_eq!(inventory.len(), 2);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        ("[a-z]{1,12}", -30i64..30, QUALITY_MIN..=QUALITY_MAX, arb_category())
            .prop_map(|(name, days, quality, category)| Item::new(name, days, quality, category))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: quality stays within bounds after any number of days.
        #[test]
        fn quality_stays_in_bounds(
            items in prop::collection::vec(arb_item(), 0..20),
            days in 1u32..60
        ) {
            let mut inventory = Inventory::new(items);
            for _ in 0..days {
                inventory.advance_one_day();
                for item in &inventory {
                    prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&item.quality()), "{item}");
                }
            }
        }

        /// Property: any changing category is clamped on its first update, even
        /// from an out-of-range starting quality.
        #[test]
        fn first_update_clamps_out_of_range_quality(
            quality in -1_000i64..1_000,
            days in -30i64..30,
            category in arb_category()
        ) {
            prop_assume!(category != Category::Permanent);
            let mut item = Item::new("x", days, quality, category);
            item.advance_one_day();
            prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&item.quality()));
        }

        /// Property: permanent items never change.
        #[test]
        fn permanent_items_never_change(
            days in any::<i64>(),
            quality in any::<i64>(),
            steps in 0u32..100
        ) {
            let mut inventory = Inventory::new(vec![Item::permanent("pillow", days, quality)]);
            inventory.advance_days(steps);
            prop_assert_eq!(inventory.items()[0].days_to_sell(), days);
            prop_assert_eq!(inventory.items()[0].quality(), quality);
        }

        /// Property: appreciating and timed-event quality never falls, except
        /// for the timed-event collapse to zero.
        #[test]
        fn rising_categories_only_fall_on_collapse(
            days in -30i64..30,
            quality in QUALITY_MIN..=QUALITY_MAX,
            rising in prop::sample::select(vec![Category::Appreciating, Category::TimedEvent]),
            steps in 1u32..60
        ) {
            let mut item = Item::new("x", days, quality, rising);
            for _ in 0..steps {
                let before = item.quality();
                item.advance_one_day();
                let collapsed = rising == Category::TimedEvent
                    && item.days_to_sell() < 0
                    && item.quality() == 0;
                prop_assert!(item.quality() >= before || collapsed);
            }
        }

        /// Property: an item's result does not depend on its neighbours.
        #[test]
        fn items_update_independently(
            items in prop::collection::vec(arb_item(), 1..20),
            days in 1u32..30
        ) {
            let mut together = Inventory::new(items.clone());
            together.advance_days(days);

            for (alone, updated) in items.into_iter().zip(together.iter()) {
                let mut solo = Inventory::new(vec![alone]);
                solo.advance_days(days);
                prop_assert_eq!(&solo.items()[0], updated);
            }
        }

        /// Property: the daily update is deterministic.
        #[test]
        fn advance_is_deterministic(items in prop::collection::vec(arb_item(), 0..20)) {
            let mut a = Inventory::new(items.clone());
            let mut b = Inventory::new(items);
            a.advance_one_day();
            b.advance_one_day();
            prop_assert_eq!(a, b);
        }
    }
}
