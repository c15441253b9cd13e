//! Quality bounds.
//!
//! Every rule that changes an item's quality moves it through [`raise_quality`]
//! or [`lower_quality`], so the result always lands in
//! `[QUALITY_MIN, QUALITY_MAX]`.

/// Lowest quality any update can produce.
pub const QUALITY_MIN: i64 = 0;

/// Highest quality any update can produce.
pub const QUALITY_MAX: i64 = 50;

/// Raise `quality` by `amount`, then clamp into `[QUALITY_MIN, QUALITY_MAX]`.
///
/// A start below the floor that is still negative after the raise lands on
/// the floor; a start above the ceiling lands on the ceiling.
pub fn raise_quality(quality: i64, amount: i64) -> i64 {
    quality.saturating_add(amount).clamp(QUALITY_MIN, QUALITY_MAX)
}

/// Lower `quality` by `amount`, then clamp into `[QUALITY_MIN, QUALITY_MAX]`.
pub fn lower_quality(quality: i64, amount: i64) -> i64 {
    quality.saturating_sub(amount).clamp(QUALITY_MIN, QUALITY_MAX)
}
