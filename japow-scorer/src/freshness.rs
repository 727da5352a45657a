//! Recency discount applied to each day of the scored window.
//!
//! Near-term forecast days are more trustworthy and more actionable than
//! far-out ones, so their contributions count for more.

const FRESHNESS: [f64; 7] = [1.0, 1.0, 0.9, 0.8, 0.6, 0.5, 0.4];

/// Factor applied to days beyond the end of the freshness table.
pub const STALE_FRESHNESS: f64 = 0.3;

/// Return the freshness factor for a day's position in the scored window.
///
/// # Examples
/// ```
/// use japow_scorer::freshness;
///
/// assert_eq!(freshness(0), 1.0);
/// assert_eq!(freshness(3), 0.8);
/// assert_eq!(freshness(30), 0.3);
/// ```
#[must_use]
pub fn freshness(position: usize) -> f64 {
    FRESHNESS.get(position).copied().unwrap_or(STALE_FRESHNESS)
}
