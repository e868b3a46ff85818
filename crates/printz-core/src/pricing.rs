//! # Pricing Module
//!
//! The per-page rate table and the cost quote every job is priced with.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        How a Job Is Priced                              │
//! │                                                                         │
//! │  Customer picks settings                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rate = PaperSize.rate_cents(color)      10¢ .. 100¢ per page          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gross = rate × files × copies                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  duplex? apply 20% discount ──► total                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total frozen into PrintJob.total_cost_cents at creation                │
//! │                                                                         │
//! │  quote() is PURE: price it twice, get the same answer twice             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rate Table (cents per page)
//!
//! | Paper  | B&W | Color |
//! |--------|-----|-------|
//! | A4     | 10  | 50    |
//! | A3     | 20  | 100   |
//! | Letter | 10  | 50    |
//! | Legal  | 15  | 75    |
//!
//! Every rate is a multiple of 5 cents, which keeps the 20% duplex
//! discount exact in integer math.

use crate::money::Money;
use crate::types::{PaperSize, PrintSettings};
use crate::DUPLEX_DISCOUNT_BPS;

impl PaperSize {
    /// Per-page rate in cents for this paper size.
    ///
    /// ## Example
    /// ```rust
    /// use printz_core::types::PaperSize;
    ///
    /// assert_eq!(PaperSize::A4.rate_cents(false), 10);  // b&w
    /// assert_eq!(PaperSize::A3.rate_cents(true), 100);  // color
    /// ```
    pub const fn rate_cents(&self, color: bool) -> i64 {
        match (self, color) {
            (PaperSize::A4, false) => 10,
            (PaperSize::A4, true) => 50,
            (PaperSize::A3, false) => 20,
            (PaperSize::A3, true) => 100,
            (PaperSize::Letter, false) => 10,
            (PaperSize::Letter, true) => 50,
            (PaperSize::Legal, false) => 15,
            (PaperSize::Legal, true) => 75,
        }
    }

    /// Per-page rate as Money.
    #[inline]
    pub fn rate(&self, color: bool) -> Money {
        Money::from_cents(self.rate_cents(color))
    }
}

/// Quotes the total cost for a job: `rate × files × copies`, minus the
/// duplex discount when double-sided.
///
/// Total over all inputs: zero files quote zero (an empty draft prices
/// cleanly even though the job store will refuse to create it).
///
/// ## Examples
/// ```rust
/// use printz_core::pricing::quote;
/// use printz_core::types::{Orientation, PaperSize, PrintSettings};
///
/// let mut settings = PrintSettings {
///     copies: 2,
///     color: false,
///     paper_size: PaperSize::A4,
///     orientation: Orientation::Portrait,
///     duplex: false,
/// };
///
/// // 3 files × 2 copies × 10¢ = $0.60
/// assert_eq!(quote(&settings, 3).cents(), 60);
///
/// // A3 color, single copy, duplex: 2 × 1 × 100¢ = $2.00, 20% off = $1.60
/// settings.copies = 1;
/// settings.color = true;
/// settings.paper_size = PaperSize::A3;
/// settings.duplex = true;
/// assert_eq!(quote(&settings, 2).cents(), 160);
/// ```
pub fn quote(settings: &PrintSettings, file_count: usize) -> Money {
    if file_count == 0 {
        return Money::zero();
    }

    let per_page = settings.paper_size.rate(settings.color);
    let gross = per_page * (file_count as i64) * (settings.copies as i64);

    if settings.duplex {
        gross.apply_percentage_discount(DUPLEX_DISCOUNT_BPS)
    } else {
        gross
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
