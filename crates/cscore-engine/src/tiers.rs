//! Breakpoint tier tables.
//!
//! Every tiered conversion in the engine goes through a [`TierLadder`]: an
//! ordered list of `(bound, score)` pairs forming a total, non-overlapping
//! partition of the reals. Keeping them as data instead of `if` chains makes
//! each ladder independently testable.

/// Which side of a bound a value must fall on to take its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierDirection {
    /// First tier whose bound the value meets or exceeds wins.
    /// Bounds must be strictly decreasing; the last bound should be
    /// `f64::NEG_INFINITY` to close the partition.
    AtLeast,
    /// First tier whose bound the value is at or below wins.
    /// Bounds must be strictly increasing; the last bound should be
    /// `f64::INFINITY` to close the partition.
    AtMost,
}

#[derive(Debug, Clone, Copy)]
pub struct TierLadder {
    pub direction: TierDirection,
    pub tiers: &'static [(f64, f64)],
}

impl TierLadder {
    /// Map a value onto its tier score.
    ///
    /// Total over all finite inputs by construction; the closing
    /// infinity-bound tier catches everything the earlier tiers do not.
    #[must_use]
    pub fn score(&self, value: f64) -> f64 {
        for &(bound, score) in self.tiers {
            let hit = match self.direction {
                TierDirection::AtLeast => value >= bound,
                TierDirection::AtMost => value <= bound,
            };
            if hit {
                return score;
            }
        }
        // Unreachable when the ladder is closed with an infinity bound;
        // return the last tier's score as the safety net.
        self.tiers.last().map_or(0.0, |&(_, score)| score)
    }
}

/// Follower growth-rate (percent over the window) to score.
pub const GROWTH_TREND: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[
        (30.0, 10.0),
        (25.0, 8.33),
        (20.0, 6.67),
        (15.0, 5.83),
        (10.0, 5.0),
        (5.0, 4.17),
        (0.0, 3.33),
        (f64::NEG_INFINITY, 0.0),
    ],
};

/// Posts-per-week cadence to score.
pub const POSTING_CADENCE: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[
        (6.0, 10.0),
        (4.0, 7.86),
        (2.0, 5.71),
        (f64::NEG_INFINITY, 2.86),
    ],
};

/// Predicted per-view payout to a raw 5–30 trust value (divided by 3 at the
/// call site to land on the 0–10 scale).
pub const VIEW_PAYOUT: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[
        (3000.0, 30.0),
        (1500.0, 25.0),
        (500.0, 20.0),
        (100.0, 10.0),
        (f64::NEG_INFINITY, 5.0),
    ],
};

/// Share of posts above the window's average reach to score.
pub const TOP_POSTS: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[
        (45.0, 10.0),
        (30.0, 8.0),
        (15.0, 6.0),
        (f64::NEG_INFINITY, 3.0),
    ],
};

/// Share of posts below the window's average reach to score. A small share
/// of underperformers is healthy, so this ladder runs the other way.
pub const WORST_POSTS: TierLadder = TierLadder {
    direction: TierDirection::AtMost,
    tiers: &[(15.0, 10.0), (30.0, 8.0), (45.0, 6.0), (f64::INFINITY, 3.0)],
};

/// Reel share of recent posts to a raw 0–5 mix value (scaled ×2 at the call
/// site). Deliberately non-monotonic: a 60–90% reel share beats both
/// extremes -- total over-reliance on one format is penalized.
pub const REEL_MIX_RAW: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[(90.0, 2.0), (60.0, 5.0), (f64::NEG_INFINITY, 3.0)],
};

/// Caption positive-sentiment percentage to score.
pub const SENTIMENT_BANDS: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[
        (75.0, 10.0),
        (50.0, 8.0),
        (25.0, 6.0),
        (f64::NEG_INFINITY, 4.0),
    ],
};

/// Count of detected niches matching the campaign allow-list to score.
pub const NICHE_MATCHES: TierLadder = TierLadder {
    direction: TierDirection::AtLeast,
    tiers: &[(5.0, 10.0), (2.0, 8.0), (1.0, 6.0), (f64::NEG_INFINITY, 3.0)],
};
