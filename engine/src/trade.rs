// 5-minute window bounding parent/child separation and eviction.
pub const WINDOW_MS: i64 = 5 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    pub open_ts: i64,
    pub close_ts: i64,
    pub duration_ms: i32,
    pub lot: i64,
    pub side: Side,
    pub trade_id: i32,
    pub symbol: i32,
    pub account_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    Copy,
    Reversal,
    PartialCopy,
}

pub const ALL_KINDS: [PatternKind; 3] =
    [PatternKind::Copy, PatternKind::Reversal, PatternKind::PartialCopy];
