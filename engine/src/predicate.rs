use crate::trade::{PatternKind, Trade};

// Caller has already checked symbol, window, trade_id/account_id, and mode.
pub fn kind_predicate(kind: PatternKind, parent: &Trade, child: &Trade) -> bool {
    match kind {
        PatternKind::Copy => child.side == parent.side,
        PatternKind::Reversal => child.side != parent.side,
        PatternKind::PartialCopy => {
            child.side == parent.side && partial_copy_volume_match(parent.lot, child.lot)
        }
    }
}

// 70*p <= 100*c <= 130*p, widened to i128 so i64::MAX * 130 can't overflow.
pub fn partial_copy_volume_match(parent_lot: i64, child_lot: i64) -> bool {
    if parent_lot == child_lot {
        return false;
    }
    let p = i128::from(parent_lot);
    let c = i128::from(child_lot);
    70 * p <= 100 * c && 100 * c <= 130 * p
}
