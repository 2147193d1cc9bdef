use crate::batch::Batch;
use crate::error::EngineError;
use crate::mode::ModePolicy;
use crate::predicate::kind_predicate;
use crate::trade::{Trade, ALL_KINDS, WINDOW_MS};
use crate::window::WindowIndex;

pub fn prefilter(trade: &Trade, user_a: i32, user_b: i32) -> bool {
    if trade.user_id != user_a && trade.user_id != user_b {
        return false;
    }
    if trade.duration_ms <= 1000 && trade.lot < 1_000_000 {
        return false;
    }
    true
}

// One [WindowIndex; 3] per symbol, sized up front from the symbol count.
pub struct Classifier {
    indices: Vec<[WindowIndex; 3]>,
    mode: ModePolicy,
    user_a: i32,
    user_b: i32,
    last_open_ts: Option<i64>,
}

impl Classifier {
    pub fn new(num_symbols: usize, mode: ModePolicy, user_a: i32, user_b: i32) -> Self {
        let indices = (0..num_symbols)
            .map(|_| std::array::from_fn(|_| WindowIndex::new()))
            .collect();
        Self { indices, mode, user_a, user_b, last_open_ts: None }
    }

    // Expects trade.open_ts non-decreasing across calls.
    pub fn ingest(&mut self, trade: Trade, out: &mut Vec<Batch>) -> Result<(), EngineError> {
        if let Some(prev) = self.last_open_ts {
            if trade.open_ts < prev {
                return Err(EngineError::OutOfOrder { prev, got: trade.open_ts });
            }
        }
        self.last_open_ts = Some(trade.open_ts);

        let idx = usize::try_from(trade.symbol)
            .ok()
            .filter(|&i| i < self.indices.len())
            .ok_or(EngineError::SymbolOutOfRange { symbol: trade.symbol, num_symbols: self.indices.len() })?;

        let mode = self.mode;
        let (user_a, user_b) = (self.user_a, self.user_b);
        for (slot, kind) in self.indices[idx].iter_mut().zip(ALL_KINDS) {
            out.extend(slot.advance(trade.open_ts, WINDOW_MS));
            let attached = slot.try_attach(trade, |parent| {
                if parent.trade_id == trade.trade_id || parent.account_id == trade.account_id {
                    return None;
                }
                let violation = mode.check(parent.user_id, trade.user_id, user_a, user_b)?;
                if !kind_predicate(kind, parent, &trade) {
                    return None;
                }
                Some(violation)
            });
            if !attached {
                slot.open(trade, kind);
            }
        }
        Ok(())
    }

    // advance(+infinity): every open batch is past its window once the
    // stream ends.
    pub fn finish(&mut self, out: &mut Vec<Batch>) {
        for symbol_indices in self.indices.iter_mut() {
            for slot in symbol_indices.iter_mut() {
                out.extend(slot.advance(i64::MAX, WINDOW_MS));
            }
        }
    }
}
