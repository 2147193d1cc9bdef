use std::collections::VecDeque;

use crate::batch::{Batch, Child};
use crate::trade::{PatternKind, Trade};

// VecDeque, not an intrusive linked list: push-back/pop-front are both
// O(1) and contiguous storage has better cache behavior.
#[derive(Debug, Default)]
pub struct WindowIndex {
    batches: VecDeque<Batch>,
}

impl WindowIndex {
    pub fn new() -> Self {
        Self { batches: VecDeque::new() }
    }

    // parent.open_ts is non-decreasing head to tail, so the first surviving
    // batch means every later one survives too.
    pub fn advance(&mut self, now_ts: i64, window_ms: i64) -> Vec<Batch> {
        let mut evicted = Vec::new();
        while let Some(b) = self.batches.front() {
            if now_ts - b.parent.open_ts > window_ms {
                evicted.push(self.batches.pop_front().expect("front checked above"));
            } else {
                break;
            }
        }
        evicted
    }

    // Oldest matching parent wins; matches returns Some(violation) on a hit.
    pub fn try_attach(&mut self, child: Trade, mut matches: impl FnMut(&Trade) -> Option<bool>) -> bool {
        for batch in self.batches.iter_mut() {
            if let Some(violation) = matches(&batch.parent) {
                batch.children.push(Child { trade: child, violation });
                return true;
            }
        }
        false
    }

    pub fn open(&mut self, parent: Trade, kind: PatternKind) {
        self.batches.push_back(Batch::new(parent, kind));
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    #[cfg(test)]
    pub fn parent_open_ts(&self) -> Vec<i64> {
        self.batches.iter().map(|b| b.parent.open_ts).collect()
    }
}
