use std::fs::File;
use std::path::Path;

use copy_match_engine::{Batch, PatternKind};

use crate::dictionary::SymbolDictionary;
use crate::error::IoError;

fn kind_name(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::Copy => "COPY",
        PatternKind::Reversal => "REVERSAL",
        PatternKind::PartialCopy => "PARTIAL_COPY",
    }
}

#[derive(serde::Serialize)]
struct Row<'a> {
    kind: &'static str,
    parent_trade_id: i32,
    child_trade_id: i32,
    parent_account_id: i32,
    child_account_id: i32,
    parent_user_id: i32,
    child_user_id: i32,
    symbol: &'a str,
    parent_open_ts: i64,
    child_open_ts: i64,
    parent_close_ts: i64,
    child_close_ts: i64,
    parent_lot: i64,
    child_lot: i64,
    violation: bool,
}

pub struct ReportWriters {
    copy: csv::Writer<File>,
    reversal: csv::Writer<File>,
    partial_copy: csv::Writer<File>,
}

impl ReportWriters {
    pub fn create(out_dir: &Path) -> Result<Self, IoError> {
        Ok(Self {
            copy: csv::Writer::from_path(out_dir.join("copy_trades.csv"))?,
            reversal: csv::Writer::from_path(out_dir.join("reversal_trades.csv"))?,
            partial_copy: csv::Writer::from_path(out_dir.join("partial_copy_trades.csv"))?,
        })
    }

    pub fn write_batch(&mut self, batch: &Batch, dict: &SymbolDictionary) -> Result<(), IoError> {
        if batch.children.is_empty() {
            return Ok(());
        }
        let symbol = dict.name(batch.parent.symbol);
        let writer = match batch.kind {
            PatternKind::Copy => &mut self.copy,
            PatternKind::Reversal => &mut self.reversal,
            PatternKind::PartialCopy => &mut self.partial_copy,
        };
        for child in &batch.children {
            writer.serialize(Row {
                kind: kind_name(batch.kind),
                parent_trade_id: batch.parent.trade_id,
                child_trade_id: child.trade.trade_id,
                parent_account_id: batch.parent.account_id,
                child_account_id: child.trade.account_id,
                parent_user_id: batch.parent.user_id,
                child_user_id: child.trade.user_id,
                symbol,
                parent_open_ts: batch.parent.open_ts,
                child_open_ts: child.trade.open_ts,
                parent_close_ts: batch.parent.close_ts,
                child_close_ts: child.trade.close_ts,
                parent_lot: batch.parent.lot,
                child_lot: child.trade.lot,
                violation: child.violation,
            })?;
        }
        Ok(())
    }

    pub fn flush_all(&mut self) -> Result<(), IoError> {
        self.copy.flush()?;
        self.reversal.flush()?;
        self.partial_copy.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copy_match_engine::{Child, Side, Trade};

    fn trade(trade_id: i32) -> Trade {
        Trade {
            open_ts: 0,
            close_ts: 10,
            duration_ms: 10,
            lot: 100_000_000,
            side: Side::Buy,
            trade_id,
            symbol: 2,
            account_id: trade_id,
            user_id: 42,
        }
    }

    #[test]
    fn writes_one_row_per_child_to_the_matching_stream() {
        let dir = tempfile::tempdir().unwrap();
        let mut writers = ReportWriters::create(dir.path()).unwrap();
        let dict = {
            let path = dir.path().join("symbols.json");
            std::fs::write(&path, r#"{"2": "EURUSD"}"#).unwrap();
            SymbolDictionary::load(&path).unwrap()
        };

        let batch = Batch {
            parent: trade(1),
            kind: PatternKind::Copy,
            children: vec![Child { trade: trade(2), violation: false }, Child { trade: trade(3), violation: true }],
        };
        writers.write_batch(&batch, &dict).unwrap();
        writers.flush_all().unwrap();

        let contents = std::fs::read_to_string(dir.path().join("copy_trades.csv")).unwrap();
        assert_eq!(contents.lines().count(), 3); // header + 2 rows
        assert!(contents.contains("EURUSD"));
        assert!(contents.contains("COPY"));

        let reversal_contents = std::fs::read_to_string(dir.path().join("reversal_trades.csv")).unwrap();
        assert_eq!(reversal_contents.lines().count(), 1); // header only
    }
}
