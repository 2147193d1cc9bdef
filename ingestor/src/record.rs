use std::collections::VecDeque;
use std::io::Read;

use copy_match_engine::{Side, Trade};

use crate::error::IoError;

// open_ts(8) close_ts(8) duration_ms(4) lot(8) side(1) trade_id(4) symbol(4)
// account_id(4) user_id(4), packed without padding.
pub const RECORD_SIZE: usize = 8 + 8 + 4 + 8 + 1 + 4 + 4 + 4 + 4;

pub const CHUNK_RECORDS: usize = 8192;

fn decode_trade(bytes: &[u8]) -> Result<Trade, IoError> {
    debug_assert_eq!(bytes.len(), RECORD_SIZE);
    let open_ts = i64::from_le_bytes(bytes[0..8].try_into().unwrap());
    let close_ts = i64::from_le_bytes(bytes[8..16].try_into().unwrap());
    let duration_ms = i32::from_le_bytes(bytes[16..20].try_into().unwrap());
    let lot = i64::from_le_bytes(bytes[20..28].try_into().unwrap());
    let side_byte = bytes[28];
    let trade_id = i32::from_le_bytes(bytes[29..33].try_into().unwrap());
    let symbol = i32::from_le_bytes(bytes[33..37].try_into().unwrap());
    let account_id = i32::from_le_bytes(bytes[37..41].try_into().unwrap());
    let user_id = i32::from_le_bytes(bytes[41..45].try_into().unwrap());

    if close_ts < open_ts {
        return Err(IoError::Corrupt(format!(
            "close_ts {close_ts} precedes open_ts {open_ts} for trade_id {trade_id}"
        )));
    }
    if lot < 0 {
        return Err(IoError::Corrupt(format!("negative lot {lot} for trade_id {trade_id}")));
    }
    let side = match side_byte {
        0 => Side::Sell,
        1 => Side::Buy,
        other => {
            return Err(IoError::Corrupt(format!(
                "invalid side byte {other} for trade_id {trade_id}, expected 0 or 1"
            )))
        }
    };

    Ok(Trade { open_ts, close_ts, duration_ms, lot, side, trade_id, symbol, account_id, user_id })
}

pub fn encode_trade(trade: &Trade, out: &mut Vec<u8>) {
    out.extend_from_slice(&trade.open_ts.to_le_bytes());
    out.extend_from_slice(&trade.close_ts.to_le_bytes());
    out.extend_from_slice(&trade.duration_ms.to_le_bytes());
    out.extend_from_slice(&trade.lot.to_le_bytes());
    out.push(match trade.side {
        Side::Sell => 0,
        Side::Buy => 1,
    });
    out.extend_from_slice(&trade.trade_id.to_le_bytes());
    out.extend_from_slice(&trade.symbol.to_le_bytes());
    out.extend_from_slice(&trade.account_id.to_le_bytes());
    out.extend_from_slice(&trade.user_id.to_le_bytes());
}

pub struct RecordReader<R> {
    inner: R,
    raw: Vec<u8>,
    queue: VecDeque<Trade>,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            raw: vec![0u8; RECORD_SIZE * CHUNK_RECORDS],
            queue: VecDeque::with_capacity(CHUNK_RECORDS),
        }
    }

    fn fill(&mut self) -> Result<(), IoError> {
        if !self.queue.is_empty() {
            return Ok(());
        }
        let mut total_read = 0usize;
        while total_read < self.raw.len() {
            let n = self.inner.read(&mut self.raw[total_read..])?;
            if n == 0 {
                break;
            }
            total_read += n;
        }
        if total_read % RECORD_SIZE != 0 {
            return Err(IoError::Corrupt(format!(
                "trailing {} bytes do not form a whole {RECORD_SIZE}-byte record",
                total_read % RECORD_SIZE
            )));
        }
        for chunk in self.raw[..total_read].chunks_exact(RECORD_SIZE) {
            self.queue.push_back(decode_trade(chunk)?);
        }
        Ok(())
    }

    pub fn next_trade(&mut self) -> Result<Option<Trade>, IoError> {
        self.fill()?;
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_trade() -> Trade {
        Trade {
            open_ts: 1_700_000_000_000,
            close_ts: 1_700_000_010_000,
            duration_ms: 10_000,
            lot: 100_000_000,
            side: Side::Buy,
            trade_id: 7,
            symbol: 3,
            account_id: 42,
            user_id: 1001,
        }
    }

    #[test]
    fn round_trips_a_single_record() {
        let trade = sample_trade();
        let mut bytes = Vec::new();
        encode_trade(&trade, &mut bytes);
        assert_eq!(bytes.len(), RECORD_SIZE);
        let decoded = decode_trade(&bytes).unwrap();
        assert_eq!(decoded, trade);
    }

    #[test]
    fn reads_a_multi_chunk_stream() {
        let trades: Vec<Trade> = (0..(CHUNK_RECORDS as i32 * 2 + 5))
            .map(|i| Trade {
                open_ts: i as i64 * 10,
                close_ts: i as i64 * 10 + 1,
                duration_ms: 1,
                lot: 1_000_000,
                side: if i % 2 == 0 { Side::Buy } else { Side::Sell },
                trade_id: i,
                symbol: i % 5,
                account_id: i,
                user_id: i % 2,
            })
            .collect();
        let mut bytes = Vec::new();
        for t in &trades {
            encode_trade(t, &mut bytes);
        }
        let mut reader = RecordReader::new(Cursor::new(bytes));
        let mut decoded = Vec::new();
        while let Some(t) = reader.next_trade().unwrap() {
            decoded.push(t);
        }
        assert_eq!(decoded, trades);
    }

    #[test]
    fn rejects_truncated_trailing_record() {
        let mut bytes = Vec::new();
        encode_trade(&sample_trade(), &mut bytes);
        bytes.truncate(RECORD_SIZE - 1);
        let mut reader = RecordReader::new(Cursor::new(bytes));
        assert!(reader.next_trade().is_err());
    }

    #[test]
    fn rejects_invalid_side_byte() {
        let mut bytes = vec![0u8; RECORD_SIZE];
        bytes[28] = 7;
        let err = decode_trade(&bytes).unwrap_err();
        assert!(matches!(err, IoError::Corrupt(_)));
    }

    #[test]
    fn rejects_negative_lot() {
        let mut bytes = vec![0u8; RECORD_SIZE];
        bytes[20..28].copy_from_slice(&(-1i64).to_le_bytes());
        let err = decode_trade(&bytes).unwrap_err();
        assert!(matches!(err, IoError::Corrupt(_)));
    }

    #[test]
    fn rejects_close_before_open() {
        let mut bytes = vec![0u8; RECORD_SIZE];
        bytes[0..8].copy_from_slice(&100i64.to_le_bytes());
        bytes[8..16].copy_from_slice(&50i64.to_le_bytes());
        let err = decode_trade(&bytes).unwrap_err();
        assert!(matches!(err, IoError::Corrupt(_)));
    }
}
