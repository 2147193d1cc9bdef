#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("trade open_ts {got} precedes previously observed open_ts {prev}")]
    OutOfOrder { prev: i64, got: i64 },
    #[error("symbol id {symbol} is outside the configured dense range 0..{num_symbols}")]
    SymbolOutOfRange { symbol: i32, num_symbols: usize },
}
