use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::IoError;

// Dense array indexed by symbol id rather than a HashMap.
pub struct SymbolDictionary {
    names: Vec<String>,
}

impl SymbolDictionary {
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let raw = fs::read_to_string(path)?;
        let by_id: HashMap<i32, String> = serde_json::from_str(&raw)?;
        let max_id = by_id.keys().copied().max();
        let mut names = match max_id {
            Some(max_id) if max_id >= 0 => vec![String::new(); max_id as usize + 1],
            _ => Vec::new(),
        };
        for (id, name) in by_id {
            if id >= 0 {
                names[id as usize] = name;
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, symbol: i32) -> &str {
        usize::try_from(symbol)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(|s| s.as_str())
            .unwrap_or("UNKNOWN")
    }
}
