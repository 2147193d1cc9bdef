use crate::trade::{PatternKind, Trade};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Child {
    pub trade: Trade,
    pub violation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    pub parent: Trade,
    pub kind: PatternKind,
    pub children: Vec<Child>,
}

impl Batch {
    pub fn new(parent: Trade, kind: PatternKind) -> Self {
        Self { parent, kind, children: Vec::new() }
    }
}
