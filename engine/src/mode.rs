#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModePolicy {
    A,
    B,
}

impl ModePolicy {
    // None = reject the pair outright; Some(violation) = accept, tagging
    // same-user pairs as violations.
    pub fn check(&self, parent_user: i32, child_user: i32, u1: i32, u2: i32) -> Option<bool> {
        let selected = |u: i32| u == u1 || u == u2;
        if !selected(parent_user) || !selected(child_user) {
            return None;
        }
        let same_user = parent_user == child_user;
        match self {
            ModePolicy::A => {
                if same_user {
                    None
                } else {
                    Some(false)
                }
            }
            ModePolicy::B => Some(same_user),
        }
    }
}
