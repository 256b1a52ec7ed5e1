// Primitive types shared across the banners bounded context.
//
// Purpose
// - Name the identifier type once so adapters and use cases agree on it.
// - Own the monotonic identifier sequence used by stores.

pub type BannerId = i64;

/// Identifier carried by a banner that has not been stored yet.
pub const UNASSIGNED_ID: BannerId = 0;

/// Monotonically increasing id source. Never yields `UNASSIGNED_ID` and
/// never hands out the same value twice, even after records are removed.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: BannerId,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> BannerId {
        self.last += 1;
        self.last
    }

    pub fn last(&self) -> BannerId {
        self.last
    }
}
