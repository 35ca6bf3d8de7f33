use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier handed out by arenas (stream tables, device lists).
///
/// Stored as `index + 1` so `Option<Id>` stays the size of `Id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Create an Id for the next free slot of an arena of `len` entries.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` entries.
    pub fn from_slot(len: usize) -> Self {
        let index = u32::try_from(len)
            .ok()
            .filter(|&i| i < u32::MAX)
            .expect("arena exceeds u32 id space");
        Self::from_index(index)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// 0-based index as a `usize`, for slice access.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type StreamId = Id;
pub type DeviceId = Id;
