//! Dense index newtypes.
//!
//! Agents and exits are both numbered `0..n` in creation order, and that
//! number doubles as the position in the owning `Vec`.  Exit ids are also the
//! action space handed to policies, so keeping the two apart in the type
//! system stops an agent index from being passed where an exit is expected.

use std::fmt;

/// Declare a `u32` index newtype with `Vec` conversion helpers.
macro_rules! dense_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of the element at position `i`.
            ///
            /// # Panics
            /// If `i` does not fit in `u32`.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                match u32::try_from(i) {
                    Ok(v) => $name(v),
                    Err(_) => panic!("{} index {i} exceeds u32", stringify!($name)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

dense_id! {
    /// Index of an evacuee in the environment's agent list.
    pub struct AgentId;
}

dense_id! {
    /// Index into the environment's exit set.  This is the action space.
    pub struct ExitId;
}
