//! Type-level settings for [`RingBufferDeque`](crate::RingBufferDeque).

use std::fmt::Debug;

/// Releases elements starting at the front, the same order iteration visits them.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrontToBack;

/// Releases elements starting at the back, the reverse of iteration order.
#[derive(Copy, Clone, Debug, Default)]
pub struct BackToFront;

/// The order in which a deque drops its live elements on `clear` and when it is itself dropped.
/// Implemented only by [`FrontToBack`] and [`BackToFront`].
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}

pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}
