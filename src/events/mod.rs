pub mod pointer;
pub mod viewport;

pub use pointer::{sync_pointer_tracking, PointerSlot};
pub use viewport::wire_resize;
