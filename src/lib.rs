//! A FIFO queue over a doubly linked chain of heap nodes.
//!
//! Besides the usual enqueue/dequeue/peek operations, [`LinkedQueue`] can
//! unlink an arbitrary element by value while keeping the order of the rest.

pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::LinkedQueue;
