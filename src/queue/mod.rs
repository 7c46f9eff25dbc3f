mod linked_queue;
mod node;

pub use linked_queue::LinkedQueue;
