use super::node::{Link, Node};
use crate::error::QueueError;

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// FIFO queue over a doubly linked chain of owned nodes.
///
/// `head` is the next node to dequeue and `tail` the most recently enqueued
/// one. Following `next` links walks from the tail toward the head, `prev`
/// links walk the other way. Both endpoints are `None` exactly when the queue
/// is empty. No length is stored, so [`len`](Self::len) walks the chain.
pub struct LinkedQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    // cond: node_ptr is freshly allocated with next == self.tail
    unsafe fn link_tail(&mut self, node_ptr: NonNull<Node<T>>) {
        match self.tail {
            None => self.head = Some(node_ptr),
            Some(mut tail_ptr) => tail_ptr.as_mut().prev = Some(node_ptr),
        }
        self.tail = Some(node_ptr);
    }

    // cond: ptr is owned by self
    // The endpoints move to the neighbours before the node leaves the chain.
    unsafe fn unlink(&mut self, ptr: NonNull<Node<T>>) {
        let prev = ptr.as_ref().prev;
        let next = ptr.as_ref().next;
        match next {
            Some(mut next_ptr) => next_ptr.as_mut().prev = prev,
            None => self.head = prev,
        }
        match prev {
            Some(mut prev_ptr) => prev_ptr.as_mut().next = next,
            None => self.tail = next,
        }
    }

    fn pop_head(&mut self) -> Option<T> {
        let head_ptr = self.head?;
        unsafe {
            self.unlink(head_ptr);
            Some(Node::consume(head_ptr))
        }
    }

    /// Nodes from head to tail.
    fn nodes(&self) -> impl Iterator<Item = NonNull<Node<T>>> + '_ {
        std::iter::successors(self.head, |ptr| unsafe { ptr.as_ref().prev })
    }
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes, O(n).
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Appends `elem` at the tail.
    ///
    /// Allocation failure aborts through [`std::alloc::handle_alloc_error`];
    /// use [`try_enqueue`](Self::try_enqueue) to get the element back instead.
    pub fn enqueue(&mut self, elem: T) {
        unsafe {
            let node_ptr = Node::alloc(elem, self.tail);
            self.link_tail(node_ptr);
        }
    }

    pub fn try_enqueue(&mut self, elem: T) -> Result<(), QueueError<T>> {
        match unsafe { Node::try_alloc(elem, self.tail) } {
            Ok(node_ptr) => {
                unsafe { self.link_tail(node_ptr) };
                Ok(())
            }
            Err(elem) => {
                tracing::warn!("queue node allocation failed");
                Err(QueueError::AllocError(elem))
            }
        }
    }

    /// Removes and returns the head element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Check [`is_empty`](Self::is_empty) first
    /// or use [`try_dequeue`](Self::try_dequeue).
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        match self.pop_head() {
            Some(elem) => elem,
            None => panic!("dequeue on an empty queue"),
        }
    }

    pub fn try_dequeue(&mut self) -> Result<T, QueueError<T>> {
        self.pop_head().ok_or(QueueError::Empty)
    }

    /// Returns the head element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn peek_head(&self) -> &T {
        match self.head {
            Some(head_ptr) => unsafe { &(*head_ptr.as_ptr()).elem },
            None => panic!("peek on an empty queue"),
        }
    }

    pub fn try_peek_head(&self) -> Result<&T, QueueError<T>> {
        match self.head {
            Some(head_ptr) => Ok(unsafe { &(*head_ptr.as_ptr()).elem }),
            None => Err(QueueError::Empty),
        }
    }

    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        self.tail = None;
        let mut released = 0usize;
        while let Some(ptr) = cursor {
            unsafe {
                cursor = ptr.as_ref().prev;
                Node::destroy(ptr);
            }
            released += 1;
        }
        tracing::trace!(released, "cleared queue");
    }
}

impl<T> LinkedQueue<T>
where
    T: PartialEq,
{
    /// Unlinks the most recently enqueued element equal to `target` and
    /// returns it. The order of the other elements is kept. Returns `None`
    /// and leaves the queue untouched when nothing matches.
    pub fn remove_by_value(&mut self, target: &T) -> Option<T> {
        // tail -> head, so the latest equal element wins
        let mut cursor = self.tail;
        while let Some(ptr) = cursor {
            let node = unsafe { ptr.as_ref() };
            if node.elem == *target {
                tracing::trace!("removing matched element");
                unsafe {
                    self.unlink(ptr);
                    return Some(Node::consume(ptr));
                }
            }
            cursor = node.next;
        }
        tracing::trace!("no element matched, queue unchanged");
        None
    }

    pub fn contains(&self, target: &T) -> bool {
        self.nodes().any(|ptr| unsafe { ptr.as_ref().elem == *target })
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.nodes()
            .map(|ptr| unsafe { ptr.as_ref().elem.clone() })
            .collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes().map(|ptr| unsafe { &(*ptr.as_ptr()).elem }))
            .finish()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
