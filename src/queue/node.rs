use std::alloc::Layout;
use std::ptr::NonNull;

/// Non-owning link between nodes. Never freed through.
pub(super) type Link<T> = Option<NonNull<Node<T>>>;

pub(super) struct Node<T> {
    pub(super) elem: T,
    /// Neighbour closer to the tail.
    pub(super) prev: Link<T>,
    /// Neighbour closer to the head.
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    /// Hands `elem` back if the allocator returns null.
    pub(super) unsafe fn try_alloc(elem: T, next: Link<T>) -> Result<NonNull<Self>, T> {
        let layout = Layout::new::<Node<T>>();
        let ptr = std::alloc::alloc(layout) as *mut Node<T>;
        match NonNull::new(ptr) {
            Some(node_ptr) => {
                node_ptr.as_ptr().write(Self {
                    elem,
                    prev: None,
                    next,
                });
                Ok(node_ptr)
            }
            None => Err(elem),
        }
    }

    pub(super) unsafe fn alloc(elem: T, next: Link<T>) -> NonNull<Self> {
        match Node::try_alloc(elem, next) {
            Ok(node_ptr) => node_ptr,
            Err(_) => std::alloc::handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    // cond: ptr came from `alloc` and its elem was moved out or dropped
    pub(super) unsafe fn dealloc(ptr: NonNull<Self>) {
        let layout = Layout::new::<Node<T>>();
        std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
    }

    // cond: ptr is unlinked
    pub(super) unsafe fn consume(ptr: NonNull<Self>) -> T {
        let elem = std::ptr::read(&ptr.as_ref().elem);
        Node::dealloc(ptr);
        elem
    }

    // cond: ptr is unlinked
    pub(super) unsafe fn destroy(mut ptr: NonNull<Self>) {
        std::ptr::drop_in_place(&mut ptr.as_mut().elem);
        Node::dealloc(ptr);
    }
}
