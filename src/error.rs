use thiserror::Error;

/// Errors returned by the non-panicking queue operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError<T> {
    /// The queue has no element to dequeue or peek.
    #[error("queue is empty")]
    Empty,
    /// The allocator refused a node. Contains the element that was not stored.
    #[error("failed to allocate a queue node")]
    AllocError(T),
}

impl<T> QueueError<T> {
    /// Extracts the element carried by variants that preserve it.
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::AllocError(item) => Some(item),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::QueueError;

    #[test]
    fn test_into_item() {
        assert_eq!(QueueError::AllocError(7).into_item(), Some(7));
        assert_eq!(QueueError::<String>::Empty.into_item(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(QueueError::<u8>::Empty.to_string(), "queue is empty");
        assert_eq!(
            QueueError::AllocError("x").to_string(),
            "failed to allocate a queue node"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn boxed(err: QueueError<i32>) -> Box<dyn std::error::Error> {
            Box::new(err)
        }
        assert_eq!(boxed(QueueError::Empty).to_string(), "queue is empty");
    }
}
