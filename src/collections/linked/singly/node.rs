pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node that exclusively owns the rest of the chain.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn boxed(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            next: None,
        })
    }
}
