//! Linked collection types: [`SinglyLinkedList`], which only links forwards and walks to its end
//! when appending, and [`DoublyLinkedList`], which links both ways and tracks both ends.

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
