mod doubly_linked_list;
mod iter;
mod length;
mod node;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
