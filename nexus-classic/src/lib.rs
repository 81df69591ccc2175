//! Classic collections over slab-backed node storage.
//!
//! Linked structures keep their nodes in an arena and link them by key
//! instead of by pointer. Keys double as stable node handles: a key returned
//! by an insertion stays valid until that node is removed, so neighbor-relative
//! insertion and removal are O(1) without any unsafe code or ownership cycles.
//!
//! ```text
//! Storage (Slab)          - owns nodes, provides stable keys
//! SinglyLinkedList        - links keys forward
//! DoublyLinkedList        - links keys both ways
//! Queue / Stack           - FIFO / LIFO adapters over DoublyLinkedList
//! ```
//!
//! The priority queue and dynamic array are contiguous and need no arena.
//!
//! # Quick Start
//!
//! ```
//! use nexus_classic::{DoublyLinkedList, PriorityQueue, Queue, Stack};
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! let one = list.add_last(1);
//! list.add_after(one, 2).unwrap();
//! assert_eq!(list.to_string(), "1 <-> 2 <-> null");
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! assert_eq!(queue.dequeue(), Ok("a"));
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let mut pq: PriorityQueue<u32> = PriorityQueue::new();
//! pq.extend([5, 3, 8, 1]);
//! assert_eq!(pq.dequeue(), Ok(1));
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`]. Failures leave the structure
//! unchanged:
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`Error::EmptyCollection`] | remove/peek/pop/dequeue on an empty structure |
//! | [`Error::InvalidArgument`] | a node handle that is `NONE`, vacant, or foreign |
//! | [`Error::IndexOutOfRange`] | indexed access past the end of a [`DynamicArray`] |
//!
//! # Storage
//!
//! Lists default to `slab::Slab` storage with `usize` keys. Any [`Storage`]
//! implementation can be supplied through `with_storage`.
//!
//! # Logging
//!
//! Buffer growth and `clear()` are reported at `trace` level, rejected
//! handles at `debug` level, through the `tracing` facade. The crate never
//! installs a subscriber.

#![warn(missing_docs)]

pub mod compare;
pub mod doubly;
pub mod dynamic_array;
pub mod error;
pub mod key;
pub mod priority_queue;
pub mod queue;
pub mod singly;
pub mod stack;
pub mod storage;

pub use compare::{Compare, Natural, Reverse};
pub use doubly::{DoublyLinkedList, DoublyNode, SlabDoublyStorage};
pub use dynamic_array::DynamicArray;
pub use error::{Error, Result};
pub use key::Key;
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use singly::{SinglyLinkedList, SinglyNode, SlabSinglyStorage};
pub use stack::Stack;
pub use storage::Storage;
