//! Classic ordered collections for Rust.
//!
//! This crate provides in-memory, single-threaded, exact-comparison data
//! structures built around two themes: duplicate-counting search trees and
//! array-backed binary heaps.
//!
//! - [`AvlTree`]: self-balancing AVL tree, implemented iteratively over
//!   parent-linked arena nodes.
//! - [`AvlRecursiveTree`]: the same contract implemented by recursive
//!   descent, with no parent links at all.
//! - [`BinarySearchTree`]: the unbalanced baseline the AVL variants are
//!   built from.
//! - [`SkipList`]: a randomized skip list with no rebalancing and
//!   O(log n) expected operations.
//! - [`PriorityQueue`]: a Min/Max binary heap with O(n) bulk heapify.
//! - [`PriorityLookupQueue`]: a heap of `(priority, value)` pairs plus a
//!   value→index map for O(1) membership and O(log n) priority updates.
//!
//! # Example
//!
//! ```
//! use orchard::{AvlTree, PriorityQueue, QueueType};
//!
//! // Trees collapse duplicates into per-node counters.
//! let mut tree = AvlTree::new();
//! for value in [30, 10, 20, 10] {
//!     tree.add(value);
//! }
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.count_of(&10), 2);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 10, 20, 30]);
//!
//! // Queues dequeue in priority order.
//! let mut queue = PriorityQueue::from_values(vec![3, 1, 2], QueueType::Min);
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! ```
//!
//! # Duplicates
//!
//! The trees store one node per distinct value with a duplicate counter;
//! the skip list stores duplicates as separate physical nodes. Both report
//! lengths with multiplicity; the difference is representation, and it is
//! deliberate.
//!
//! # Errors
//!
//! Removing an absent value from a tree or the skip list returns `false`.
//! The queues instead surface [`QueueError`] for empty-queue access,
//! duplicate values, and missing-value priority operations.

#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod error;
mod raw;

pub mod avl_recursive;
pub mod avl_tree;
pub mod binary_search_tree;
pub mod lookup_queue;
pub mod priority_queue;
pub mod skip_list;

pub use avl_recursive::AvlRecursiveTree;
pub use avl_tree::AvlTree;
pub use binary_search_tree::BinarySearchTree;
pub use error::QueueError;
pub use lookup_queue::PriorityLookupQueue;
pub use priority_queue::{PriorityQueue, QueueType};
pub use skip_list::SkipList;
