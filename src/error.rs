use thiserror::Error;

/// Errors raised by the priority queues.
///
/// The trees and the skip list never error: removing an absent value from
/// them is an ordinary `false` result, while the queues treat a missing or
/// duplicate value as a broken caller contract. Every fallible queue
/// operation either completes fully or returns one of these before any
/// mutation takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `peek` or `dequeue` on an empty queue.
    #[error("queue is empty")]
    Empty,

    /// Inserting a value the lookup queue already holds.
    #[error("value is already present in the queue")]
    Duplicate,

    /// Priority lookup or update for a value the queue does not hold.
    #[error("value is not present in the queue")]
    MissingValue,

    /// Keyed bulk construction from sequences of different lengths.
    #[error("got {keys} priorities but {values} values")]
    LengthMismatch {
        /// Length of the priority sequence.
        keys: usize,
        /// Length of the value sequence.
        values: usize,
    },
}
