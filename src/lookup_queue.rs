use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::QueueError;
use crate::priority_queue::QueueType;
use crate::raw::heap::{self, HeapSlots};

/// A binary-heap priority queue with an O(1) reverse index on its values.
///
/// Entries are `(priority, value)` pairs ordered by priority; a value→index
/// map shadows the heap array so that [`contains`](Self::contains) is O(1)
/// and [`set_priority`](Self::set_priority) is O(log n). The map is rewritten
/// by every heap swap, which keeps it exact through every sift.
///
/// The flip side of the index: each value may appear only once
/// ([`QueueError::Duplicate`] otherwise), and values are cloned into the
/// map, hence the `Clone` bound. Duplicate *priorities* are fine; equal
/// priorities dequeue in an unspecified relative order.
///
/// # Examples
///
/// ```
/// use orchard::{PriorityLookupQueue, QueueError, QueueType};
///
/// let mut queue = PriorityLookupQueue::new(QueueType::Min);
/// queue.enqueue(2, "b")?;
/// queue.enqueue(1, "a")?;
///
/// assert!(queue.contains(&"a"));
/// assert_eq!(queue.enqueue(9, "a"), Err(QueueError::Duplicate));
///
/// queue.set_priority(&"b", 0)?;
/// assert_eq!(queue.dequeue(), Ok((0, "b")));
/// # Ok::<(), QueueError>(())
/// ```
pub struct PriorityLookupQueue<K, V> {
    entries: Vec<(K, V)>,
    lookup: HashMap<V, usize>,
    queue_type: QueueType,
}

/// An iterator over a lookup queue's `(priority, value)` pairs in heap
/// order: a valid heap layout, not a sorted sequence.
///
/// Created by [`PriorityLookupQueue::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<K, V> PriorityLookupQueue<K, V> {
    /// Makes a new, empty queue of the given discipline.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new(queue_type: QueueType) -> Self {
        Self {
            entries: Vec::new(),
            lookup: HashMap::new(),
            queue_type,
        }
    }

    /// Returns the number of queued entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the queue's ordering discipline.
    #[must_use]
    pub const fn queue_type(&self) -> QueueType {
        self.queue_type
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lookup.clear();
    }

    /// Returns the front entry without removing it.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] when the queue holds no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn peek(&self) -> Result<(&K, &V), QueueError> {
        self.entries.first().map(|(priority, value)| (priority, value)).ok_or(QueueError::Empty)
    }

    /// Gets an iterator over the `(priority, value)` pairs in heap order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<K: Ord, V: Eq + Hash + Clone> PriorityLookupQueue<K, V> {
    /// Builds a queue from parallel priority and value sequences,
    /// heapifying in O(n).
    ///
    /// # Errors
    ///
    /// [`QueueError::LengthMismatch`] when the sequences differ in length,
    /// [`QueueError::Duplicate`] when a value repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use orchard::{PriorityLookupQueue, QueueType};
    ///
    /// let queue = PriorityLookupQueue::from_pairs(
    ///     vec![2, 1, 3],
    ///     vec!["b", "a", "c"],
    ///     QueueType::Min,
    /// )?;
    /// assert_eq!(queue.peek(), Ok((&1, &"a")));
    /// # Ok::<(), orchard::QueueError>(())
    /// ```
    pub fn from_pairs(priorities: Vec<K>, values: Vec<V>, queue_type: QueueType) -> Result<Self, QueueError> {
        if priorities.len() != values.len() {
            return Err(QueueError::LengthMismatch {
                keys: priorities.len(),
                values: values.len(),
            });
        }

        let mut queue = Self {
            entries: Vec::with_capacity(values.len()),
            lookup: HashMap::with_capacity(values.len()),
            queue_type,
        };
        for (index, (priority, value)) in priorities.into_iter().zip(values).enumerate() {
            if queue.lookup.insert(value.clone(), index).is_some() {
                return Err(QueueError::Duplicate);
            }
            queue.entries.push((priority, value));
        }
        heap::heapify(&mut queue, queue_type.winner());
        Ok(queue)
    }

    /// Adds a value with the given priority.
    ///
    /// # Errors
    ///
    /// [`QueueError::Duplicate`] when the value is already queued; the
    /// queue is left unmodified.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn enqueue(&mut self, priority: K, value: V) -> Result<(), QueueError> {
        if self.lookup.contains_key(&value) {
            return Err(QueueError::Duplicate);
        }

        // The index is recorded before the sift so that every swap along
        // the way finds both of its entries present.
        let index = self.entries.len();
        self.lookup.insert(value.clone(), index);
        self.entries.push((priority, value));
        let winner = self.queue_type.winner();
        heap::sift_up(self, winner, index);
        Ok(())
    }

    /// Removes and returns the front entry.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] when the queue holds no entries.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn dequeue(&mut self) -> Result<(K, V), QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.remove_at(0))
    }

    /// Returns `true` if the queue holds `value`.
    ///
    /// # Complexity
    ///
    /// O(1); this is what the index buys.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.lookup.contains_key(value)
    }

    /// Returns the priority stored for `value`.
    ///
    /// # Errors
    ///
    /// [`QueueError::MissingValue`] when the value is not queued.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn priority(&self, value: &V) -> Result<&K, QueueError> {
        let &index = self.lookup.get(value).ok_or(QueueError::MissingValue)?;
        Ok(&self.entries[index].0)
    }

    /// Re-prioritizes `value`, returning its previous priority.
    ///
    /// The entry is removed (repairing the slot its removal disturbs) and
    /// then re-enqueued under the new priority, in that order, so the index
    /// never holds a stale or doubled slot.
    ///
    /// # Errors
    ///
    /// [`QueueError::MissingValue`] when the value is not queued; no
    /// mutation occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use orchard::{PriorityLookupQueue, QueueType};
    ///
    /// let mut queue = PriorityLookupQueue::new(QueueType::Min);
    /// queue.enqueue(10, "slow")?;
    /// queue.enqueue(20, "slower")?;
    ///
    /// assert_eq!(queue.set_priority(&"slower", 1), Ok(20));
    /// assert_eq!(queue.peek(), Ok((&1, &"slower")));
    /// # Ok::<(), orchard::QueueError>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn set_priority(&mut self, value: &V, priority: K) -> Result<K, QueueError> {
        let &index = self.lookup.get(value).ok_or(QueueError::MissingValue)?;
        let (previous, owned) = self.remove_at(index);

        let index = self.entries.len();
        self.lookup.insert(owned.clone(), index);
        self.entries.push((priority, owned));
        let winner = self.queue_type.winner();
        heap::sift_up(self, winner, index);
        Ok(previous)
    }

    // Removes the entry at `index`: the last entry takes the vacated slot
    // and the slot is repaired in whichever direction heap order demands.
    fn remove_at(&mut self, index: usize) -> (K, V) {
        let entry = self.entries.swap_remove(index);
        self.lookup.remove(&entry.1);

        if index < self.entries.len() {
            *self.lookup.get_mut(&self.entries[index].1).expect("moved value stays indexed") = index;

            // The element arriving from the last slot can violate order
            // against its new parent or its new children; exactly one of
            // these walks moves.
            let winner = self.queue_type.winner();
            if heap::sift_up(self, winner, index) == index {
                heap::sift_down(self, winner, index);
            }
        }

        entry
    }
}

impl<K: Ord, V: Eq + Hash + Clone> HeapSlots for PriorityLookupQueue<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.entries[i].0.cmp(&self.entries[j].0)
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.entries.swap(i, j);
        *self.lookup.get_mut(&self.entries[i].1).expect("swapped value stays indexed") = i;
        *self.lookup.get_mut(&self.entries[j].1).expect("swapped value stays indexed") = j;
    }
}

impl<K, V> Default for PriorityLookupQueue<K, V> {
    /// Makes an empty Min queue.
    fn default() -> Self {
        Self::new(QueueType::Min)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PriorityLookupQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityLookupQueue")
            .field("queue_type", &self.queue_type)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a, K, V> IntoIterator for &'a PriorityLookupQueue<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(priority, value)| (priority, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.inner.len()).finish()
    }
}
