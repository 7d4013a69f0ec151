//! Containers for the nodes waiting to be expanded.
//!
//! The search loop only needs to push, pop and know when to stop. Each search
//! picks the order:
//!   - `Stack`: last in, first out.
//!   - `Queue`: first in, first out.
//!   - `PriorityQueue`: lowest priority first, ties in insertion order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    #[inline(always)]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    #[inline(always)]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// The ranking of a `PriorityQueue` entry.
///
/// Lower priorities go first. Equal priorities go in the order they were
/// pushed, so the order successors were listed in breaks ties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank<R: Ord> {
    priority: R,
    sequence: u64,
}

impl<R: Ord> Rank<R> {
    pub fn priority(&self) -> &R {
        &self.priority
    }
}

/// A heap entry. Carries the rank and the item, but only ranks are compared.
#[derive(Debug)]
struct HeapNode<T, R: Ord> {
    rank: Reverse<Rank<R>>,
    item: T,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl<T, R: Ord> PartialEq for HeapNode<T, R> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<T, R: Ord> Eq for HeapNode<T, R> {}

/// PartialOrd is forwarded to Ord::cmp
impl<T, R: Ord> PartialOrd for HeapNode<T, R> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is forwarded to self.rank's Ord
impl<T, R: Ord> Ord for HeapNode<T, R> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// A min-priority queue.
///
/// The same item may be pushed many times with different priorities; there's
/// no decrease-key. Searches deal with the outdated copies when popping them.
#[derive(Debug)]
pub struct PriorityQueue<T, R: Ord> {
    heap: BinaryHeap<HeapNode<T, R>>,
    pushed: u64,
}

impl<T, R: Ord> PriorityQueue<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0u64,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, item: T, priority: R) {
        let rank = Rank {
            priority,
            sequence: self.pushed,
        };
        self.pushed += 1;
        self.heap.push(HeapNode {
            rank: Reverse(rank),
            item,
        });
    }

    /// Pops the best item along with its rank.
    #[inline(always)]
    pub fn pop_ranked(&mut self) -> Option<(T, Rank<R>)> {
        self.heap.pop().map(|node| (node.item, node.rank.0))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, R: Ord> Default for PriorityQueue<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<char>>(mut f: F, items: &str) -> String {
        for c in items.chars() {
            f.push(c);
        }
        assert_eq!(f.len(), items.len());
        let mut out = String::new();
        while let Some(c) = f.pop() {
            out.push(c);
        }
        assert!(f.is_empty());
        out
    }

    #[test]
    fn stack_is_lifo() {
        assert_eq!(drain(Stack::new(), "abcd"), "dcba");
    }

    #[test]
    fn queue_is_fifo() {
        assert_eq!(drain(Queue::new(), "abcd"), "abcd");
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut pq = PriorityQueue::<char, u32>::new();
        for c in "abcd".chars() {
            pq.push(c, 7);
        }
        assert_eq!(pq.len(), 4);

        let order: String = std::iter::from_fn(|| pq.pop_ranked().map(|(c, _)| c)).collect();
        assert_eq!(order, "abcd");
        assert!(pq.is_empty());
    }

    #[test]
    fn lowest_priority_first() {
        let mut pq = PriorityQueue::<&str, u32>::new();
        pq.push("five", 5);
        pq.push("one", 1);
        pq.push("three", 3);
        pq.push("other-one", 1);
        pq.push("five-again", 5);

        let order: Vec<_> = std::iter::from_fn(|| pq.pop_ranked().map(|(s, _)| s)).collect();
        assert_eq!(order, vec!["one", "other-one", "three", "five", "five-again"]);
        assert!(pq.is_empty());
    }

    #[test]
    fn ranking() {
        let low = Rank {
            priority: 2u32,
            sequence: 9,
        };
        let high = Rank {
            priority: 3u32,
            sequence: 0,
        };
        let tie = Rank {
            priority: 2u32,
            sequence: 10,
        };
        assert!(low < high);
        assert!(low < tie);
        assert_eq!(*tie.priority(), 2);
    }
}
