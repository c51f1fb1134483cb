use crate::domain::model::Person;
use std::collections::VecDeque;

/// FIFO line of people waiting for a dose.
#[derive(Debug, Default, Clone)]
pub struct PersonQueue {
    queue: VecDeque<Person>,
}

impl PersonQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, id: u64, name: impl Into<String>, age: u32) {
        let person = Person::new(id, name, age);
        tracing::debug!("Enqueued {} (position {})", person, self.queue.len() + 1);
        self.queue.push_back(person);
    }

    pub fn dequeue(&mut self) -> Option<Person> {
        self.queue.pop_front()
    }

    pub fn front(&self) -> Option<&Person> {
        self.queue.front()
    }

    /// Front-to-back view of the queue. Calling it again restarts from the front.
    pub fn snapshot(&self) -> impl Iterator<Item = &Person> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &PersonQueue) -> Vec<u64> {
        queue.snapshot().map(|p| p.id).collect()
    }

    #[test]
    fn test_dequeue_order_matches_enqueue_order() {
        let mut queue = PersonQueue::new();
        for id in 1..=5 {
            queue.enqueue(id, format!("Person {}", id), 20 + id as u32);
        }

        let order: Vec<u64> = std::iter::from_fn(|| queue.dequeue()).map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty_returns_none() {
        let mut queue = PersonQueue::new();
        assert!(queue.dequeue().is_none());
        assert!(queue.front().is_none());

        queue.enqueue(1, "Ana", 40);
        assert!(queue.dequeue().is_some());
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_interleaved_enqueue_dequeue() {
        let mut queue = PersonQueue::new();
        queue.enqueue(1, "A", 1);
        queue.enqueue(2, "B", 2);
        assert_eq!(queue.dequeue().map(|p| p.id), Some(1));
        queue.enqueue(3, "C", 3);
        assert_eq!(ids(&queue), vec![2, 3]);
        assert_eq!(queue.front().map(|p| p.name.as_str()), Some("B"));
    }

    #[test]
    fn test_snapshot_is_restartable_and_does_not_mutate() {
        let mut queue = PersonQueue::new();
        queue.enqueue(7, "Bia", 33);
        queue.enqueue(7, "Bia again", 34);

        let first = ids(&queue);
        let second = ids(&queue);
        assert_eq!(first, second);
        assert_eq!(first, vec![7, 7]);
        assert_eq!(queue.len(), 2);
    }
}
