use ordered_forest::{ListPriorityQueue, PriorityMode, PriorityQueue, TreePriorityQueue};

#[test]
fn list_queue_orders_by_priority() {
    let mut queue = ListPriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);

    queue.enqueue(5);
    queue.enqueue(1);
    queue.enqueue(3);

    assert!(!queue.is_empty());
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(&1));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(5));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn list_queue_puts_newer_items_before_equal_priorities() {
    let mut queue = ListPriorityQueue::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0 - b.0);
    queue.enqueue((1, 'a'));
    queue.enqueue((2, 'x'));
    queue.enqueue((1, 'b'));

    // Enqueue inserts in front of the first entry of equal priority.
    assert_eq!(queue.dequeue(), Some((1, 'b')));
    assert_eq!(queue.dequeue(), Some((1, 'a')));
    assert_eq!(queue.dequeue(), Some((2, 'x')));
}

#[test]
fn list_queue_iterates_in_priority_order() {
    let mut queue = ListPriorityQueue::new();
    for v in [4, 2, 9, 7] {
        queue.enqueue(v);
    }
    let snapshot: Vec<i32> = queue.iter().copied().collect();
    assert_eq!(snapshot, vec![2, 4, 7, 9]);
}

#[test]
fn tree_queue_lowest_mode() {
    let mut queue = TreePriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);

    for v in [7, 2, 9, 4] {
        queue.enqueue(v);
    }

    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), Some(7));
    assert_eq!(queue.dequeue(), Some(9));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn tree_queue_highest_mode() {
    let mut queue = TreePriorityQueue::new();
    queue.mode = PriorityMode::Highest;

    for v in [7, 2, 9, 4] {
        queue.enqueue(v);
    }

    assert_eq!(queue.peek(), Some(&9));
    assert_eq!(queue.dequeue(), Some(9));
    assert_eq!(queue.dequeue(), Some(7));
    assert_eq!(queue.dequeue(), Some(4));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn tree_queue_handles_duplicate_priorities() {
    let mut queue = TreePriorityQueue::new();
    for v in [3, 3, 1] {
        queue.enqueue(v);
    }

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
}
