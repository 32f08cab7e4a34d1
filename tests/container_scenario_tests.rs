//! Scenario tests for the container round trip and the counting sort

use sortbench::algorithms::{counting_sort, frequency_table, to_domain};
use sortbench::{
    CanonicalSequence, Container, ContainerKind, CountingSort, DynamicQueue, DynamicStack,
    IntegerSort, LinearList, LinearQueue, LinearStack, SortBenchError,
};

#[test]
fn test_linear_stack_round_trip() {
    let mut stack = LinearStack::with_capacity(5).unwrap();
    for value in [5, 3, 1, 4, 2] {
        stack.push(value).unwrap();
    }

    let mut sequence = stack.to_sequence();
    assert_eq!(sequence, vec![5, 3, 1, 4, 2]);

    counting_sort(&mut sequence);
    assert_eq!(sequence, vec![1, 2, 3, 4, 5]);

    stack.from_sequence(&sequence).unwrap();
    let popped: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
    assert_eq!(popped, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_dynamic_stack_round_trip() {
    let mut stack = DynamicStack::new();
    for value in [5, 3, 1, 4, 2] {
        stack.push(value);
    }
    assert_eq!(stack.peek(), Some(2));

    let mut sequence = stack.to_sequence();
    assert_eq!(sequence, vec![5, 3, 1, 4, 2]);
    counting_sort(&mut sequence);
    stack.from_sequence(&sequence).unwrap();

    let popped: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
    assert_eq!(popped, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_circular_queue_wraparound() {
    let mut queue = LinearQueue::with_capacity(3).unwrap();
    queue.enqueue(1).unwrap();
    assert_eq!(queue.dequeue().unwrap(), 1);
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();

    assert!(queue.is_full());
    assert_eq!(queue.to_sequence(), vec![2, 3, 4]);
    assert!(matches!(
        queue.enqueue(5),
        Err(SortBenchError::CapacityExceeded { capacity: 3, requested: 4 })
    ));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_queue_sort_preserves_fifo_of_sorted_values() {
    let mut linear = LinearQueue::with_capacity(6).unwrap();
    let mut dynamic = DynamicQueue::new();
    for value in [9, 2, 7, 2, 0, 5] {
        linear.enqueue(value).unwrap();
        dynamic.enqueue(value);
    }

    for queue in [&mut linear as &mut dyn Container, &mut dynamic] {
        let mut sequence = queue.to_sequence();
        counting_sort(&mut sequence);
        queue.from_sequence(&sequence).unwrap();

        let drained: Vec<_> = std::iter::from_fn(|| queue.remove().ok()).collect();
        assert_eq!(drained, vec![0, 2, 2, 5, 7, 9]);
    }
}

#[test]
fn test_counting_sort_with_duplicates() {
    let mut data = vec![2, 2, 0, 1, 1, 1];
    assert_eq!(frequency_table(&data), vec![1, 3, 2]);
    counting_sort(&mut data);
    assert_eq!(data, vec![0, 1, 1, 1, 2, 2]);
}

#[test]
fn test_underflow_on_every_kind() {
    for kind in ContainerKind::ALL {
        let mut container = kind.create(4).unwrap();
        assert!(container.is_empty());
        assert!(container.to_sequence().is_empty());
        match container.remove() {
            Err(SortBenchError::Underflow { container }) => assert_eq!(container, kind.name()),
            other => panic!("{}: expected underflow, got {:?}", kind, other),
        }
    }
}

#[test]
fn test_capacity_exceeded_keeps_size() {
    let mut list = LinearList::with_capacity(3).unwrap();
    for value in [1, 2, 3] {
        list.append(value).unwrap();
    }
    let err = list.append(4).unwrap_err();
    assert_eq!(err.category(), "capacity");
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_sequence(), vec![1, 2, 3]);
}

#[test]
fn test_zero_capacity_rejected() {
    for kind in ContainerKind::ALL.into_iter().filter(|k| k.is_linear()) {
        assert!(matches!(kind.create(0), Err(SortBenchError::Configuration { .. })));
    }
    for kind in ContainerKind::ALL.into_iter().filter(|k| !k.is_linear()) {
        assert!(kind.create(0).is_ok());
    }
}

#[test]
fn test_negative_input_rejected_before_sorting() {
    assert!(matches!(
        to_domain(&[4, -3, 1]),
        Err(SortBenchError::UnsupportedDomain { value: -3 })
    ));

    let mut sorter = CountingSort::new();
    let mut data = to_domain(&[4, 0, 3]).unwrap();
    sorter.sort(&mut data).unwrap();
    assert_eq!(data, vec![0, 3, 4]);
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_long_dynamic_chain_drops_cleanly() {
    let mut queue = DynamicQueue::new();
    for value in 0..500_000 {
        queue.enqueue(value % 10);
    }
    let mut stack = DynamicStack::new();
    let mut sequence = queue.to_sequence();
    counting_sort(&mut sequence);
    stack.from_sequence(&sequence).unwrap();
    assert_eq!(stack.len(), 500_000);
    drop(queue);
    drop(stack);
}
