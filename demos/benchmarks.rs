//
// Copyright (c) 2025 Nathan Fiedler
//
use ring_vector::RingVector;
use std::collections::VecDeque;
use std::time::Instant;

fn benchmark_ring_vector(size: usize, ops: usize) {
    let start = Instant::now();
    let mut coll: RingVector<usize> = RingVector::new();
    for value in 0..size {
        coll.push(value);
    }
    let duration = start.elapsed();
    println!("ring create: {:?}", duration);

    // test sequenced access for entire collection
    let start = Instant::now();
    for (index, value) in coll.iter().enumerate() {
        assert_eq!(*value, index);
    }
    let duration = start.elapsed();
    println!("ring ordered: {:?}", duration);

    // test random removal and insertion at both ends
    let start = Instant::now();
    for _ in 0..ops {
        if rand::random_range(0..2) == 0 {
            let value = coll.pop_front().unwrap();
            coll.push(value);
        } else {
            let value = coll.pop().unwrap();
            coll.push_front(value);
        }
    }
    let duration = start.elapsed();
    println!("ring {ops} rotate both ends: {:?}", duration);

    // test popping all elements from the array
    let unused = coll.capacity() - coll.len();
    println!("unused capacity: {unused}");
    let start = Instant::now();
    while !coll.is_empty() {
        coll.pop();
    }
    let duration = start.elapsed();
    println!("ring pop-all: {:?}", duration);
    println!("ring capacity: {}", coll.capacity());
}

fn benchmark_vecdeque(size: usize, ops: usize) {
    let start = Instant::now();
    let mut coll: VecDeque<usize> = VecDeque::new();
    for value in 0..size {
        coll.push_back(value);
    }
    let duration = start.elapsed();
    println!("vecdeque create: {:?}", duration);

    // test sequenced access for entire collection
    let start = Instant::now();
    for (index, value) in coll.iter().enumerate() {
        assert_eq!(*value, index);
    }
    let duration = start.elapsed();
    println!("vecdeque ordered: {:?}", duration);

    // test random removal and insertion at both ends
    let start = Instant::now();
    for _ in 0..ops {
        if rand::random_range(0..2) == 0 {
            let value = coll.pop_front().unwrap();
            coll.push_back(value);
        } else {
            let value = coll.pop_back().unwrap();
            coll.push_front(value);
        }
    }
    let duration = start.elapsed();
    println!("vecdeque {ops} rotate both ends: {:?}", duration);

    // test popping all elements from the deque
    let unused = coll.capacity() - coll.len();
    println!("unused capacity: {unused}");
    let start = Instant::now();
    while !coll.is_empty() {
        coll.pop_back();
    }
    let duration = start.elapsed();
    println!("vecdeque pop-all: {:?}", duration);
    println!("vecdeque capacity: {}", coll.capacity());
}

fn main() {
    let size = 10_000_000;
    println!("creating RingVector of {size} elements...");
    benchmark_ring_vector(size, 200_000);
    println!("creating VecDeque of {size} elements...");
    benchmark_vecdeque(size, 200_000);
}
