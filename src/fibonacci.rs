use std::ops::Index;

use ibig::{ubig, UBig};

// Fibonacci numbers 0, 1, 1, 2, 3, 5, ... up to and including the largest one <= max.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciTable {
    fibs: Vec<u64>,
}

impl FibonacciTable {
    pub fn new(max: u64) -> Self {
        if max == 0 {
            return FibonacciTable { fibs: vec![0] };
        }

        let mut fibs: Vec<u64> = vec![0, 1];
        loop {
            let n = fibs.len();
            // past u64::MAX the next value exceeds any max, so stop as if it overshot
            match fibs[n - 1].checked_add(fibs[n - 2]) {
                Some(next) if next <= max => fibs.push(next),
                _ => break,
            }
        }

        FibonacciTable { fibs }
    }

    pub fn len(&self) -> usize {
        self.fibs.len()
    }

    pub fn last(&self) -> u64 {
        // never empty: both construction paths start with 0
        self.fibs[self.fibs.len() - 1]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.fibs
    }
}

impl Index<usize> for FibonacciTable {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.fibs[index]
    }
}

pub fn fib_ubig(n: usize) -> UBig {
    let mut a = ubig!(0);
    let mut b = ubig!(1);
    for _ in 0..n {
        let c = &a + &b;
        a = b;
        b = c;
    }
    a
}
