use std::fmt;

use log::debug;

use crate::fibonacci::FibonacciTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    ExactFibonacci,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub days: usize,
    pub first_deposit: u64,
    pub second_deposit: u64,
    pub kind: SolutionKind,
}

impl Solution {
    // k such that target = first_deposit * fib(k) + second_deposit * fib(k + 1)
    pub fn coefficient_index(&self) -> usize {
        match self.kind {
            SolutionKind::ExactFibonacci => self.days - 1,
            SolutionKind::Search => self.days,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "days: {}", self.days)?;
        writeln!(f, "first deposit:  {}", self.first_deposit)?;
        write!(f, "second deposit: {}", self.second_deposit)
    }
}

// Smallest first deposit i with i * fib1 + j * fib2 == target, j >= 0.
pub fn solve_at(fibs: &FibonacciTable, target: u64, index: usize) -> Option<(u64, u64)> {
    let fib1 = fibs[index];
    let fib2 = fibs[index + 1];

    let mut remainder = target;
    let mut i = 0;
    loop {
        if remainder % fib2 == 0 {
            return Some((i, remainder / fib2));
        }
        // fib1 == 0 only at index 0, where fib2 == 1 and the check above always hits
        if fib1 == 0 || remainder < fib1 {
            return None;
        }
        remainder -= fib1;
        i += 1;
    }
}

// Scans day indices from the top of the table down to `lowest`, returning the first hit.
pub fn search_down_to(fibs: &FibonacciTable, target: u64, lowest: usize) -> Option<Solution> {
    if fibs.len() < 2 {
        return None;
    }

    for index in (lowest..fibs.len() - 1).rev() {
        if let Some((i, j)) = solve_at(fibs, target, index) {
            debug!("hit at index {} (fib1 = {}, fib2 = {})", index, fibs[index], fibs[index + 1]);
            return Some(Solution {
                days: index,
                first_deposit: i,
                second_deposit: j,
                kind: SolutionKind::Search,
            });
        }
        debug!("no solution at index {}", index);
    }
    None
}

pub fn deepest_day(fibs: &FibonacciTable, target: u64) -> Option<Solution> {
    // the general search never puts the top fibonacci number on day 1, so an exact
    // match would be missed without this
    if fibs.last() == target {
        debug!("target is fib({}), exact case", fibs.len() - 1);
        return Some(Solution {
            days: fibs.len(),
            first_deposit: 1,
            second_deposit: 0,
            kind: SolutionKind::ExactFibonacci,
        });
    }

    search_down_to(fibs, target, 0)
}
