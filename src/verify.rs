use ibig::UBig;
use log::debug;
use rayon::prelude::*;

use crate::error::BankError;
use crate::fibonacci::{fib_ubig, FibonacciTable};
use crate::search::{solve_at, Solution, SolutionKind};

pub fn deposit_sum(solution: &Solution) -> UBig {
    let k = solution.coefficient_index();
    UBig::from(solution.first_deposit) * fib_ubig(k) + UBig::from(solution.second_deposit) * fib_ubig(k + 1)
}

pub fn check_exact(solution: &Solution, target: u64) -> Result<(), BankError> {
    let actual = deposit_sum(solution);
    if actual == UBig::from(target) {
        Ok(())
    } else {
        Err(BankError::Inexact {
            days: solution.days,
            first_deposit: solution.first_deposit,
            second_deposit: solution.second_deposit,
            actual: actual.to_string(),
            target,
        })
    }
}

pub fn check_maximal(solution: &Solution, fibs: &FibonacciTable, target: u64) -> Result<(), BankError> {
    // nothing sits above the exact case
    if solution.kind == SolutionKind::ExactFibonacci {
        return Ok(());
    }

    let top = fibs.len().saturating_sub(1);
    let better = (solution.days + 1..top)
        .into_par_iter()
        .find_first(|&index| solve_at(fibs, target, index).is_some());

    debug!("checked {} indices above day {}", top.saturating_sub(solution.days + 1), solution.days);

    match better {
        None => Ok(()),
        Some(better) => Err(BankError::NotMaximal { days: solution.days, better }),
    }
}

pub fn verify(solution: &Solution, fibs: &FibonacciTable, target: u64) -> Result<(), BankError> {
    check_exact(solution, target)?;
    check_maximal(solution, fibs, target)
}
