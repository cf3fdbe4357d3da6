use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{App, Arg, ArgMatches};
use log::debug;

use crate::error::parse_target;
use crate::fibonacci::FibonacciTable;
use crate::search::deepest_day;
use crate::verify::verify;

mod error;
mod fibonacci;
mod search;
mod verify;


fn app() -> App<'static> {
    App::new("bank_balance")
        .version("1.0.0")
        .about("find day-1 and day-2 deposits that reach a target sum as slowly as possible")
        .allow_negative_numbers(true)
        .arg(Arg::new("target_sum")
            .help("the balance to reach exactly")
            .required(true)
            .takes_value(true))
        .arg(Arg::new("verify")
            .help("re-check the result for exactness and maximality")
            .long("verify"))
        .arg(Arg::new("time")
            .help("print the process time")
            .long("time"))
}


fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches.value_of("target_sum").context("missing target sum")?;
    let target_sum = parse_target(input)?;

    let start_time = Instant::now();

    let fibs = FibonacciTable::new(target_sum);
    debug!("{} fibonacci numbers <= {}", fibs.len(), target_sum);

    let solution = deepest_day(&fibs, target_sum);
    let elapsed = start_time.elapsed();

    match solution {
        Some(solution) => {
            println!("{}", solution);
            if matches.is_present("verify") {
                verify(&solution, &fibs, target_sum)
                    .with_context(|| format!("verification failed for target sum {}", target_sum))?;
                println!("verified: exact and maximal");
            }
        }
        None => println!("No solution found."),
    }

    if matches.is_present("time") {
        println!("process time: {:?}", elapsed);
    }
    Ok(())
}


fn main() {
    env_logger::init();

    let matches = match app().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&matches) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
