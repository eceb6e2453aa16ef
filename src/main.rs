use avl::reporter::ConsoleReporter;
use avl::{AvlTree, Order, Result};
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger, TermLogger};
use std::env;
use std::io::{self, BufRead};

fn log_level() -> LevelFilter {
    let verbosity = env::args()
        .skip(1)
        .filter(|arg| arg.starts_with('-') && arg.chars().skip(1).all(|c| c == 'v'))
        .map(|arg| arg.len() - 1)
        .sum::<usize>();
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter) {
    if TermLogger::init(level, Config::default()).is_err() {
        let _ = SimpleLogger::init(level, Config::default());
    }
}

fn run(
    tree: &mut AvlTree,
    reporter: &mut ConsoleReporter<io::Stdout>,
    args: &[&str],
) -> Result<()> {
    match args {
        ["insert", keys @ ..] => {
            for key in keys {
                match key.parse::<i32>() {
                    Ok(key) => {
                        tree.insert(key);
                    },
                    Err(_) => error!("{:?} is not an integer key", key),
                }
            }
        },
        ["delete", keys @ ..] => {
            for key in keys {
                match key.parse::<i32>() {
                    Ok(key) => tree.delete(key)?,
                    Err(_) => error!("{:?} is not an integer key", key),
                }
            }
        },
        ["print"] => {
            for order in Order::ALL.iter() {
                tree.print(*order, reporter)?;
            }
        },
        ["print", tags @ ..] => {
            for tag in tags {
                tree.print(tag.parse()?, reporter)?;
            }
        },
        ["empty"] => println!("{}", tree.is_empty()),
        [] => {},
        [command, ..] => error!("unknown command {:?}", command),
    }
    Ok(())
}

fn main() {
    init_logging(log_level());

    let mut tree = AvlTree::new();
    let mut reporter = ConsoleReporter::stdout();
    let input = io::stdin();

    for line in input.lock().lines() {
        let buffer = match line {
            Ok(buffer) => buffer,
            Err(_) => break,
        };
        let args: Vec<&str> = buffer.split_whitespace().collect();
        if args.first() == Some(&"quit") {
            break;
        }
        if let Err(err) = run(&mut tree, &mut reporter, &args) {
            error!("{}", err);
        }
    }

    info!("exiting with {} keys of height {}", tree.len(), tree.height());
}
