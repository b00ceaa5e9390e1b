use itertools::Itertools;
use ktestable::prelude::*;
use owo_colors::OwoColorize;

use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

const DEMO_K: usize = 3;
const DEMO_SAMPLE: [&str; 5] = ["a", "aa", "abba", "abbbba", "aaabbbbba"];
const DEMO_NEGATIVE: [&str; 4] = [
    "aba",
    "abc",
    "aaaaaaaaabbbbbbbbbbbbbbbbbbbbbbbbaaaaaaaaaaaaaa",
    "aabbbaaac",
];
const DEMO_POSITIVE: [&str; 1] = ["aaaaabbbbbbbbba"];

fn cli() -> clap::Command {
    Command::new("ktdemo")
        .about("Learns k-testable languages from samples and classifies words")
        .version(ktestable::VERSION)
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .subcommand(
            Command::new("demo")
                .about("learns the reference sample for k = 3 and checks the classification of some words"),
        )
        .subcommand(
            Command::new("detect")
                .about("learns the given sample and classifies the given words")
                .arg(
                    Arg::new("k")
                        .short('k')
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("sample")
                        .short('s')
                        .long("sample")
                        .required(true)
                        .value_delimiter(',')
                        .num_args(1..),
                )
                .arg(
                    Arg::new("table")
                        .short('t')
                        .long("table")
                        .action(ArgAction::SetTrue)
                        .help("print the transition table of the learned automaton"),
                )
                .arg(Arg::new("words").num_args(0..)),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn separator(title: &str) {
    println!("{}", "=".repeat(30));
    println!("=== {title}");
    println!("{}", "=".repeat(30));
}

/// Runs the reference demo and returns the words whose classification differs from the expected one.
fn demo() -> Result<Vec<String>, ConfigurationError> {
    let kt = KTestable::build(DEMO_K, DEMO_SAMPLE)?;

    separator("Demo");
    println!("K-value = {DEMO_K}");
    for word in DEMO_SAMPLE.iter().sorted() {
        println!("{word:20}");
    }

    let expected = DEMO_SAMPLE
        .iter()
        .chain(DEMO_POSITIVE.iter())
        .map(|word| (*word, true))
        .chain(DEMO_NEGATIVE.iter().map(|word| (*word, false)))
        .sorted()
        .collect_vec();

    separator("Detect");
    let mut mismatches = vec![];
    for (word, classification) in expected {
        let result = kt.detect(word);
        println!("{word:20} = {}", if result { "True" } else { "False" });
        if result != classification {
            mismatches.push(word.to_string());
        }
    }
    Ok(mismatches)
}

fn detect(matches: &ArgMatches) -> Result<(), ConfigurationError> {
    let k = matches.get_one::<usize>("k").copied().unwrap_or(DEMO_K);
    let sample = matches
        .get_many::<String>("sample")
        .into_iter()
        .flatten()
        .collect_vec();
    debug!("learning from {} sample words with k = {k}", sample.len());

    let kt = KTestable::build(k, sample)?;
    info!(
        "learned automaton with {} states over alphabet {}",
        kt.automaton().size(),
        kt.statistics().alphabet().show()
    );

    if matches.get_flag("table") {
        println!("{}", kt.automaton().show());
    }

    for word in matches.get_many::<String>("words").into_iter().flatten() {
        let result = kt.detect(word);
        let shown = if result {
            "accepted".green().to_string()
        } else {
            "rejected".red().to_string()
        };
        println!("{:20} {shown}", word.as_string());
    }
    Ok(())
}

pub fn main() -> Result<(), ConfigurationError> {
    let matches = cli().get_matches();

    setup_logging(&matches);

    match matches.subcommand() {
        Some(("demo", _)) => {
            let mismatches = demo()?;
            if !mismatches.is_empty() {
                eprintln!("unexpected classification of {}", mismatches.join(", "));
                std::process::exit(1);
            }
        }
        Some(("detect", sub_matches)) => detect(sub_matches)?,
        _ => unreachable!("a subcommand is required"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn cli_is_consistent() {
        super::cli().debug_assert();
    }

    #[test]
    fn demo_has_no_mismatches() {
        assert_eq!(super::demo(), Ok(vec![]));
    }
}
