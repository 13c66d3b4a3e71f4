// Dealerless threshold sharing of a summed secret, timed phase by phase.

mod util;

use std::{env, error::Error, process::exit, time::Duration};

use console::style;
use rand::thread_rng;
use shamir::{
    threshold::{ShareManager, ThresholdParametersBuilder, DEFAULT_MODULUS},
    Context, Poly,
};
use tracing_subscriber::EnvFilter;
use util::{
    timed,
    timeit::{timeit, timeit_n},
    DisplayDuration,
};

fn print_notice_and_exit(error: Option<String>) {
    println!(
        "{} Dealerless threshold sharing of the sum of the parties' secrets",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} threshold_sum [-h] [--help] [--num_parties=<value>] [--threshold=<value>] [--degree=<value>]",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} and {} must be at least 1, and {} at most {}",
        style("constraints:").magenta().bold(),
        style("num_parties").blue(),
        style("threshold").blue(),
        style("threshold").blue(),
        style("num_parties").blue(),
    );
    println!(
        "{} setup and the contribution table hold about {} × ({} + {}) × {} × 8 bytes",
        style("    memory:").magenta().bold(),
        style("num_parties").blue(),
        style("threshold").blue(),
        style("num_parties").blue(),
        style("degree").blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
    }
    exit(0);
}

fn parse_arg(arg: &str, name: &str) -> usize {
    let a: Vec<&str> = arg.rsplit('=').collect();
    match (a.len(), a[0].parse::<usize>()) {
        (2, Ok(value)) => value,
        _ => {
            print_notice_and_exit(Some(format!("Invalid `--{name}` argument")));
            unreachable!()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    // Print the help if requested.
    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut num_parties = 200;
    let mut threshold = 180;
    let mut degree = 256;

    for arg in &args {
        if arg.starts_with("--num_parties") {
            num_parties = parse_arg(arg, "num_parties");
        } else if arg.starts_with("--threshold") {
            threshold = parse_arg(arg, "threshold");
        } else if arg.starts_with("--degree") {
            degree = parse_arg(arg, "degree");
        } else {
            print_notice_and_exit(Some(format!("Unrecognized argument: {arg}")))
        }
    }

    if num_parties == 0 || threshold == 0 || degree == 0 {
        print_notice_and_exit(Some(
            "Parties, threshold and degree must be nonzero".to_string(),
        ))
    }
    if threshold > num_parties {
        print_notice_and_exit(Some(
            "Threshold must be at most the number of parties".to_string(),
        ))
    }

    println!("# Dealerless threshold sharing");
    println!("\tnum_parties = {num_parties}");
    println!("\tthreshold = {threshold}");
    println!("\tdegree = {degree}");

    let params = timeit!(
        "Parameters generation",
        ThresholdParametersBuilder::new()
            .set_parties(num_parties)
            .set_threshold(threshold)
            .set_modulus(DEFAULT_MODULUS)
            .build_arc()?
    );
    let ctx = Context::new_arc(DEFAULT_MODULUS, degree)?;
    let manager = ShareManager::new(params);
    let mut rng = thread_rng();

    // Each party samples `threshold` secret polynomials, its dealer polynomial.
    let (parties, elapsed_setup) = timed(|| manager.setup::<Poly, _>(&ctx, &mut rng));
    let parties = parties?;

    // Every dealer evaluates its polynomial at every party's point.
    let (contributions, elapsed_distribution) = timed(|| manager.contributions(&parties));
    let contributions = contributions?;

    // Every party sums what it received into its combined share.
    let (shares, elapsed_aggregation) = timed(|| manager.aggregate(&contributions, &parties));
    let shares = shares?;
    drop(contributions);

    // Any `threshold` parties recover the sum of all dealers' secrets.
    let (secret, elapsed_reconstruction) =
        timed(|| manager.reconstruct(&shares[..threshold]));
    let secret = secret?;

    let per_party = |d: Duration| DisplayDuration(d / num_parties as u32);
    println!(
        "> Setup\t\tdone (total: {}, party: {})",
        DisplayDuration(elapsed_setup),
        per_party(elapsed_setup)
    );
    println!(
        "> Distribution\tdone (total: {}, party: {})",
        DisplayDuration(elapsed_distribution),
        per_party(elapsed_distribution)
    );
    println!(
        "> Aggregation\tdone (total: {}, party: {})",
        DisplayDuration(elapsed_aggregation),
        per_party(elapsed_aggregation)
    );
    println!(
        "> Reconstruction\tdone (total: {})",
        DisplayDuration(elapsed_reconstruction)
    );

    // Check the result against the sum of the dealers' own secrets.
    let expected = manager.global_secret(&parties)?;
    if secret == expected {
        println!("{}", style("> Reconstruction matches the global secret").green());
    } else {
        println!("{}", style("> Reconstruction does not match").red().bold());
        exit(1);
    }

    Ok(())
}
