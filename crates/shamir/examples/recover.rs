// Recover the secrets of one or more share sets stored as JSON files.
//
// Each file is processed on its own: a malformed or inconsistent share set is
// reported and the remaining files are still processed.
//
// Logging goes to stderr and is controlled with `RUST_LOG`, e.g.
// `RUST_LOG=debug cargo run --example recover -- a.json b.json`.

use std::{env, error::Error, process::exit};

use console::style;
use shamir::{radix, Reconstructor, ShareSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn print_notice_and_exit(error: Option<String>) -> ! {
    println!(
        "{} Reconstruct Shamir secrets from radix-encoded shares",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} recover [-h] [--help] [--radix=<value>] <share_set.json>...",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} must be between 2 and 36 (default 10)",
        style("constraints:").magenta().bold(),
        style("radix").blue(),
    );
    if let Some(error) = error {
        println!("{} {}", style("     error:").red().bold(), error);
        exit(2);
    }
    exit(0);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let mut output_radix = 10;
    let mut files = Vec::new();
    for arg in &args {
        if arg.starts_with("--radix") {
            let parts: Vec<&str> = arg.rsplit('=').collect();
            match parts.first().and_then(|p| p.parse::<u32>().ok()) {
                Some(r) if parts.len() == 2 && (radix::MIN_BASE..=radix::MAX_BASE).contains(&r) => {
                    output_radix = r
                }
                _ => print_notice_and_exit(Some("Invalid `--radix` argument".to_string())),
            }
        } else if arg.starts_with("--") {
            print_notice_and_exit(Some(format!("Unrecognized argument: {}", arg)))
        } else {
            files.push(arg.clone());
        }
    }

    if files.is_empty() {
        print_notice_and_exit(Some("At least one share set is required".to_string()))
    }

    let reconstructor = Reconstructor::default();
    let mut failures = 0;
    for file in &files {
        let outcome = ShareSet::from_json_file(file).and_then(|set| {
            let secret = reconstructor.reconstruct(&set)?;
            Ok((set.name().to_string(), secret))
        });
        match outcome {
            Ok((name, secret)) => println!(
                "{} {}: {}",
                style("Secret").green().bold(),
                name,
                radix::encode(&secret, output_radix)?
            ),
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", style("Error").red().bold(), file, e);
            }
        }
    }

    if failures > 0 {
        exit(1);
    }
    Ok(())
}
