use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mulrace::chart::{render_sweep, ChartKind};
use mulrace::console::Console;
use mulrace::operand::parse_operand;
use mulrace::report::{ComparisonReport, SweepReport};
use mulrace::{compare, run, sweep, Algorithm, Comparison, Config};

mod cli;

use cli::{Cli, Commands};

fn print_comparison(comparison: &Comparison) {
    for algorithm in Algorithm::ALL.iter().copied() {
        let record = comparison.record(algorithm);
        println!("[{}]", algorithm.label());
        println!("Result = {}", record.product);
        println!("Recursive Calls = {}", record.call_count);
        println!("Time = {:.6} s", record.elapsed.as_secs_f64());
        println!();
    }
    println!("Speedup = {:.3}", comparison.speedup());
}

fn main() -> Result<()> {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Compare { x, y, json } => {
            let x = parse_operand(&x)?;
            let y = parse_operand(&y)?;
            let comparison = compare(&x, &y);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ComparisonReport::from(&comparison))?
                );
            } else {
                print_comparison(&comparison);
            }
        }
        Commands::Multiply { algorithm, x, y } => {
            let algorithm = algorithm.parse::<Algorithm>()?;
            let record = run(algorithm, &parse_operand(&x)?, &parse_operand(&y)?);
            println!("Result = {}", record.product);
            println!("Recursive Calls = {}", record.call_count);
            println!("Time = {:.6} s", record.elapsed.as_secs_f64());
        }
        Commands::Sweep {
            digits,
            seed,
            chart,
            json,
        } => {
            if let Some(digits) = digits {
                config.sweep.digit_lengths = digits;
            }
            if seed.is_some() {
                config.sweep.seed = seed;
            }
            config.validate()?;
            let chart = chart.map(|name| name.parse::<ChartKind>()).transpose()?;
            let mut rng = config.sweep.rng();
            let sweep = sweep(&config.sweep.digit_lengths, &mut rng)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&SweepReport::from(&sweep))?
                );
            }
            let kinds = match chart {
                Some(kind) => vec![kind],
                None if json => vec![],
                None => vec![ChartKind::Combined],
            };
            for kind in kinds {
                for chart in render_sweep(kind, &sweep) {
                    println!("{}", chart);
                }
            }
        }
        Commands::Interactive => {
            config.validate()?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Console::new(stdin.lock(), stdout.lock(), config.sweep).run()?;
        }
        #[cfg(feature = "server")]
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tokio::runtime::Runtime::new()?.block_on(mulrace::server::run(config))?;
        }
    }

    Ok(())
}
