//! Command-line shell over the typomatch library: seed a corpus from a
//! file, run single or batch queries, analyze inputs, or drop into an
//! interactive loop.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use typomatch::matcher::{
    DomainMatcher, DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_RESULTS,
};

#[derive(Parser)]
#[command(name = "typomatch", about = "Fuzzy domain-label matching")]
struct Args {
    /// File with one valid domain label per line.
    #[arg(short, long)]
    domains: PathBuf,

    /// Single query to match against the corpus.
    #[arg(short, long, conflicts_with_all = ["batch", "analyze", "interactive"])]
    query: Option<String>,

    /// Queries to match in one batch.
    #[arg(short, long, num_args = 1.., conflicts_with_all = ["analyze", "interactive"])]
    batch: Vec<String>,

    /// Produce a detailed analysis report for this input.
    #[arg(short, long, conflicts_with = "interactive")]
    analyze: Option<String>,

    /// Start an interactive matching session.
    #[arg(short, long)]
    interactive: bool,

    /// Minimum score for a candidate to be reported.
    #[arg(short, long, default_value_t = DEFAULT_MATCH_THRESHOLD)]
    threshold: f64,

    /// Maximum number of reported candidates per query.
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Write the JSON report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut matcher = DomainMatcher::default();
    matcher.add_domains(load_domains(&args.domains)?);

    if matcher.domains().is_empty() {
        anyhow::bail!("no usable domains in {}", args.domains.display());
    }

    if let Some(query) = &args.query {
        let results = matcher.matches(query, args.threshold, args.max_results);
        return emit(&serde_json::to_string_pretty(&results)?, args.output.as_deref());
    }

    if !args.batch.is_empty() {
        let results = matcher.batch_match(&args.batch, args.threshold);
        return emit(&serde_json::to_string_pretty(&results)?, args.output.as_deref());
    }

    if let Some(input) = &args.analyze {
        let analysis = matcher.analyze(input);
        return emit(&serde_json::to_string_pretty(&analysis)?, args.output.as_deref());
    }

    if args.interactive {
        return interactive_loop(&mut matcher, args.threshold, args.max_results);
    }

    anyhow::bail!("nothing to do; pass --query, --batch, --analyze or --interactive")
}

fn load_domains(path: &std::path::Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read domain list {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

fn emit(report: &str, output: Option<&std::path::Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("failed to write report to {}", path.display())),
        None => {
            println!("{report}");
            Ok(())
        }
    }
}

fn interactive_loop(
    matcher: &mut DomainMatcher,
    threshold: f64,
    max_results: usize,
) -> Result<()> {
    println!("typomatch interactive mode");
    println!("type a domain to match it; 'help' for commands, 'quit' to exit");
    println!("{} domains loaded", matcher.domains().len());

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" | "q" => break,
            "help" => {
                println!("commands:");
                println!("  help             show this help");
                println!("  stats            matcher statistics");
                println!("  domains          list the corpus");
                println!("  analyze <input>  detailed analysis of an input");
                println!("  quit             exit");
                println!("anything else is matched against the corpus");
            }
            "stats" => {
                println!("{}", serde_json::to_string_pretty(&matcher.statistics())?);
            }
            "domains" => {
                for (i, domain) in matcher.domains().iter().enumerate() {
                    println!("{:3}. {domain}", i + 1);
                }
            }
            _ => {
                if let Some(rest) = input.strip_prefix("analyze ") {
                    let analysis = matcher.analyze(rest.trim());
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                    continue;
                }

                let results = matcher.matches(input, threshold, max_results);
                if results.is_empty() {
                    println!("no match above threshold {threshold}");
                    continue;
                }

                for result in &results {
                    println!("{:<20} {:.4}", result.domain, result.score);
                }

                if let Some(target) = matcher.should_redirect(input, 0.8) {
                    println!("-> would auto-redirect to '{target}'");
                }
            }
        }
    }

    Ok(())
}
