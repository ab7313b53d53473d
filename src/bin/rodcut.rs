use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

use rodcut_dp::batching::{optimize_printing, PrintJob, PrinterConstraints};
use rodcut_dp::{CutPlan, Price, RodCutter, RodProblem, Strategy};

#[derive(Parser)]
#[command(name = "rodcut")]
#[command(about = "Rod-cutting optimizer with cross-checked DP strategies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one instance with a single strategy
    Solve {
        /// Rod length
        #[arg(long, allow_hyphen_values = true)]
        length: i64,
        /// Comma-separated prices for piece lengths 1..=length
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        prices: Vec<Price>,
        /// memoized or tabulated
        #[arg(long, default_value_t = Strategy::Tabulated)]
        strategy: Strategy,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve with both strategies and fail if they disagree
    Compare {
        #[arg(long, allow_hyphen_values = true)]
        length: i64,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        prices: Vec<Price>,
    },
    /// Batch print jobs from a JSON file
    Batch {
        /// JSON array of {id, volume, priority, print_time}
        #[arg(long)]
        jobs: PathBuf,
        #[arg(long)]
        max_volume: f64,
        #[arg(long)]
        max_items: usize,
    },
    /// Time both strategies over growing rods and check they agree
    Probe {
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Largest length also checked against exhaustive enumeration
        #[arg(long, default_value_t = 16)]
        verify_limit: usize,
        /// Largest length handed to the recursive solver
        #[arg(long, default_value_t = 4096)]
        max_memo_length: usize,
    },
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rodcut: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Solve {
            length,
            prices,
            strategy,
            json,
        } => {
            let plan = RodCutter::new(strategy).solve(length, &prices)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(strategy, &plan);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare { length, prices } => {
            let problem = RodProblem::new(length, &prices)?;
            let memo = Strategy::Memoized.solve(&problem);
            let table = Strategy::Tabulated.solve(&problem);
            print_plan(Strategy::Memoized, &memo);
            print_plan(Strategy::Tabulated, &table);
            if memo == table {
                println!("strategies agree");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("strategies disagree");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Batch {
            jobs,
            max_volume,
            max_items,
        } => {
            let raw = fs::read_to_string(&jobs)
                .with_context(|| format!("reading jobs from {}", jobs.display()))?;
            let jobs: Vec<PrintJob> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing jobs from {}", jobs.display()))?;
            let constraints = PrinterConstraints {
                max_volume,
                max_items,
            };
            let schedule = optimize_printing(&jobs, &constraints);
            println!("{}", serde_json::to_string_pretty(&schedule)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Probe {
            format,
            verify_limit,
            max_memo_length,
        } => probe(format, verify_limit, max_memo_length),
    }
}

fn print_plan(strategy: Strategy, plan: &CutPlan) {
    println!("{strategy}:");
    println!("  max profit:     {}", plan.max_profit);
    println!("  cuts:           {:?}", plan.cuts);
    println!("  number of cuts: {}", plan.number_of_cuts);
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Serialize)]
struct Measurement {
    strategy: Strategy,
    length: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    max_profit: Price,
    pieces: usize,
    status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

const SIZES: &[usize] = &[4, 8, 12, 16, 64, 256, 1024, 2048, 4096, 8192];

fn probe(format: OutputFormat, verify_limit: usize, max_memo_length: usize) -> Result<ExitCode> {
    eprintln!("\n{}", "=".repeat(72));
    eprintln!("rodcut probe: memoized vs tabulated");
    eprintln!("{}", "=".repeat(72));
    eprintln!("  • every size: both strategies must return the same plan");
    eprintln!("  • sizes <= {verify_limit}: profit checked against exhaustive enumeration");
    eprintln!("  • memoized runs only up to length {max_memo_length}");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let total = SIZES.len();

    for (idx, &len) in SIZES.iter().enumerate() {
        eprintln!("[{}/{}] length {}", idx + 1, total, len);
        let prices = deterministic_prices(len);
        let length = i64::try_from(len).context("probe length does not fit in i64")?;
        let problem = RodProblem::new(length, &prices)?;
        let baseline = (len <= verify_limit).then(|| exhaustive_best(&prices));

        let mut plans = Vec::new();
        for strategy in Strategy::ALL {
            if strategy == Strategy::Memoized && len > max_memo_length {
                continue;
            }
            let before = rss_kib(&mut sys);
            let start = Instant::now();
            let plan = strategy.solve(&problem);
            let wall_s = start.elapsed().as_secs_f64();
            let after = rss_kib(&mut sys);

            let (status, detail) = verify(&plan, len, baseline);
            eprintln!(
                "      {} {:<9} profit={} pieces={} time={:.4}s status={}",
                status.icon(),
                strategy.solver().name(),
                plan.max_profit,
                plan.cuts.len(),
                wall_s,
                status.label()
            );
            measurements.push(Measurement {
                strategy,
                length: len,
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                max_profit: plan.max_profit,
                pieces: plan.cuts.len(),
                status,
                detail,
            });
            plans.push(plan);
        }

        if plans.windows(2).any(|w| w[0] != w[1]) {
            if let Some(m) = measurements.last_mut() {
                m.status = VerificationStatus::Failed;
                m.detail = Some("memoized and tabulated plans differ".to_string());
            }
            eprintln!("      ✗ strategies disagree at length {len}");
        }
    }

    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();

    eprintln!();
    if failed == 0 {
        eprintln!("✓ all checks passed");
    } else {
        eprintln!("✗ {failed} check(s) failed");
    }
    eprintln!();

    match format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&measurements)?),
    }

    if failed > 0 {
        bail!("{failed} probe check(s) failed");
    }
    Ok(ExitCode::SUCCESS)
}

fn verify(
    plan: &CutPlan,
    len: usize,
    baseline: Option<Price>,
) -> (VerificationStatus, Option<String>) {
    if plan.total_length() != len {
        return (
            VerificationStatus::Failed,
            Some(format!("pieces sum to {}", plan.total_length())),
        );
    }
    match baseline {
        Some(expected) if expected == plan.max_profit => (VerificationStatus::Passed, None),
        Some(expected) => (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {}", plan.max_profit)),
        ),
        None => (VerificationStatus::NotChecked, None),
    }
}

fn write_csv(measurements: &[Measurement]) {
    println!("strategy,length,wall_s,rss_delta_kib,max_profit,pieces,status,detail");
    for m in measurements {
        println!(
            "{},{},{:.4},{},{},{},{},\"{}\"",
            m.strategy,
            m.length,
            m.wall_s,
            m.rss_delta_kib,
            m.max_profit,
            m.pieces,
            m.status.label(),
            m.detail.as_deref().unwrap_or("").replace('"', "'")
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<10}  {:>7}  {:>10}  {:>13}  {:>12}  {:>7}  {:<12}  detail",
        "strategy", "length", "wall_s", "rss_delta_kib", "max_profit", "pieces", "status"
    );
    println!("{}", "-".repeat(90));
    for m in measurements {
        println!(
            "{:<10}  {:>7}  {:>10.4}  {:>13}  {:>12}  {:>7}  {:<12}  {}",
            m.strategy.as_str(),
            m.length,
            m.wall_s,
            m.rss_delta_kib,
            m.max_profit,
            m.pieces,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory() / 1024)
        .unwrap_or(0)
}

/// Mildly superlinear prices with a periodic bump, so optima mix piece sizes.
fn deterministic_prices(len: usize) -> Vec<Price> {
    (1..=len as Price)
        .map(|k| 3 * k + (k * k) % 7 + if k % 5 == 0 { 4 } else { 0 })
        .collect()
}

/// Best profit over every composition of `prices.len()`, by brute force.
fn exhaustive_best(prices: &[Price]) -> Price {
    fn go(remaining: usize, prices: &[Price]) -> Price {
        if remaining == 0 {
            return 0;
        }
        (1..=remaining)
            .map(|i| prices[i - 1] + go(remaining - i, prices))
            .max()
            .unwrap_or(0)
            .max(0)
    }
    go(prices.len(), prices)
}
