//! Command Line Interface for the trade simulator.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trade_sim_domain::enums::StreakPolicy;
use trade_sim_domain::value_objects::{SimulationParameters, SimulationRun};
use trade_sim_simulation::draw::UniformDraws;
use trade_sim_simulation::simulator::TradeSimulator;

#[derive(Parser, Debug)]
#[command(name = "trade-sim")]
#[command(about = "Simulate compounded trade outcomes and report their statistics", long_about = None)]
struct Cli {
    /// Initial account size
    #[arg(long, env = "TRADE_SIM_SIZE", default_value = "1000")]
    size: Decimal,

    /// Number of trades to simulate
    #[arg(long, env = "TRADE_SIM_TOTAL", default_value_t = 100)]
    total: u32,

    /// Percent of the current balance risked per trade
    #[arg(long, env = "TRADE_SIM_RISK", default_value = "2")]
    risk: Decimal,

    /// Percent chance that a trade wins
    #[arg(long, env = "TRADE_SIM_WINRATE", default_value = "70")]
    winrate: Decimal,

    /// Win payout relative to the amount risked
    #[arg(long, env = "TRADE_SIM_RISKREWARD", default_value = "2")]
    riskreward: Decimal,

    /// Seed for reproducible runs
    #[arg(long, env = "TRADE_SIM_SEED")]
    seed: Option<u64>,

    /// How consecutive wins and losses are counted
    #[arg(long, value_enum, default_value_t = StreakArg::SecondOccurrence)]
    streak_policy: StreakArg,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Include the account and equity series in the JSON output
    #[arg(long, requires = "json")]
    series: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StreakArg {
    /// Streaks register from their second trade onward
    SecondOccurrence,
    /// Streaks count every trade in them
    FullLength,
}

impl From<StreakArg> for StreakPolicy {
    fn from(arg: StreakArg) -> Self {
        match arg {
            StreakArg::SecondOccurrence => StreakPolicy::SecondOccurrence,
            StreakArg::FullLength => StreakPolicy::FullLength,
        }
    }
}

impl Cli {
    fn parameters(&self) -> Result<SimulationParameters> {
        SimulationParameters::new(
            self.size,
            self.total,
            self.risk,
            self.winrate,
            self.riskreward,
        )
        .context("Invalid simulation parameters")
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.parameters()?;
    let simulator = TradeSimulator::new(params).with_streak_policy(cli.streak_policy.into());

    let run = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded draws");
            simulator.run(&mut UniformDraws::seeded(seed))
        }
        None => simulator.run(&mut UniformDraws::from_os_rng()),
    }
    .context("Simulation failed")?;

    warn_undefined(&run);

    if cli.json {
        let output = json_output(&run, cli.series);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(&run);
    }

    Ok(())
}

fn warn_undefined(run: &SimulationRun) {
    let report = run.report();
    let checks = [
        report.average_win(),
        report.average_loss(),
        report.risk_reward_ratio(),
        report.profit_factor(),
    ];
    for err in checks.into_iter().filter_map(Result::err) {
        warn!(error = %err, "Statistic undefined for this run");
    }
}

fn print_table(run: &SimulationRun) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for r in run.report().rows() {
        table.add_row(row![r.label, ":", r.value]);
    }

    println!("--- Trading Results ---\n");
    table.printstd();
    println!();
    println!("Results are compounded. Spread and commissions are not calculated.");
}

fn series(values: &[Decimal]) -> Value {
    values
        .iter()
        .map(|v| v.to_f64().map_or(Value::Null, Value::from))
        .collect()
}

fn json_output(run: &SimulationRun, include_series: bool) -> Value {
    let mut output = json!({ "data": run.report().to_json_map() });
    if include_series {
        output["accounts"] = series(run.accounts());
        output["net_profits"] = series(run.net_profits());
    }
    output
}
