// ==========================================
// GradPath Planner - CLI entry point
// ==========================================
// Usage:
//   gradpath-planner <snapshot.json> [--student ID]
//       [--max-credits N] [--summer | --no-summer]
//       [--simulate-max-credits N] [--simulate-summer | --simulate-no-summer]
//       [--config PATH] [--log-json]
//
// Prints the plan (and the simulation, when any --simulate-* flag is given)
// as pretty JSON on stdout. Logs go to stderr.
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Local;
use gradpath_planner::config::ConfigManager;
use gradpath_planner::logging::{self, LogFormat};
use gradpath_planner::{
    InMemoryPlanningSource, PlanOrchestrator, PlanRequest, PlanSimulator, SimulationOverrides,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    snapshot: PathBuf,
    student_id: Option<String>,
    max_credits: Option<u32>,
    summer_ok: Option<bool>,
    simulation: SimulationOverrides,
    config: Option<PathBuf>,
    log_json: bool,
}

impl CliArgs {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut snapshot: Option<PathBuf> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--student" => parsed.student_id = Some(value_of(&mut args, &arg)?),
                "--max-credits" => parsed.max_credits = Some(number_of(&mut args, &arg)?),
                "--summer" => parsed.summer_ok = Some(true),
                "--no-summer" => parsed.summer_ok = Some(false),
                "--simulate-max-credits" => {
                    parsed.simulation.max_credits = Some(number_of(&mut args, &arg)?)
                }
                "--simulate-summer" => parsed.simulation.summer_ok = Some(true),
                "--simulate-no-summer" => parsed.simulation.summer_ok = Some(false),
                "--config" => parsed.config = Some(PathBuf::from(value_of(&mut args, &arg)?)),
                "--log-json" => parsed.log_json = true,
                flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
                path => {
                    if snapshot.is_some() {
                        bail!("unexpected argument: {}", path);
                    }
                    snapshot = Some(PathBuf::from(path));
                }
            }
        }

        parsed.snapshot = snapshot.context("missing <snapshot.json> argument")?;
        Ok(parsed)
    }
}

fn value_of<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{} expects a value", flag))
}

fn number_of<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<u32> {
    let raw = value_of(args, flag)?;
    raw.parse::<u32>()
        .with_context(|| format!("{} expects a non-negative integer, got {:?}", flag, raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    logging::init_with_format(if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    tracing::info!(version = gradpath_planner::VERSION, "{} starting", gradpath_planner::APP_NAME);

    let config = match &args.config {
        Some(path) => ConfigManager::load(path),
        None => ConfigManager::from_default_location(),
    }
    .context("failed to load planner config")?;
    let config = Arc::new(config);

    let source = InMemoryPlanningSource::from_json_file(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let student_id = match args
        .student_id
        .clone()
        .or_else(|| source.snapshot().student_id().map(str::to_string))
    {
        Some(id) => id,
        None => bail!("snapshot has no student; pass --student ID"),
    };

    let request = PlanRequest {
        student_id,
        max_credits: args.max_credits,
        summer_ok: args.summer_ok,
    };
    let today = Local::now().date_naive();

    let orchestrator = PlanOrchestrator::new(config.clone());
    let plan = orchestrator.generate_plan(&source, &request, today).await?;

    let simulation = if args.simulation.is_empty() {
        None
    } else {
        let simulator = PlanSimulator::new(config);
        Some(
            simulator
                .simulate(&source, &plan, &args.simulation, today)
                .await?,
        )
    };

    let output = json!({
        "plan": plan,
        "simulation": simulation,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
