use accord_core::{
    format_currency, guarantor_catalogue, renewal_schedule, search_guarantors, validate_step,
    AccordConfig, AnalysisSession, Clock, ContractFilter, ContractReview, ContractSubmission,
    FixedClock, GuarantorCategory, GuarantorQuery, GuarantorSort, PortfolioAggregator,
    SampleDataset, StatusFilter, SummaryLine, SystemClock, TypeFilter, WizardDraft, WizardFlow,
    WizardStep,
};
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "accord", version, about = "Accord contract dashboard")]
struct Cli {
    /// JSON file with runtime settings (renewal_limit, analysis_delay_ms, display_currency).
    #[arg(long, global = true, env = "ACCORD_CONFIG")]
    config: Option<PathBuf>,
    /// Emit machine-readable JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Pin "today" (YYYY-MM-DD) instead of reading the system clock.
    #[arg(long, global = true, env = "ACCORD_TODAY")]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filtered portfolio with KPIs.
    Portfolio {
        /// Contract status token, or `all`.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Exact contract type, or `all`.
        #[arg(long = "type", default_value = "all")]
        contract_type: TypeFilter,
        /// Case-insensitive match on title or guarantor.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Upcoming renewals across the whole portfolio.
    Renewals {
        /// Overrides `renewal_limit` from the config.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Browse the guarantor marketplace.
    Guarantors {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<GuarantorCategory>,
        /// rating, fee or speed.
        #[arg(long, default_value = "rating")]
        sort: GuarantorSort,
    },
    /// Review one contract.
    Review {
        id: String,
        /// Run the simulated AI analysis.
        #[arg(long, default_value_t = false)]
        analyze: bool,
    },
    /// Drive the creation wizard from a JSON draft.
    Wizard { draft: PathBuf },
}

fn load_config(cli: &Cli) -> anyhow::Result<AccordConfig> {
    match &cli.config {
        Some(path) => AccordConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(AccordConfig::default()),
    }
}

fn clock(cli: &Cli) -> Box<dyn Clock> {
    match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

fn load_dataset(today: NaiveDate) -> anyhow::Result<SampleDataset> {
    SampleDataset::relative_to(today)
        .with_context(|| format!("building the sample portfolio for {}", today))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_summary(lines: &[SummaryLine]) {
    let width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
    for line in lines {
        println!("  {:<width$}  {}", line.label, line.value);
    }
}

/// How far a loaded draft got through the wizard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WizardOutcome {
    reached_step: WizardStep,
    blocked_by: Option<String>,
    summary: Vec<SummaryLine>,
    submission: Option<ContractSubmission>,
}

fn run_wizard(path: &Path) -> anyhow::Result<WizardOutcome> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft {}", path.display()))?;
    let draft: WizardDraft =
        serde_json::from_str(&raw).with_context(|| format!("parsing draft {}", path.display()))?;

    let mut flow = WizardFlow::with_draft(draft);
    while flow.can_advance() {
        flow.advance()?;
    }

    let reached_step = flow.current_step();
    let summary = flow.summary();
    if reached_step != WizardStep::DocumentsReview {
        let blocked_by = validate_step(reached_step, flow.draft())
            .err()
            .map(|violation| violation.to_string());
        return Ok(WizardOutcome {
            reached_step,
            blocked_by,
            summary,
            submission: None,
        });
    }

    let submission = flow.complete()?;
    Ok(WizardOutcome {
        reached_step,
        blocked_by: None,
        summary,
        submission: Some(submission),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "accord=info,accord_core=info,warn".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let today = clock(&cli).today();
    let dataset = load_dataset(today)?;
    info!(%today, contracts = dataset.contracts.len(), "dataset loaded");

    match &cli.command {
        Command::Portfolio {
            status,
            contract_type,
            search,
        } => {
            let filter = ContractFilter::default()
                .with_status(*status)
                .with_type(contract_type.clone())
                .with_search(search.clone());
            let snapshot = PortfolioAggregator::snapshot(
                &dataset.contracts,
                &filter,
                today,
                config.renewal_limit,
            );
            if cli.json {
                return print_json(&snapshot);
            }

            println!(
                "{} contracts | total {} | avg progress {}% | {} active",
                snapshot.contracts.len(),
                format_currency(snapshot.total_value, &config.display_currency),
                snapshot.average_progress,
                snapshot.active_contracts
            );
            for record in &snapshot.contracts {
                println!(
                    "  [{:>3}] {:<34} {:<18} {:<10} {:>3}%  due {}",
                    record.id,
                    record.title,
                    record.contract_type,
                    record.status.label(),
                    record.progress,
                    record.due_date
                );
            }
            let counts: Vec<String> = snapshot
                .status_counts
                .iter()
                .map(|(status, count)| format!("{}={}", status.as_str(), count))
                .collect();
            println!("status: {}", counts.join(" "));
        }
        Command::Renewals { limit } => {
            let limit = limit.unwrap_or(config.renewal_limit);
            let renewals = renewal_schedule(&dataset.contracts, today, limit);
            if cli.json {
                return print_json(&renewals);
            }
            for entry in &renewals {
                let countdown = if entry.is_overdue() {
                    format!("{} days overdue", -entry.days_remaining)
                } else {
                    format!("{} days", entry.days_remaining)
                };
                println!("  {}  {:<34} {}", entry.due_date, entry.title, countdown);
            }
        }
        Command::Guarantors {
            search,
            category,
            sort,
        } => {
            let catalogue = guarantor_catalogue();
            let query = GuarantorQuery {
                search: search.clone(),
                category: *category,
                sort: *sort,
            };
            let hits = search_guarantors(&catalogue, &query);
            if cli.json {
                return print_json(&hits);
            }
            for guarantor in hits {
                println!(
                    "  {:<26} {:<16} {:.1}*  fee {:.1}%  {}h  up to {}{}",
                    guarantor.name,
                    guarantor.category.label(),
                    guarantor.rating,
                    guarantor.fee_percent,
                    guarantor.processing_hours,
                    format_currency(guarantor.max_coverage as f64, "USD"),
                    if guarantor.verified { "" } else { "  (unverified)" }
                );
            }
        }
        Command::Review { id, analyze } => {
            let review = ContractReview::open(&dataset, id, today)?;
            let report = if *analyze {
                Some(AnalysisSession::from_config(&config).run(&review).await?)
            } else {
                None
            };
            if cli.json {
                return print_json(&serde_json::json!({ "review": review, "analysis": report }));
            }

            let contract = &review.contract;
            println!("{} ({})", contract.title, contract.status.label());
            println!(
                "  value {} | progress {}% | {} days remaining | guarantor {}",
                format_currency(contract.value, &contract.currency),
                contract.progress,
                review.days_remaining,
                contract.guarantor
            );
            for activity in &review.activities {
                println!("  {}  {}", activity.timestamp, activity.summary);
            }
            for task in &review.tasks {
                println!("  task: {} (due {})", task.title, task.due_date);
            }
            if let Some(report) = report {
                for suggestion in &report.suggestions {
                    println!("  [{}] {}", suggestion.category, suggestion.title);
                }
            }
        }
        Command::Wizard { draft } => {
            let outcome = run_wizard(draft)?;
            if cli.json {
                return print_json(&outcome);
            }
            println!("reached step {}", outcome.reached_step);
            if let Some(reason) = &outcome.blocked_by {
                println!("  blocked: {}", reason);
            }
            print_summary(&outcome.summary);
            if let Some(submission) = &outcome.submission {
                println!("submitted {}", submission.submission_id);
            }
        }
    }

    Ok(())
}
