use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aquaplan::collector::PlannerForm;
use aquaplan::models::{Location, RiskProfile, Species};
use aquaplan::profile::EngineProfile;
use aquaplan::render;
use aquaplan::session::PlannerSession;

#[derive(Parser)]
#[command(name = "aquaplan")]
#[command(about = "Feasibility scoring and venture planning for small-scale fish farming")]
struct Cli {
    /// Engine parameter set to use (see `aquaplan profiles`)
    #[arg(long, global = true, default_value = "sumbar")]
    profile: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze feasibility and print the summary
    Analyze {
        /// Fish species, e.g. tilapia
        #[arg(long)]
        species: String,

        /// Administrative region, e.g. padang
        #[arg(long)]
        location: String,

        /// Starting capital in whole USD
        #[arg(long)]
        capital: i64,

        /// Risk profile: aggressive, moderate, or conservative
        #[arg(long)]
        risk: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the full wizard: analyze, approve, and print the detailed plan
    Plan {
        /// Fish species, e.g. tilapia
        #[arg(long)]
        species: String,

        /// Administrative region, e.g. padang
        #[arg(long)]
        location: String,

        /// Starting capital in whole USD
        #[arg(long)]
        capital: i64,

        /// Risk profile: aggressive, moderate, or conservative
        #[arg(long)]
        risk: String,

        /// Approve without prompting
        #[arg(short, long)]
        yes: bool,

        /// Print summary and plan as JSON (implies --yes)
        #[arg(long)]
        json: bool,
    },
    /// List the named engine parameter sets
    Profiles,
    /// List valid species, locations, and risk profiles
    Options,
}

/// Initialize tracing from RUST_LOG with a crate-scoped default.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "aquaplan=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_form(
    species: &str,
    location: &str,
    capital: i64,
    risk: &str,
) -> anyhow::Result<PlannerForm> {
    let species = Species::from_str(species).ok_or_else(|| {
        anyhow::anyhow!("unknown species '{species}'; run `aquaplan options` for valid values")
    })?;
    let location = Location::from_str(location).ok_or_else(|| {
        anyhow::anyhow!("unknown location '{location}'; run `aquaplan options` for valid values")
    })?;
    let risk = RiskProfile::from_str(risk).ok_or_else(|| {
        anyhow::anyhow!("unknown risk profile '{risk}'; run `aquaplan options` for valid values")
    })?;

    Ok(PlannerForm {
        species,
        location,
        capital,
        risk,
    })
}

/// Ask for a yes/no confirmation on stdin. Defaults to no.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let profile = EngineProfile::by_name(&cli.profile).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown profile '{}'; run `aquaplan profiles` for valid values",
            cli.profile
        )
    })?;

    match cli.command {
        Commands::Analyze {
            species,
            location,
            capital,
            risk,
            json,
        } => {
            let input = parse_form(&species, &location, capital, &risk)?.validate(profile)?;

            let mut session = PlannerSession::new(profile);
            let summary = session.submit(input);

            if json {
                println!("{}", serde_json::to_string_pretty(summary)?);
            } else {
                print!("{}", render::render_summary(summary));
            }
        }
        Commands::Plan {
            species,
            location,
            capital,
            risk,
            yes,
            json,
        } => {
            let input = parse_form(&species, &location, capital, &risk)?.validate(profile)?;

            let mut session = PlannerSession::new(profile);
            let summary = session.submit(input);

            if !json {
                print!("{}", render::render_summary(summary));
                println!();
            }

            if !(yes || json) && !confirm("Approve & generate detailed plan?")? {
                tracing::info!("summary left unapproved, no plan generated");
                return Ok(());
            }

            session.approve()?;
            if json {
                let output = serde_json::json!({
                    "summary": session.summary(),
                    "plan": session.plan(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let plan = session.plan().expect("approved above");
                print!("{}", render::render_plan(plan));
            }
        }
        Commands::Profiles => {
            for p in EngineProfile::all() {
                println!(
                    "{}: score range [{}, {}], capital minimum {}",
                    p.name,
                    p.score_floor,
                    p.score_ceiling,
                    render::format_usd(p.min_capital)
                );
            }
        }
        Commands::Options => {
            println!("species:   {}", Species::ALL.map(|s| s.as_str()).join(", "));
            println!("locations: {}", Location::ALL.map(|l| l.as_str()).join(", "));
            println!("risk:      {}", RiskProfile::ALL.map(|r| r.as_str()).join(", "));
        }
    }

    Ok(())
}
