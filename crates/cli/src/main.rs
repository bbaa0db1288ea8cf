use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::domain::preference::{AssetClass, PreferenceSet, Region, Sector};
use advisor_core::domain::profile::Profile;
use advisor_core::domain::recommendation::RecommendationRecord;
use advisor_core::llm::openai::OpenAiClient;
use advisor_core::prompt;
use advisor_core::recommender::Recommender;

#[derive(Debug, Parser)]
#[command(name = "advisor_cli")]
struct Args {
    /// Investor profile: Conservative, Moderate, Balanced, Growth or Aggressive.
    #[arg(long)]
    profile: Profile,

    /// Sector to focus on (optional, repeatable).
    #[arg(long = "sector")]
    sectors: Vec<Sector>,

    /// Geographic region to focus on (optional, repeatable).
    #[arg(long = "region")]
    regions: Vec<Region>,

    /// Asset class to focus on (optional, repeatable).
    #[arg(long = "asset-class")]
    asset_classes: Vec<AssetClass>,

    /// Print the prompt that would be sent and exit without calling the API.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let prefs = PreferenceSet {
        profile: args.profile,
        sectors: args.sectors,
        regions: args.regions,
        asset_classes: args.asset_classes,
    };

    println!("{}", profile_summary(prefs.profile));

    if args.dry_run {
        println!("\n{}", prompt::build_prompt(&prefs));
        return Ok(());
    }

    let client = OpenAiClient::from_settings(&settings)?;
    let recommender = Recommender::new(Arc::new(client));

    println!("\nFetching top ETFs based on your preferences...");

    match recommender.recommend(&prefs).await {
        Ok(set) => {
            if set.records.is_empty() {
                println!("No recommendations could be parsed from the reply.");
                return Ok(());
            }
            println!("\nRecommended ETFs");
            for record in &set.records {
                println!("{}", record_line(record));
            }
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(profile = prefs.profile.as_str(), error = %err, "recommendation run failed");
            Err(err)
        }
    }
}

fn profile_summary(profile: Profile) -> String {
    let details = profile.details();
    format!(
        "You have selected the {profile} profile.\n  Focus: {}\n  Risk Tolerance: {}\n  Investments: {}",
        details.focus, details.risk_tolerance, details.investments
    )
}

fn record_line(record: &RecommendationRecord) -> String {
    format!(
        "Ticker: {}, Name: {}, Link: {}",
        record.ticker, record.name, record.link
    )
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
