//! Poultry weighing reminders
//!
//! Seeds an in-memory store with an example batch and logs today's weighing
//! reminders, overdue weighings and the batch report.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poultry_weighing_service::seed::{seed_example_data, EXAMPLE_BATCH_ID};
use poultry_weighing_service::services::ReportingService;
use poultry_weighing_service::store::MemoryStore;
use poultry_weighing_service::{AppState, Config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pw_reminders=debug,poultry_weighing_service=debug,shared=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting poultry weighing reminders");
    tracing::info!("Environment: {}", config.environment);

    let state = AppState::new(MemoryStore::shared(), config);

    let now = Utc::now();
    let today = now.date_naive();
    seed_example_data(&state, today, now)?;

    let reminders = state.weighings.upcoming_reminders(None, today)?;
    tracing::info!(
        "{} weighings due in the next {} days",
        reminders.len(),
        state.config.schedule.lookahead_days
    );
    for reminder in &reminders {
        tracing::info!(
            "{} week {}: due {} (in {} days), ideal {}g",
            reminder.batch_name,
            reminder.event.week,
            reminder.event.expected_date,
            reminder.days_until,
            reminder.event.ideal_weight_grams
        );
    }

    for event in state.weighings.overdue_weighings(today)? {
        tracing::warn!("Overdue weighing {} (expected {})", event.id, event.expected_date);
    }

    let summary = state.reporting.batch_summary(EXAMPLE_BATCH_ID)?;
    tracing::info!(
        "Batch {}: {}/{} weighings recorded, {} need attention",
        summary.batch_id,
        summary.completed,
        summary.scheduled,
        summary.needing_attention
    );

    let report = state.reporting.batch_report(EXAMPLE_BATCH_ID)?;
    println!("{}", ReportingService::export_to_csv(&report)?);

    Ok(())
}
