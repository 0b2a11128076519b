//! Open (creating if needed) the clinic database and report what it holds.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vet_clinic_core::config::DEFAULT_LOG_FILTER;
use vet_clinic_core::{Clinic, ClinicConfig, RecordKind};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ClinicConfig::from_env().context("invalid clinic configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let clinic = Clinic::open(&config).context("failed to open clinic database")?;

    for kind in RecordKind::ALL {
        let records = clinic
            .database()
            .count_records(kind)
            .with_context(|| format!("failed to count {kind} records"))?;
        tracing::info!(%kind, records, "table ready");
    }

    Ok(())
}
