use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use executive_skills::adapters::http::{app_router, AssessmentHandlers};
use executive_skills::adapters::{
    InMemoryAssessmentRepository, PostgresAssessmentRepository, ReportTemplate, ResendConfig,
    ResendMailer, WebhookSheetExporter,
};
use executive_skills::application::handlers::{GetAssessmentHandler, SubmitAssessmentHandler};
use executive_skills::config::AppConfig;
use executive_skills::ports::{AssessmentRepository, ReportMailer, SheetExporter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Starting executive skills assessment service"
    );

    let repository: Arc<dyn AssessmentRepository> = match config.database.url() {
        Some(url) => {
            let pool = executive_skills::adapters::postgres::connect(url, &config.database)
                .await
                .context("failed to connect to database")?;
            Arc::new(PostgresAssessmentRepository::new(pool))
        }
        None => {
            tracing::warn!("No database URL configured - assessments are kept in memory");
            Arc::new(InMemoryAssessmentRepository::new())
        }
    };

    if config.email.api_key().is_none() {
        tracing::warn!("RESEND_API_KEY not set - reports will not be emailed");
    }
    let template = ReportTemplate::new(
        config.sheets.time_zone,
        config.email.reply_to.clone(),
        config.assessment.default_school.clone(),
    );
    let mailer: Arc<dyn ReportMailer> = Arc::new(
        ResendMailer::new(ResendConfig::from(&config.email), template)
            .context("failed to build email client")?,
    );

    if config.sheets.webhook_url().is_none() {
        tracing::warn!("Spreadsheet webhook not set - results will not be exported");
    }
    let sheets: Arc<dyn SheetExporter> = Arc::new(
        WebhookSheetExporter::from_config(&config.sheets)
            .context("failed to build spreadsheet client")?,
    );

    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(
            repository.clone(),
            mailer,
            sheets,
            config.assessment.default_school.clone(),
        )),
        Arc::new(GetAssessmentHandler::new(repository)),
    );
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
