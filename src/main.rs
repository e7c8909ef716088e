//! UAEU Media Studio Email Service
//!
//! Sends reservation and equipment borrow notifications over SMTP.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use media_studio_mailer::{
    api,
    config::{AppConfig, LoggingConfig, MailTransportKind},
    mailer::{LogMailSender, MailSender, SmtpMailSender, TransportStatus},
    notifications::NotificationKind,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting UAEU Media Studio Email Service v{}", env!("CARGO_PKG_VERSION"));

    let (sender, mail_status): (Arc<dyn MailSender>, TransportStatus) = match config.email.transport {
        MailTransportKind::Smtp => {
            let smtp = SmtpMailSender::new(&config.email)?;
            // A failed check is reported but does not stop the server
            let status = match smtp.verify().await {
                Ok(()) => {
                    tracing::info!(sender = %config.email.smtp_from, "SMTP server is ready to send emails");
                    TransportStatus::Connected
                }
                Err(e) => {
                    tracing::error!("SMTP connection failed: {}", e);
                    TransportStatus::Unreachable
                }
            };
            let sender: Arc<dyn MailSender> = Arc::new(smtp);
            (sender, status)
        }
        MailTransportKind::Log => {
            tracing::warn!("Log mail transport selected, emails will not be delivered");
            let sender: Arc<dyn MailSender> = Arc::new(LogMailSender);
            (sender, TransportStatus::Disabled)
        }
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    tracing::info!(
        provider = %config.email.provider,
        sender = %config.email.smtp_from,
        admin = %config.email.admin_email,
        "Mail settings loaded"
    );

    let services = Services::new(sender, config.email.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        mail_status,
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    for kind in NotificationKind::ALL {
        tracing::info!("  POST /api/email/{}", kind);
    }
    tracing::info!("  GET  /api/health");

    // In-flight requests are dropped on shutdown, not drained
    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        signal = shutdown_signal() => tracing::warn!("{} received, shutting down", signal),
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("media_studio_mailer={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}
