//! `parkside-console` -- terminal front end for the tenant portal client.
//!
//! Restores a persisted session (or walks the OTP login flow over stdin),
//! renders the dashboard summary with fallback values when the backend is
//! unreachable, then polls notifications until Ctrl-C.
//!
//! # Environment variables
//!
//! | Variable                       | Required | Default                        | Description                     |
//! |--------------------------------|----------|--------------------------------|---------------------------------|
//! | `PORTAL_API_URL`               | no       | `http://localhost:3000/api/v1` | Backend base URL                |
//! | `PORTAL_REQUEST_TIMEOUT_SECS`  | no       | `15`                           | Per-request timeout             |
//! | `PORTAL_CREDENTIALS_PATH`      | no       | `.parkside-session.json`       | Where the session blob lives    |
//! | `PORTAL_POLL_INTERVAL_SECS`    | no       | `15`                           | Notification polling interval   |

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkside_client::api;
use parkside_client::config::ClientConfig;
use parkside_client::http::PortalClient;
use parkside_client::presentation;
use parkside_core::dashboard::DashboardSummary;
use parkside_core::notification::{unread_count, Notification};
use parkside_session::{FileCredentialStore, LoginError, LoginFlow, SessionManager};
use parkside_sync::{QueryKey, QueryOptions, Resource, SyncClient, SyncConfig};

/// Default notification polling interval.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkside=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();

    let credentials_path = std::env::var("PORTAL_CREDENTIALS_PATH")
        .unwrap_or_else(|_| ".parkside-session.json".into());

    let poll_interval_secs: u64 = std::env::var("PORTAL_POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

    tracing::info!(
        base_url = %config.base_url,
        credentials_path = %credentials_path,
        poll_interval_secs,
        "Starting parkside-console",
    );

    let store = Arc::new(FileCredentialStore::new(credentials_path));
    let session = Arc::new(SessionManager::restore(store));
    let client = Arc::new(
        PortalClient::new(&config, session.clone()).context("failed to build HTTP client")?,
    );

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    if !session.is_authenticated() {
        login(client.clone(), session.clone(), &mut input).await?;
    }
    let user = session
        .user()
        .context("session should be authenticated after login")?;
    println!("Signed in as {} <{}>", user.name, user.email);

    let sync = Arc::new(SyncClient::new(SyncConfig::default()));

    // Dashboard: one query, rendered with fallbacks on failure.
    let dashboard_client = client.clone();
    let dashboard = sync.query(
        QueryOptions::new(QueryKey::scoped(Resource::Dashboard, user.id.clone())),
        move || {
            let client = dashboard_client.clone();
            async move { api::dashboard::summary(&client).await }
        },
    );

    let state = dashboard.settled().await;
    if let Some(error) = state.error() {
        let shown = presentation::present(error);
        println!("! {}", shown.message);
    }
    render_dashboard(&state.data_or_default());

    // Notifications: poll until Ctrl-C; unmounting stops the poller.
    let notifications_client = client.clone();
    let notifications = sync.query(
        QueryOptions::polling(
            QueryKey::scoped(Resource::Notifications, user.id),
            Duration::from_secs(poll_interval_secs),
        ),
        move || {
            let client = notifications_client.clone();
            async move { api::notifications::list(&client).await }
        },
    );

    println!("Watching notifications every {poll_interval_secs}s (Ctrl-C to quit)");
    let mut watch = notifications.watch();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = watch.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = watch.borrow_and_update().clone();
                if let Some(list) = state.data() {
                    render_notifications(list);
                } else if let Some(error) = state.error() {
                    println!("! {}", presentation::present(error).message);
                }
            }
        }
    }

    notifications.unmount();
    println!("Bye.");
    Ok(())
}

/// Walk the OTP login flow over stdin until the session is established.
async fn login(
    client: Arc<PortalClient>,
    session: Arc<SessionManager>,
    input: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<()> {
    let mut flow = LoginFlow::new(client, session);

    loop {
        println!("Email address:");
        let email = read_line(input).await?;
        match flow.submit_email(&email).await {
            Ok(()) => break,
            Err(e) => println!("! {}", describe(&e)),
        }
    }

    println!("A 6-digit code was sent to your email.");
    loop {
        println!("Code (or 'resend'):");
        let entry = read_line(input).await?;

        if entry.eq_ignore_ascii_case("resend") {
            match flow.resend_code().await {
                Ok(()) => println!("Code re-sent."),
                Err(e) => println!("! {}", describe(&e)),
            }
            continue;
        }

        match flow.submit_code(&entry).await {
            Ok(()) => return Ok(()),
            Err(e) => println!("! {}", describe(&e)),
        }
    }
}

/// One trimmed line of stdin.
async fn read_line(input: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<String> {
    let line = input
        .next_line()
        .await
        .context("failed to read stdin")?
        .context("stdin closed")?;
    Ok(line.trim().to_string())
}

/// User-facing text for a login failure, routing API errors through the
/// shared presentation table.
fn describe(error: &LoginError) -> String {
    match error {
        LoginError::Api(api_error) => presentation::present(api_error).message,
        other => other.to_string(),
    }
}

fn render_dashboard(summary: &DashboardSummary) {
    println!("--- Dashboard ---");
    println!("Open maintenance requests: {}", summary.open_maintenance_count);
    println!("Unread notifications:      {}", summary.unread_notification_count);
    match (summary.next_payment_amount, summary.next_payment_due) {
        (Some(amount), Some(due)) => println!("Next payment:              {amount:.2} due {due}"),
        _ => println!("Next payment:              none"),
    }
    match &summary.active_lease {
        Some(lease) => println!(
            "Active lease:              unit {} until {}",
            lease.unit_id, lease.end_date
        ),
        None => println!("Active lease:              none"),
    }
}

fn render_notifications(list: &[Notification]) {
    let unread = unread_count(list);
    println!("[notifications] {unread} unread of {}", list.len());
    for notification in list.iter().filter(|n| !n.is_read).take(5) {
        println!("  - {}: {}", notification.title, notification.message);
    }
}
