//! Admin console example
//!
//! Wires the admin pipeline to a terminal sink: fetches orders and reviews
//! once, prints the rendered tables, then keeps polling until Ctrl-C.
//!
//! Run: BARBER_API_URL=http://localhost:5000 cargo run --example admin_console

use std::sync::Arc;

use barber_client::view::{OrderRow, ReviewRow};
use barber_client::{
    AdminPipeline, AdminSink, ClientConfig, LoginGate, Pipeline, PollingScheduler, TracingNotifier,
};

struct ConsoleSink;

impl AdminSink for ConsoleSink {
    fn replace_orders(&self, rows: Vec<OrderRow>, stats: barber_client::stats::OrderStats) {
        println!(
            "\n== Orders ({} total, {} new, {} today, {} completed) ==",
            stats.total, stats.new_orders, stats.today, stats.completed
        );
        for row in rows {
            println!(
                "#{:<4} {} {}  {:<20} {:<18} {:<28} [{}]",
                row.id, row.date, row.time, row.name, row.phone, row.service, row.status_label
            );
        }
    }

    fn replace_reviews(&self, rows: Vec<ReviewRow>) {
        println!("\n== Reviews ==");
        for row in rows {
            println!(
                "#{:<4} {} {} {:<16} [{}] {}",
                row.id, row.date, row.stars, row.name, row.status_label, row.text
            );
        }
    }
}

struct ConsoleLoginGate;

impl LoginGate for ConsoleLoginGate {
    fn redirect_to_login(&self) {
        eprintln!("Authentication required: log in at /admin and set BARBER_SESSION_COOKIE");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut config = ClientConfig::from_env();
    if let Ok(cookie) = std::env::var("BARBER_SESSION_COOKIE") {
        config = config.with_session_cookie(cookie);
    }

    let api = Arc::new(config.build_rest_client()?);
    let pipeline = Arc::new(AdminPipeline::new(
        api,
        Arc::new(ConsoleSink),
        Arc::new(TracingNotifier),
        Arc::new(ConsoleLoginGate),
    ));

    let (scheduler, handle) = PollingScheduler::from_config(
        pipeline.clone() as Arc<dyn Pipeline>,
        &config,
    );
    let scheduler_task = tokio::spawn(scheduler.run());

    // initial render; later runs come from the scheduler ticks
    handle.refresh_now();

    tokio::signal::ctrl_c().await?;
    handle.stop();
    scheduler_task.await?;
    Ok(())
}
