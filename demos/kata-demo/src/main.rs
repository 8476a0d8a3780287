mod config;

use std::io::{self, Write};
use std::time::Duration;

use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use config::DemoConfig;
use kata_core::{Car, Motion, OrderedSet, Vehicle, delay, motion::start_all};
use kata_model::{Entry, format_timestamp};
use kata_observe::{LoggerConfig, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    let log_cfg = LoggerConfig::from_env()?;
    init_logger(&log_cfg)?;
    let demo = DemoConfig::from_env()?;
    debug!(?demo, "demo configured");

    run(&demo, &mut io::stdout().lock()).await?;

    debug!("done");
    Ok(())
}

/// Runs every step, writing the human-readable dump to `out`.
async fn run<W: Write>(demo: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    // 2) Ordered unique collection
    let mut staff = OrderedSet::new();
    for entry in [
        Entry::new(101, "Raj"),
        Entry::new(100, "Sara"),
        Entry::new(100, "Ahmed"),
    ] {
        if !staff.insert(entry.clone()) {
            debug!(key = entry.key, label = %entry.label, "duplicate key dropped");
        }
    }
    writeln!(out, "{staff}")?;

    // 3) Motion
    let fleet: Vec<Box<dyn Motion>> = vec![Box::new(Vehicle), Box::new(Car)];
    for line in start_all(&fleet) {
        writeln!(out, "{line}")?;
    }

    // 4) Delay, uninterrupted
    let ctx = CancellationToken::new();
    delay::sleep(demo.short_delay_ms, &ctx).await?;
    let msg = format!("slept {}ms", demo.short_delay_ms);
    writeln!(out, "{}", status_line(now(), &msg)?)?;

    // 5) Delay, interrupted by a sibling task
    let ctx = CancellationToken::new();
    let trigger = ctx.clone();
    let after = Duration::from_millis(demo.interrupt_after_ms);
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        trigger.cancel();
    });
    delay::sleep(demo.long_delay_ms, &ctx).await?;
    let msg = format!("long sleep returned (cancelled: {})", ctx.is_cancelled());
    writeln!(out, "{}", status_line(now(), &msg)?)?;

    Ok(())
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn status_line(at: OffsetDateTime, msg: &str) -> anyhow::Result<String> {
    Ok(format!("[{}] {msg}", format_timestamp(at)?))
}
