/*!
 * Trade Toolkit Self-Test Program
 *
 * Smoke-tests the full toolkit surface in one pass and prints a summary.
 * Intended as a quick sanity check for a fresh build or a new deployment
 * host; the unit and integration suites remain the source of truth.
 */

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use serde_json::json;
use tracing::info;

use trade_toolkit::cron::CronFields;
use trade_toolkit::mixing::{extend, CapabilityBundle, SharedBehaviors};
use trade_toolkit::ranking::{bubble_sort, rank_order};
use trade_toolkit::session;
use trade_toolkit::structural::{combinations3, deep_copy, deep_equal};
use trade_toolkit::utils::{nested_str, uppercase_first_letters};
use trade_toolkit::RuntimeContext;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "Trade Toolkit Self-Test".cyan().bold());
    println!("version {}\n", trade_toolkit::VERSION);

    let context = RuntimeContext::detect();
    info!(is_macos = context.is_macos, root = %context.root_path.display(), "runtime context");

    run("structural copy and equality", test_structural)?;
    run("ranking", test_ranking)?;
    run("combinations", test_combinations)?;
    run("capability mixing", test_mixing)?;
    run("session helpers", test_session)?;
    run("cron and strings", test_collaborators)?;

    println!("\n{}", "All self-tests passed".green().bold());
    Ok(())
}

fn run(name: &str, test: fn() -> Result<()>) -> Result<()> {
    test().with_context(|| format!("self-test failed: {name}"))?;
    println!("  {} {}", "ok".green(), name);
    Ok(())
}

fn test_structural() -> Result<()> {
    let signal = json!({
        "sn": "txf_pattern01",
        "window": {"begin": 845, "end": 1345},
        "prices": [17500.0, 17620.5]
    });

    let mut copied = deep_copy(&signal);
    ensure!(deep_equal(&copied, &signal), "copy must equal its source");

    copied["prices"][0] = json!(0.0);
    ensure!(
        signal["prices"][0] == json!(17500.0),
        "mutating the copy must not touch the source"
    );
    Ok(())
}

fn test_ranking() -> Result<()> {
    ensure!(bubble_sort(&[3, 1, 2]) == vec![1, 2, 3], "sort order");
    ensure!(
        rank_order(&[34.0, 56.0, 12.0]) == vec![2, 3, 1],
        "rank translation"
    );
    ensure!(
        rank_order(&[5.0, 5.0, 1.0]) == vec![3, 3, 1],
        "duplicate rank policy"
    );
    Ok(())
}

fn test_combinations() -> Result<()> {
    let triples = combinations3(&[1, 2, 3, 4]).unwrap_or_default();
    ensure!(triples.len() == 4, "C(4, 3) combinations");

    let oversized: Vec<u32> = (0..14).collect();
    ensure!(
        combinations3(&oversized).is_err(),
        "size-limit guard must reject 14 elements"
    );
    Ok(())
}

fn test_mixing() -> Result<()> {
    let target = SharedBehaviors::new();
    extend(
        &target,
        &[
            CapabilityBundle::new("base").with("describe", |_| json!("base")),
            CapabilityBundle::new("override").with("describe", |_| json!("override")),
        ],
    );
    ensure!(
        target.invoke("describe", &json!(null)) == Some(json!("override")),
        "later bundle must win"
    );
    Ok(())
}

fn test_session() -> Result<()> {
    ensure!(session::is_day(Some(851)), "08:51 is day session");
    ensure!(!session::is_trade_time(Some(1400)), "14:00 is outside trading");

    let serial = session::unique_serial("TXF", "selftest");
    ensure!(serial.starts_with("txf_selftest"), "serial prefix");
    info!(serial = %serial, "generated serial");
    Ok(())
}

fn test_collaborators() -> Result<()> {
    let cron = CronFields::parse("0 45 13 * * 1-5")?;
    ensure!(cron.time_of_day() == "13:45:00", "cron time of day");

    ensure!(
        uppercase_first_letters("day session open") == "Day Session Open",
        "word casing"
    );

    let doc = json!({"signal": {"sn": "a1"}});
    ensure!(nested_str(&doc, "signal.sn") == Some("a1"), "nested access");
    Ok(())
}
