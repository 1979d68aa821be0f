use chrono::Utc;
use colored::Colorize;
use kube::Client;

use crate::api::constants::{GITOPS_NAMESPACE, SYNC_APP_NAME};

use super::{
    advice, governance, logs, quota,
    status::{self, Outcome, SyncState},
};

fn section(title: &str) {
    println!();
    println!("{}", format!("-- {title} --").bold());
}

fn print_lines(lines: &[String], empty_note: &str) {
    if lines.is_empty() {
        println!("  {empty_note}");
    } else {
        for line in lines {
            println!("  {line}");
        }
    }
}

/// Run the full report. `client` is `None` when no cluster client could be
/// built; the report still prints, with every query at its fallback value.
pub async fn run(client: Option<Client>) -> Outcome {
    println!(
        "{}",
        format!(
            "== Sync status for {}/{} ({}) ==",
            GITOPS_NAMESPACE.as_str(),
            SYNC_APP_NAME.as_str(),
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
        .bold()
    );

    let state = match &client {
        Some(c) => status::fetch_sync_state(c.clone()).await,
        None => SyncState::default(),
    };
    println!("  sync status:       {}", state.sync);
    println!("  health status:     {}", state.health);
    println!("  operation phase:   {}", state.operation_phase);
    println!("  operation message: {}", state.operation_message);

    let outcome = status::classify(&state.sync);
    match outcome {
        Outcome::Synced => {
            println!("{} application is synced", "[ok]".green().bold())
        }
        Outcome::OutOfSync => println!(
            "{} application is out of sync with its source",
            "[warn]".yellow().bold()
        ),
        Outcome::Degraded => println!(
            "{} sync state could not be established (reported: {})",
            "[fail]".red().bold(),
            state.sync
        ),
    }

    section("application controller log excerpts");
    let lines = match &client {
        Some(c) => logs::controller_log_lines(c.clone()).await,
        None => Vec::new(),
    };
    print_lines(&lines, "no matching log lines retrieved");

    section("namespace budget");
    let (quotas, limit_ranges) = match &client {
        Some(c) => quota::namespace_budget(c.clone()).await,
        None => (Vec::new(), Vec::new()),
    };
    print_lines(&quotas, "no resource quotas");
    print_lines(&limit_ranges, "no limit ranges");

    section("governance resources");
    let sections = match client {
        Some(c) => governance::governance_resources(c).await,
        None => Vec::new(),
    };
    if sections.is_empty() {
        println!("  none listed");
    } else {
        for (kind, names) in sections {
            if names.is_empty() {
                println!("  {kind}: none");
            } else {
                println!("  {kind}: {}", names.join(", "));
            }
        }
    }

    section("remediation");
    print!("{}", advice::remediation(outcome));

    outcome
}
