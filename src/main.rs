mod cli;
mod demo;
mod explore;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use outta_core::filter::{CategoryFilter, FilterState};
use outta_core::swipe::CalendarVisibility;
use outta_engine::{filter_events, CalendarSink, ExploreController, StoredCatalog};
use outta_store::{CalendarRepo, Database, EventRepo};
use outta_telemetry::TelemetryConfig;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    outta_telemetry::init_telemetry(&TelemetryConfig {
        json: cli.json_logs,
        ..Default::default()
    });

    let db_path = cli.db.clone().unwrap_or_else(default_db_path);
    let db = Database::open(&db_path)
        .with_context(|| format!("open database at {}", db_path.display()))?;

    match cli.command {
        Command::Seed => seed(&db),
        Command::Events { category, query } => list_events(&db, category, query),
        Command::Explore { category, query } => explore(&db, category, query),
        Command::Calendar { bucket } => calendar(&db, bucket),
    }
}

fn seed(db: &Database) -> anyhow::Result<()> {
    let events = demo::demo_events();
    let n = EventRepo::new(db.clone()).seed(&events)?;
    tracing::info!(count = n, "demo catalog seeded");
    println!("seeded {n} events");
    Ok(())
}

fn list_events(
    db: &Database,
    category: Option<String>,
    query: Option<String>,
) -> anyhow::Result<()> {
    let filter = parse_filter(category, query)?;
    let catalog = EventRepo::new(db.clone()).list()?;
    let deck = filter_events(&catalog, &filter);

    for event in &deck {
        println!(
            "{} \u{2014} {} \u{2014} {} \u{2014} {} \u{2022} {} ({}/{} attending)",
            event.title,
            event.category,
            event.date,
            event.location,
            event.area,
            event.attending,
            event.capacity,
        );
    }
    println!(
        "{} of {} events match ({}, query {:?})",
        deck.len(),
        catalog.len(),
        filter.category,
        filter.query,
    );
    Ok(())
}

fn explore(db: &Database, category: Option<String>, query: Option<String>) -> anyhow::Result<()> {
    let filter = parse_filter(category, query)?;
    let source = StoredCatalog::new(EventRepo::new(db.clone()));
    let sink = Arc::new(CalendarSink::new(CalendarRepo::new(db.clone())));

    let mut controller = ExploreController::new(&source, sink)?;
    if controller.catalog_len() == 0 {
        anyhow::bail!("the catalog is empty; run `outtacouch seed` first");
    }
    if filter.category != CategoryFilter::All {
        controller.set_category(filter.category);
    }
    if !filter.query.is_empty() {
        controller.set_query(filter.query);
    }

    explore::run(&mut controller)
}

fn calendar(db: &Database, bucket: Option<String>) -> anyhow::Result<()> {
    let repo = CalendarRepo::new(db.clone());
    let buckets = match bucket {
        Some(raw) => vec![raw
            .parse::<CalendarVisibility>()
            .map_err(anyhow::Error::msg)?],
        None => vec![
            CalendarVisibility::Public,
            CalendarVisibility::Private,
            CalendarVisibility::Saved,
        ],
    };

    for visibility in buckets {
        let entries = repo.list(visibility)?;
        let heading = match visibility {
            CalendarVisibility::Public => "Public calendar (visible to connections)",
            CalendarVisibility::Private => "Private calendar (only you)",
            CalendarVisibility::Saved => "Saved for later",
        };
        println!("{heading}: {} events", entries.len());
        for entry in &entries {
            println!(
                "  {} \u{2014} {} \u{2014} {} \u{2022} {}",
                entry.event.title, entry.event.date, entry.event.location, entry.event.area,
            );
        }
    }
    Ok(())
}

fn parse_filter(category: Option<String>, query: Option<String>) -> anyhow::Result<FilterState> {
    let category = match category {
        Some(raw) => raw.parse::<CategoryFilter>().map_err(anyhow::Error::msg)?,
        None => CategoryFilter::All,
    };
    Ok(FilterState::new(category, query.unwrap_or_default()))
}

fn default_db_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join(".outtacouch")
        .join("outtacouch.db")
}
