// Rust Timeline
// Command-line entry point: load events, lay out a window, print it

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use rust_timeline::cli::{render_text, Args};
use rust_timeline::models::view_range::NavDirection;
use rust_timeline::services::import::{load_events, save_events};
use rust_timeline::services::reschedule::drop_event;
use rust_timeline::services::settings::{default_settings_path, load_settings};
use rust_timeline::services::timeline::{build_layout, LayoutMetrics};
use rust_timeline::services::window::DateWindow;
use rust_timeline::utils::date::parse_iso_date;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    log::info!("Starting Rust Timeline");

    let settings_path = args.settings.clone().unwrap_or_else(default_settings_path);
    let settings = load_settings(&settings_path)?;

    let mut events = load_events(&args.events, &settings)?;

    let anchor = match args.anchor.as_deref() {
        Some(value) => parse_iso_date(value)?,
        None => settings.anchor_date,
    };
    let mut window = DateWindow::for_range(anchor, args.range.unwrap_or(settings.view_range));

    let direction = if args.navigate < 0 {
        NavDirection::Previous
    } else {
        NavDirection::Next
    };
    for _ in 0..args.navigate.unsigned_abs() {
        window = window
            .shift(direction)
            .with_context(|| format!("cannot navigate past {}", window.first_date()))?;
    }

    if let Some([id, target]) = args.reschedule.as_deref() {
        let id: i64 = id
            .parse()
            .with_context(|| format!("invalid event id '{id}'"))?;
        match drop_event(&events, id, target, &window) {
            Some(updated) => events = updated,
            None => log::warn!(
                "Reschedule of event {id} to {target} rejected (unknown id or date outside window)"
            ),
        }
    }

    let metrics = LayoutMetrics {
        day_width: f32::from(args.cell_width),
        row_height: settings.row_height,
        row_padding: settings.row_padding,
    };
    let layout = build_layout(&events, &window, metrics);
    let columns = window.day_columns(Local::now().date_naive());

    if let Some(last) = window.last_date() {
        println!("{} .. {} ({} lanes)", window.first_date(), last, layout.lane_count);
    }
    print!("{}", render_text(&layout, &columns, usize::from(args.cell_width)));

    if let Some(output) = args.output.as_deref() {
        save_events(output, &events)?;
        log::info!("Saved {} events to {}", events.len(), output.display());
    }

    Ok(())
}
