use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::models::event::{Event, TimelineItem};
use crate::models::settings::TimelineSettings;

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Events(Vec<Event>),
    Items(Vec<TimelineItem>),
}

/// Convert raw items into events, colouring them from the palette.
pub fn items_to_events(items: Vec<TimelineItem>, settings: &TimelineSettings) -> Result<Vec<Event>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.id;
            item.into_event(settings.color_for_index(index))
                .with_context(|| format!("invalid timeline item {id}"))
        })
        .collect()
}

/// Accepts raw timeline items (`{"id", "name", "start", "end"}`), coloured
/// from the palette in order, or full `Event` records as written by
/// [`save_events`].
pub fn parse_events(json: &str, settings: &TimelineSettings) -> Result<Vec<Event>> {
    let snapshot: Snapshot = serde_json::from_str(json).context("unrecognised event snapshot")?;
    match snapshot {
        Snapshot::Events(events) => {
            for event in &events {
                event
                    .validate()
                    .with_context(|| format!("invalid event {}", event.id))?;
            }
            Ok(events)
        }
        Snapshot::Items(items) => items_to_events(items, settings),
    }
}

pub fn load_events(path: &Path, settings: &TimelineSettings) -> Result<Vec<Event>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&data, settings)
        .with_context(|| format!("failed to load events from {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub fn save_events(path: &Path, events: &[Event]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    // lanes are derived per layout run and never persisted
    let stripped: Vec<Event> = events
        .iter()
        .map(|event| Event {
            lane: None,
            ..event.clone()
        })
        .collect();

    let data = serde_json::to_string_pretty(&stripped).map_err(|err| map_ser_error(err, path))?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_ser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!("failed to serialize events for {}", path.display()))
}
