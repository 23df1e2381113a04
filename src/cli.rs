use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::models::view_range::ViewRange;
use crate::services::timeline::TimelineLayout;
use crate::services::window::DayColumn;

/// Text rendering of a lane-packed event timeline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file with timeline items or saved events
    #[arg(value_name = "EVENTS")]
    pub events: PathBuf,

    /// Settings file (defaults to the platform config dir)
    #[arg(short = 's', long = "settings", value_name = "TOML")]
    pub settings: Option<PathBuf>,

    /// Window size: 1week, 2weeks or 1month
    #[arg(short = 'r', long = "range", value_name = "RANGE")]
    pub range: Option<ViewRange>,

    /// First visible date (yyyy-MM-dd)
    #[arg(short = 'a', long = "anchor", value_name = "DATE")]
    pub anchor: Option<String>,

    /// Move the window forward (positive) or back (negative) by whole windows
    #[arg(short = 'n', long = "navigate", value_name = "STEPS", default_value_t = 0, allow_negative_numbers = true)]
    pub navigate: i32,

    /// Reschedule an event before rendering: ID and target date
    #[arg(short = 'm', long = "move", value_names = ["ID", "DATE"], num_args = 2)]
    pub reschedule: Option<Vec<String>>,

    /// Write the resulting events back to this file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Characters per day column (at least 2)
    #[arg(
        short = 'w',
        long = "cell-width",
        value_name = "N",
        default_value_t = 4,
        value_parser = clap::value_parser!(u16).range(2..)
    )]
    pub cell_width: u16,
}

/// Draw `layout` with one text row per lane, `cell_width` characters per day.
///
/// The layout must have been built with a day width of `cell_width`.
pub fn render_text(layout: &TimelineLayout, columns: &[DayColumn], cell_width: usize) -> String {
    let cell_width = cell_width.max(2);
    let total = columns.len() * cell_width;
    let mut out = String::new();

    for column in columns {
        let marker = if column.is_today { '*' } else { ' ' };
        let label = format!("{}{}", column.date.format("%d"), marker);
        let _ = write!(out, "{:<width$}", label, width = cell_width);
    }
    out.push('\n');
    for column in columns {
        let fill = if column.is_weekend { '.' } else { '-' };
        out.extend(std::iter::repeat(fill).take(cell_width));
    }
    out.push('\n');

    for lane in 0..layout.lane_count {
        let mut row: Vec<char> = vec![' '; total];
        for bar in layout.bars.iter().filter(|bar| bar.lane == lane && bar.geometry.visible) {
            let left = bar.geometry.left_px as usize;
            let width = bar.geometry.width_px as usize;
            let right = (left + width).min(total);
            if left >= right {
                continue;
            }

            let open = if bar.geometry.truncated_start { '<' } else { '[' };
            let close = if bar.geometry.truncated_end { '>' } else { ']' };
            row[left] = open;
            if right - left < 2 {
                continue;
            }
            row[right - 1] = close;
            for (slot, ch) in row[left + 1..right - 1].iter_mut().zip(bar.event.title.chars()) {
                *slot = ch;
            }
        }
        out.extend(row.into_iter());
        out.push('\n');
    }

    out
}
