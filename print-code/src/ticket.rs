//! Recipe ticket renderer
//!
//! Lays out a recipe's print code as text lines for a thermal printer.
//! Segments are wrapped at the paper width without breaking a
//! parenthesized group apart.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::width::{center_gbk, gbk_width, pad_gbk, split_gbk, truncate_gbk};

/// Data printed on one recipe ticket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeTicket {
    pub title: String,
    /// Product number or other reference, printed left of the timestamp
    pub reference: Option<String>,
    /// Unix timestamp in millis
    pub printed_at: Option<i64>,
    /// Top-level print code segments
    pub segments: Vec<String>,
}

/// Recipe ticket renderer
pub struct RecipeTicketRenderer {
    width: usize,
    timezone: Tz,
}

impl RecipeTicketRenderer {
    /// Create a new renderer with specified paper width and timezone
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize, timezone: Tz) -> Self {
        Self {
            width: width.max(1),
            timezone,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render a ticket to text lines
    pub fn render(&self, ticket: &RecipeTicket) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(center_gbk(&ticket.title, self.width));
        if let Some(info) = self.info_line(ticket) {
            lines.push(info);
        }
        lines.push("=".repeat(self.width));

        lines.extend(self.wrap_segments(&ticket.segments));

        lines.push("-".repeat(self.width));
        lines
    }

    /// Reference on the left, timestamp on the right
    fn info_line(&self, ticket: &RecipeTicket) -> Option<String> {
        let timestamp = ticket
            .printed_at
            .map(|ts| format_timestamp(ts, self.timezone));

        match (ticket.reference.as_deref(), timestamp) {
            (None, None) => None,
            (Some(reference), None) => Some(truncate_gbk(reference, self.width).to_string()),
            (reference, Some(ts)) => {
                let left_width = self.width.saturating_sub(gbk_width(&ts));
                Some(format!(
                    "{}{}",
                    pad_gbk(reference.unwrap_or_default(), left_width, false),
                    ts
                ))
            }
        }
    }

    /// Greedy wrap: segments separated by one space, a segment wider than
    /// the paper is hard-split on its own lines
    fn wrap_segments(&self, segments: &[String]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for segment in segments {
            let seg_width = gbk_width(segment);

            if seg_width > self.width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                lines.extend(split_gbk(segment, self.width).into_iter().map(str::to_string));
                continue;
            }

            let needed = if current.is_empty() { seg_width } else { current_width + 1 + seg_width };
            if needed > self.width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(segment);
            current_width += seg_width;
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

impl Default for RecipeTicketRenderer {
    fn default() -> Self {
        Self::new(48, chrono_tz::Europe::Madrid)
    }
}

/// Format unix timestamp (millis) to readable string (MM-DD HH:mm:ss) in given timezone
fn format_timestamp(ts: i64, tz: Tz) -> String {
    if let Some(dt) = chrono::DateTime::from_timestamp_millis(ts) {
        dt.with_timezone(&tz).format("%m-%d %H:%M:%S").to_string()
    } else {
        "--".to_string()
    }
}
