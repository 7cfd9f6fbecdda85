use crate::{LoadState, StatusColumn};

use fb_core::{BoardSnapshot, FeedbackStatus};

use std::collections::HashMap;

use log::trace;

#[derive(Debug)]
struct CachedColumn {
    revision: u64,
    highlighted: bool,
    text: String,
}

/// Renders a board column by column, re-rendering only columns whose
/// bucket identity or highlight changed since the previous frame.
#[derive(Debug, Default)]
pub struct BoardRenderer {
    columns: HashMap<FeedbackStatus, CachedColumn>,
    column_renders: usize,
}

impl BoardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of column renders performed so far (cache misses)
    pub fn column_renders(&self) -> usize {
        self.column_renders
    }

    /// Render every column of `snapshot` in column order
    pub fn render(&mut self, snapshot: &BoardSnapshot, hovered: Option<FeedbackStatus>) -> String {
        self.columns
            .retain(|status, _| snapshot.contains_status(*status));

        let mut out = Vec::new();
        for (status, bucket) in snapshot.buckets() {
            let column = StatusColumn::new(status, bucket).highlighted(hovered == Some(status));
            out.push(self.render_column(status, column));
        }

        out.join("\n")
    }

    /// Render whatever the view should show for the current load state
    pub fn render_state(&mut self, state: LoadState<'_>, hovered: Option<FeedbackStatus>) -> String {
        match state {
            LoadState::Empty => String::from("No data available\n"),
            LoadState::Loaded(snapshot) if snapshot.statuses().next().is_none() => {
                String::from("No data available\n")
            }
            LoadState::Loaded(snapshot) => self.render(snapshot, hovered),
            LoadState::Failed {
                message,
                stale: None,
            } => format!("Error: {}\n", message),
            LoadState::Failed {
                message,
                stale: Some(snapshot),
            } => format!(
                "Error: {} (showing local board)\n\n{}",
                message,
                self.render(snapshot, hovered)
            ),
        }
    }

    fn render_column(&mut self, status: FeedbackStatus, column: StatusColumn<'_>) -> String {
        let highlighted = column.is_highlighted();

        if let Some(cached) = self.columns.get(&status)
            && cached.revision == column.revision()
            && cached.highlighted == highlighted
        {
            return cached.text.clone();
        }

        trace!("Rendering column {} (revision {})", status, column.revision());
        self.column_renders += 1;

        let text = column.to_string();
        self.columns.insert(
            status,
            CachedColumn {
                revision: column.revision(),
                highlighted,
                text: text.clone(),
            },
        );
        text
    }
}
