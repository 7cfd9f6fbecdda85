use fb_core::{FeedbackItem, FeedbackStatus, StatusBucket};

use std::fmt;

const MAX_DESCRIPTION_CHARS: usize = 80;
const VISIBLE_TAGS: usize = 2;

/// Plain-text view of one status bucket.
///
/// The column is the drop target for its status; [`StatusColumn::drop_key`]
/// is the key a drop over it reports.
#[derive(Debug, Clone, Copy)]
pub struct StatusColumn<'a> {
    status: FeedbackStatus,
    bucket: &'a StatusBucket,
    highlighted: bool,
}

impl<'a> StatusColumn<'a> {
    pub fn new(status: FeedbackStatus, bucket: &'a StatusBucket) -> Self {
        Self {
            status,
            bucket,
            highlighted: false,
        }
    }

    /// Mark the column as the drop target under the pointer
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn drop_key(&self) -> &'static str {
        self.status.as_str()
    }

    pub fn revision(&self) -> u64 {
        self.bucket.revision()
    }

    fn label(&self) -> &str {
        if self.bucket.label.is_empty() {
            self.status.label()
        } else {
            &self.bucket.label
        }
    }

    fn write_card(f: &mut fmt::Formatter<'_>, item: &FeedbackItem) -> fmt::Result {
        writeln!(f, "  #{} {} [{}]", item.id, item.title, item.status.label())?;

        if !item.description.trim().is_empty() {
            writeln!(f, "     {}", truncate(&item.description, MAX_DESCRIPTION_CHARS))?;
        }

        let tags = item.tag_summary(VISIBLE_TAGS);
        if !tags.is_empty() {
            writeln!(f, "     tags: {}", tags)?;
        }

        writeln!(
            f,
            "     by {} on {}, {} upvote{}{}",
            item.created_by,
            item.created_at.format("%Y-%m-%d"),
            item.upvotes_count,
            if item.upvotes_count == 1 { "" } else { "s" },
            if item.is_upvoted { " (you upvoted)" } else { "" }
        )
    }
}

impl fmt::Display for StatusColumn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "== {} ({}) ==", self.label(), self.bucket.len())?;
        if self.highlighted {
            write!(f, " <- drop into '{}'", self.drop_key())?;
        }
        writeln!(f)?;

        if self.bucket.is_empty() {
            return writeln!(f, "  (No feedback)");
        }

        for item in &self.bucket.feedbacks {
            Self::write_card(f, item)?;
        }

        Ok(())
    }
}

/// First non-blank line of `text`, cut to `max_chars` characters, with `...`
/// appended when anything was left out.
fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let first_line = text.lines().next().unwrap_or_default().trim_end();
    let mut shortened: String = first_line.chars().take(max_chars).collect();
    if shortened.chars().count() < text.chars().count() {
        shortened.push_str("...");
    }
    shortened
}
