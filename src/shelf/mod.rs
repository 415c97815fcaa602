//! The shelf: where finished books land.
//!
//! Persistence proper is out of the engine's scope; this is the minimal
//! boundary collaborator the binary hands a finished interview to. Each
//! finished book is appended to a single markdown file as a dated block.

use crate::constants::{DATE_FORMAT_ISO, STAR_LABELS};
use crate::errors::AppResult;
use crate::interview::Subject;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A finished book ready to be written to the shelf.
#[derive(Debug, Clone)]
pub struct ShelfEntry {
    /// The book that was discussed.
    pub subject: Subject,
    /// The day the reader finished it.
    pub date_finished: NaiveDate,
    /// Star rating, 1-5, if the reader gave one.
    pub rating: Option<u8>,
    /// The synthesized review text.
    pub review: String,
}

impl ShelfEntry {
    /// Renders this entry as a markdown block.
    fn render(&self) -> String {
        let mut block = format!(
            "## {} · {}\n\n*Finished {}*",
            self.subject.title,
            self.subject.author,
            self.date_finished.format(DATE_FORMAT_ISO)
        );
        if let Some(rating) = self.rating {
            let stars = "★".repeat(rating as usize);
            let label = STAR_LABELS
                .get(rating as usize - 1)
                .copied()
                .unwrap_or_default();
            block.push_str(&format!(" · {} ({})", stars, label));
        }
        block.push_str("\n\n");
        if let Some(key) = &self.subject.external_id {
            block.push_str(&format!("*Catalog key: {}*\n\n", key));
        }
        if let Some(cover) = &self.subject.cover_url {
            block.push_str(&format!("![cover]({})\n\n", cover));
        }
        block.push_str(&self.review);
        block.push_str("\n\n");
        block
    }
}

/// Appends a finished book to the shelf file, creating the file and its
/// parent directory on first use.
pub fn append_entry(path: &Path, entry: &ShelfEntry) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.render().as_bytes())?;

    info!(
        "Shelved \"{}\" at {}",
        entry.subject.title,
        path.display()
    );
    Ok(())
}
