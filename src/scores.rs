//! High-score table and its plain-text store.
//!
//! The table keeps at most five `(name, score)` entries, sorted descending
//! by score. On disk it is one `name,score` line per entry at
//! `~/.skyward/scores.txt`, read and rewritten whole. Names are restricted
//! to a comma-free charset, so the format needs no escaping.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum entries kept in the table.
pub const MAX_ENTRIES: usize = 5;

/// Maximum player-name length, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// Characters accepted in player names.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// One ranked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// The ranked table. Invariant after every [`insert`](HighScores::insert):
/// sorted descending by score, at most [`MAX_ENTRIES`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `score` earns a spot: the table has room, or the score
    /// strictly exceeds the current lowest.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        let lowest = self.entries.iter().map(|e| e.score).min().unwrap_or(0);
        score > lowest
    }

    /// Add an entry, re-sort descending, and truncate back to capacity.
    /// The sort is stable, so on ties the newer entry ranks below the older.
    pub fn insert(&mut self, name: String, score: u32) {
        self.entries.push(ScoreEntry { name, score });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }
}

/// Whole-file reader/writer for the score table.
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store at the default location, `~/.skyward/scores.txt`. The
    /// directory is created if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        let dir = home_dir.join(".skyward");
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("scores.txt"),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing file is an empty table; a line that does
    /// not parse as `name,score` is rejected with `InvalidData`.
    pub fn load(&self) -> io::Result<HighScores> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::new()),
            Err(e) => return Err(e),
        };

        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let entry = parse_line(line.trim_end()).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("malformed score line {}: {:?}", idx + 1, line),
                )
            })?;
            entries.push(entry);
        }
        Ok(HighScores { entries })
    }

    /// Overwrite the file with the given table, one `name,score` per line.
    pub fn save(&self, scores: &HighScores) -> io::Result<()> {
        let mut out = String::new();
        for entry in scores.entries() {
            out.push_str(&entry.name);
            out.push(',');
            out.push_str(&entry.score.to_string());
            out.push('\n');
        }
        fs::write(&self.path, out)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Parse one `name,score` line. The split is on the last comma, so a name
/// containing commas (from a hand-edited file) still round-trips.
fn parse_line(line: &str) -> Option<ScoreEntry> {
    let (name, score) = line.rsplit_once(',')?;
    let score = score.parse().ok()?;
    Some(ScoreEntry {
        name: name.to_string(),
        score,
    })
}
