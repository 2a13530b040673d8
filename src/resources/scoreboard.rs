//! High-score board for the aim trainer.
//!
//! Keeps the top scores in descending order, capped at five entries, and
//! persists them as a single comma-separated line. The file is overwritten
//! on every new high score, never appended.

use bevy_ecs::prelude::Resource;
use std::path::PathBuf;

const BOARD_SIZE: usize = 5;

/// Top-N score list with optional file persistence.
#[derive(Resource, Debug, Clone)]
pub struct Scoreboard {
    scores: Vec<f32>,
    size: usize,
    path: Option<PathBuf>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Empty in-memory board (no persistence).
    pub fn new() -> Self {
        Self {
            scores: Vec::new(),
            size: BOARD_SIZE,
            path: None,
        }
    }

    /// Board backed by a file; loads existing scores if the file is present
    /// and readable, otherwise starts empty.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut board = Self {
            scores: Vec::new(),
            size: BOARD_SIZE,
            path: Some(path.clone()),
        };
        match std::fs::read_to_string(&path) {
            Ok(data) => board.parse(&data),
            Err(e) => log::info!("no scoreboard at {:?} ({}), starting empty", path, e),
        }
        board
    }

    /// Parse a comma-separated score line; unparseable entries are skipped.
    fn parse(&mut self, data: &str) {
        self.scores = data
            .trim()
            .split(',')
            .filter_map(|s| s.trim().parse::<f32>().ok())
            .collect();
        self.sort_and_truncate();
    }

    fn format(&self) -> String {
        self.scores
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn sort_and_truncate(&mut self) {
        self.scores
            .sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        self.scores.truncate(self.size);
    }

    /// Whether `score` would make it onto the board: always while the board
    /// is below capacity, otherwise only by beating the current minimum.
    pub fn is_worthy(&self, score: f32) -> bool {
        if self.scores.len() < self.size {
            return true;
        }
        score > self.scores[self.scores.len() - 1]
    }

    /// Insert a score, keep the top entries in descending order, and rewrite
    /// the backing file. Write failures are logged, not fatal.
    pub fn new_score(&mut self, score: f32) {
        self.scores.push(score);
        self.sort_and_truncate();
        if let Some(path) = &self.path {
            if let Err(e) = std::fs::write(path, self.format()) {
                log::error!("failed to save scoreboard to {:?}: {}", path, e);
            }
        }
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }
}
