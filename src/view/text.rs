//! Plain-text renderer.
//!
//! Draws the board as a grid of fixed-width cells: `??` for face-down cards,
//! the asset key for revealed ones and the asset key with a `*` suffix for
//! matched ones. Useful for terminals and logs.

use std::fmt::Write;

use super::snapshot::{CardView, Snapshot};
use super::Renderer;
use crate::core::config::{GameConfig, DEFAULT_COLUMNS};

const HIDDEN: &str = "??";

/// Renderer producing a text frame per snapshot.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    columns: usize,
    frame: String,
    frames_drawn: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl TextRenderer {
    /// Create a renderer with the given grid width (at least 1).
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            frame: String::new(),
            frames_drawn: 0,
        }
    }

    /// Create a renderer using the configured grid width.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.columns)
    }

    /// The last frame drawn.
    #[must_use]
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// How many frames have been drawn.
    #[must_use]
    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Draw a snapshot into a new string.
    #[must_use]
    pub fn draw(&self, snapshot: &Snapshot) -> String {
        let width = snapshot
            .cards
            .iter()
            .map(|c| c.asset.chars().count() + 1)
            .max()
            .unwrap_or(0)
            .max(HIDDEN.chars().count());

        let mut out = String::new();
        let _ = writeln!(out, "{}", snapshot.moves_label());

        for row in snapshot.cards.chunks(self.columns) {
            let cells: Vec<String> = row
                .iter()
                .map(|card| format!("[{:<width$}]", cell_text(card)))
                .collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }

        if let Some(message) = snapshot.win_message() {
            let _ = writeln!(out, "{message}");
        }
        out
    }
}

fn cell_text(card: &CardView) -> String {
    if card.matched {
        format!("{}*", card.asset)
    } else if card.face_up {
        card.asset.clone()
    } else {
        HIDDEN.to_string()
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frame = self.draw(snapshot);
        self.frames_drawn += 1;
    }
}
