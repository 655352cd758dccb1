//! Read-only views for renderers.
//!
//! The engine never draws. It hands renderers a [`Snapshot`] and they decide
//! what a face-up, matched or locked card looks like.

mod snapshot;
mod text;

pub use snapshot::{CardView, Snapshot};
pub use text::TextRenderer;

/// Consumer of engine snapshots.
///
/// Implementations draw or update the card grid. Every card they expose
/// must be clickable under its `CardView::index`.
pub trait Renderer {
    /// Draw the given snapshot.
    fn render(&mut self, snapshot: &Snapshot);
}
