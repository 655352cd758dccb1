//! Input adapter.
//!
//! Translates raw UI events into engine [`Action`]s. Card elements carry
//! their index as a string attribute, so the adapter parses it; anything
//! that does not parse is an invalid argument, not a silent no-op.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::CardIndex;
use crate::core::action::Action;
use crate::core::error::{EngineError, Result};
use crate::feedback::FeedbackSink;
use crate::rules::{Applied, GameEngine};
use crate::view::Renderer;

/// A raw event from the UI layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// A card element was activated; `card_id` is its id attribute.
    CardActivated { card_id: String },
    /// The reset control was activated.
    ResetActivated,
    /// The host timer ticked.
    TimerElapsed(Duration),
}

/// Translate a UI event into an engine action.
pub fn translate(event: &UiEvent) -> Result<Action> {
    match event {
        UiEvent::CardActivated { card_id } => {
            let index = card_id.trim().parse::<usize>().map_err(|_| {
                warn!(card_id = %card_id, "unparseable card id");
                EngineError::InvalidCardId(card_id.clone())
            })?;
            Ok(Action::Select(CardIndex::new(index)))
        }
        UiEvent::ResetActivated => Ok(Action::Reset),
        UiEvent::TimerElapsed(elapsed) => Ok(Action::Advance(*elapsed)),
    }
}

/// Glue between a UI, an engine and a renderer.
///
/// Each event is translated, applied, and followed by a redraw.
pub struct InputAdapter<S, R> {
    engine: GameEngine<S>,
    renderer: R,
}

impl<S, R> InputAdapter<S, R>
where
    S: FeedbackSink,
    R: Renderer,
{
    /// Wrap an engine and renderer, drawing the initial board.
    pub fn new(engine: GameEngine<S>, mut renderer: R) -> Self {
        renderer.render(&engine.snapshot());
        Self { engine, renderer }
    }

    /// Handle one UI event.
    ///
    /// The board is redrawn after every successful action. Clock ticks that
    /// ran nothing skip the redraw.
    pub fn handle(&mut self, event: &UiEvent) -> Result<Applied> {
        let action = translate(event)?;
        let applied = self.engine.apply(action)?;

        if applied != (Applied::Advanced { fired: 0 }) {
            self.renderer.render(&self.engine.snapshot());
        }
        Ok(applied)
    }

    /// The engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Split back into engine and renderer.
    pub fn into_parts(self) -> (GameEngine<S>, R) {
        (self.engine, self.renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_card() {
        let event = UiEvent::CardActivated {
            card_id: "7".to_string(),
        };
        assert_eq!(translate(&event).unwrap(), Action::Select(CardIndex::new(7)));
    }

    #[test]
    fn test_translate_trims_whitespace() {
        let event = UiEvent::CardActivated {
            card_id: " 3 ".to_string(),
        };
        assert_eq!(translate(&event).unwrap(), Action::Select(CardIndex::new(3)));
    }

    #[test]
    fn test_translate_bad_card_id() {
        for bad in ["", "abc", "-1", "1.5"] {
            let event = UiEvent::CardActivated {
                card_id: bad.to_string(),
            };
            let err = translate(&event).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_translate_reset_and_timer() {
        assert_eq!(translate(&UiEvent::ResetActivated).unwrap(), Action::Reset);
        assert_eq!(
            translate(&UiEvent::TimerElapsed(Duration::from_millis(16))).unwrap(),
            Action::Advance(Duration::from_millis(16))
        );
    }
}
