use std::fmt;

use tracing::{debug, warn};

use crate::config::UiConfig;
use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::ports::{Navigator, SwipeView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Where the outgoing card ends up: off-screen, rotated and transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitAnimation {
    pub direction: SwipeDirection,
    pub translate_x_px: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl ExitAnimation {
    pub fn new(direction: SwipeDirection, viewport_width: f64, rotation_deg: f64) -> Self {
        Self {
            direction,
            translate_x_px: direction.sign() * viewport_width,
            rotate_deg: direction.sign() * rotation_deg,
            opacity: 0.0,
        }
    }

    /// CSS `transform` value for the card.
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) rotate({}deg)",
            self.translate_x_px, self.rotate_deg
        )
    }
}

// Animation phases of the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Animating,
    Settled,
}

impl SwipePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Animating => "Animating",
            Self::Settled => "Settled",
        }
    }
}

impl fmt::Display for SwipePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEvent {
    Start,
    Settle,
}

impl SwipeEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Settle => "Settle",
        }
    }
}

impl TryFrom<(SwipePhase, SwipeEvent)> for SwipePhase {
    type Error = Error;

    fn try_from(value: (SwipePhase, SwipeEvent)) -> Result<Self> {
        match value {
            (Self::Idle | Self::Settled, SwipeEvent::Start) => Ok(Self::Animating),
            (Self::Animating, SwipeEvent::Settle) => Ok(Self::Settled),
            (from, event) => Err(Error::InvalidTransition {
                from: from.as_str(),
                event: event.as_str(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    /// The exit animation is running; call [`SwipeController::settle`] after
    /// `delay_ms`.
    Started { exit: ExitAnimation, delay_ms: u32 },
    /// No card on screen.
    NoCard,
    /// A previous swipe is still animating.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Displayed(usize),
    Finished,
}

/// Drives the dish deck: one card at a time, advancing on every swipe until
/// the deck runs out and the user is sent to the recommendations page.
pub struct SwipeController<V, N> {
    deck: Deck,
    config: UiConfig,
    index: usize,
    phase: SwipePhase,
    view: V,
    navigator: N,
}

impl<V: SwipeView, N: Navigator> SwipeController<V, N> {
    pub const fn new(deck: Deck, config: UiConfig, view: V, navigator: N) -> Self {
        Self {
            deck,
            config,
            index: 0,
            phase: SwipePhase::Idle,
            view,
            navigator,
        }
    }

    /// Shows the card at the current index.
    pub fn mount(&mut self) -> Result<RenderOutcome> {
        self.render(self.index)
    }

    pub fn render(&mut self, index: usize) -> Result<RenderOutcome> {
        self.view.clear_cards();

        let Some(dish) = self.deck.get(index) else {
            debug!(index, "deck exhausted, leaving for recommendations");
            self.navigator.navigate(&self.config.recommendations_url);
            return Ok(RenderOutcome::Finished);
        };

        debug!(index, title = %dish.title, "showing card");
        self.view.display_card(dish)?;
        Ok(RenderOutcome::Displayed(index))
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome> {
        if self.phase == SwipePhase::Animating {
            warn!(%direction, "swipe ignored while the previous card is animating");
            return Ok(SwipeOutcome::Ignored);
        }
        if !self.view.has_card() {
            return Ok(SwipeOutcome::NoCard);
        }

        self.phase = SwipePhase::try_from((self.phase, SwipeEvent::Start))?;

        let exit = ExitAnimation::new(
            direction,
            self.view.viewport_width(),
            self.config.exit_rotation_deg,
        );
        self.view.animate_exit(&exit);

        Ok(SwipeOutcome::Started {
            exit,
            delay_ms: self.config.swipe_delay_ms,
        })
    }

    /// Deferred half of a swipe: advances the index and renders the next card.
    pub fn settle(&mut self) -> Result<RenderOutcome> {
        self.phase = SwipePhase::try_from((self.phase, SwipeEvent::Settle))?;
        self.index = (self.index + 1).min(self.deck.len());
        self.render(self.index)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}

/// Direction of a horizontal touch gesture, if it travelled further than
/// `threshold` pixels.
pub fn gesture_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    if end_x - start_x > threshold {
        Some(SwipeDirection::Right)
    } else if start_x - end_x > threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Remembers where a touch started.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    start_x: f64,
}

impl TouchTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn end(&self, x: f64, threshold: f64) -> Option<SwipeDirection> {
        gesture_direction(self.start_x, x, threshold)
    }
}
