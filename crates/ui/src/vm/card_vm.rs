use flash_core::model::{Card, CardId};

use crate::context::DisplayConfig;

/// Horizontal drag distance, in pixels, past which a card counts as swiped.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Drags shorter than this are treated as a tap on the card.
pub const TAP_SLOP: f64 = 5.0;

/// Vertical gap between stacked cards.
const STACK_STEP_PX: usize = 10;

/// Only the front few cards are drawn; the rest sit hidden underneath.
pub const VISIBLE_STACK: usize = 5;

/// Verdict for a finished drag: `Some(true)` right, `Some(false)` left,
/// `None` when the card should spring back.
#[must_use]
pub fn swipe_verdict(offset_x: f64) -> Option<bool> {
    if offset_x.abs() > SWIPE_THRESHOLD {
        Some(offset_x > 0.0)
    } else {
        None
    }
}

#[must_use]
pub fn is_tap(offset_x: f64) -> bool {
    offset_x.abs() < TAP_SLOP
}

/// One card in the study stack, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct StackCardVm {
    pub id: CardId,
    pub prompt: String,
    pub answer: String,
    pub depth: usize,
    pub revealed: bool,
}

impl StackCardVm {
    #[must_use]
    pub fn is_top(&self) -> bool {
        self.depth == 0
    }

    /// Text lines to show. Screen-reader mode shows a single face at a time.
    #[must_use]
    pub fn faces(&self, display: DisplayConfig) -> (&str, Option<&str>) {
        if display.voice_over {
            let text = if self.revealed { &self.answer } else { &self.prompt };
            return (text, None);
        }
        let answer = self.revealed.then_some(self.answer.as_str());
        (&self.prompt, answer)
    }

    /// Inline style for the card. `drag_x` only moves the top card.
    #[must_use]
    pub fn style(&self, drag_x: f64) -> String {
        let y = self.depth * STACK_STEP_PX;
        if !self.is_top() || drag_x == 0.0 {
            return format!("transform: translate(0px, {y}px); z-index: {};", VISIBLE_STACK - self.depth);
        }
        let rotate = drag_x / 5.0;
        let x = drag_x * 5.0;
        let opacity = (2.0 - (drag_x / 50.0).abs()).clamp(0.0, 1.0);
        format!(
            "transform: translate({x:.0}px, {y}px) rotate({rotate:.1}deg); opacity: {opacity:.2}; z-index: {};",
            VISIBLE_STACK
        )
    }

    /// Tint class shown while dragging, unless colour cues are turned off.
    #[must_use]
    pub fn tint_class(&self, drag_x: f64, display: DisplayConfig) -> &'static str {
        if !self.is_top() || display.differentiate_without_color || drag_x == 0.0 {
            "stack-card"
        } else if drag_x > 0.0 {
            "stack-card stack-card--correct"
        } else {
            "stack-card stack-card--wrong"
        }
    }
}

/// Build the visible part of the stack, front card first.
#[must_use]
pub fn map_stack_cards(cards: &[Card], revealed: bool) -> Vec<StackCardVm> {
    cards
        .iter()
        .take(VISIBLE_STACK)
        .enumerate()
        .map(|(depth, card)| StackCardVm {
            id: card.id(),
            prompt: card.prompt().to_owned(),
            answer: card.answer().to_owned(),
            depth,
            revealed: depth == 0 && revealed,
        })
        .collect()
}

/// UI-ready summary of a card for list rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardListItemVm {
    pub id: CardId,
    pub prompt_preview: String,
    pub answer_preview: String,
}

/// Map domain cards into list-friendly view models.
#[must_use]
pub fn map_card_list_items(cards: &[Card]) -> Vec<CardListItemVm> {
    cards
        .iter()
        .map(|card| CardListItemVm {
            id: card.id(),
            prompt_preview: truncate_preview(card.prompt(), 56),
            answer_preview: truncate_preview(card.answer(), 56),
        })
        .collect()
}

fn truncate_preview(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    let mut lines = trimmed.lines();
    let first_line = lines.next().unwrap_or("");
    let has_more_lines = lines.next().is_some();

    let mut out: String = first_line.chars().take(max_chars).collect();
    if has_more_lines || first_line.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
