//! Dialogue data model.
//!
//! Dialogue lines arrive from upstream (the scenario/AI layer) already
//! ordered per panel. They are read-only inputs to the page assembler;
//! nothing in this crate mutates them.

use serde::{Deserialize, Serialize};

use crate::geometry::Anchor;

/// What kind of balloon a dialogue line should render in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalloonKind {
    /// Spoken dialogue: ellipse balloon with a triangle tail.
    #[default]
    Speech,
    /// Inner monologue: cloud balloon with a chain of shrinking circles.
    Thought,
    /// Narrator caption: rounded box, no tail.
    Narration,
    /// Onomatopoeia: no silhouette, outlined and shadowed glyphs only.
    SoundEffect,
    /// Shouted dialogue: jagged burst balloon.
    Emphasis,
}

/// Emotional register of a line. Adjusts scalar style values (size,
/// weight, color) but never the balloon shape or tail kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    #[default]
    Neutral,
    Shouting,
    Whispering,
    Thoughtful,
    Angry,
    Excited,
    Sad,
}

/// One line of dialogue for one panel, as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Speaker name; prefixed onto speech text when present.
    #[serde(default)]
    pub speaker: Option<String>,
    pub text: String,
    #[serde(default)]
    pub kind: BalloonKind,
    #[serde(default)]
    pub emotion: Emotion,
    /// Optional hint for which side the balloon tail should point toward.
    #[serde(default)]
    pub anchor_hint: Option<Anchor>,
}

impl DialogueLine {
    /// Plain speech line with no speaker attribution.
    pub fn speech(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BalloonKind::Speech,
            ..Default::default()
        }
    }

    /// Speech line attributed to a named speaker.
    pub fn spoken_by(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker.into()),
            text: text.into(),
            kind: BalloonKind::Speech,
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: BalloonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = emotion;
        self
    }

    pub fn anchor_hint(mut self, anchor: Anchor) -> Self {
        self.anchor_hint = Some(anchor);
        self
    }

    /// Text as lettered in the balloon: speech lines get a speaker
    /// prefix, truncated to 8 characters so long names don't crowd the
    /// balloon.
    pub fn display_text(&self) -> String {
        match (&self.speaker, self.kind) {
            (Some(name), BalloonKind::Speech) if !name.is_empty() => {
                let short: String = name.chars().take(8).collect();
                format!("{short}: {}", self.text)
            }
            _ => self.text.clone(),
        }
    }
}
