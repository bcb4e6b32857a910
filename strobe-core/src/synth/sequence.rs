//! Note playback sequencing
//!
//! A playback command expands into timed steps. Each step sets a tone and
//! holds it for a duration measured on the hold timer; after the last
//! step the tone returns to [`Tone::Off`].

use crate::config::Tone;

use super::notes::{NoteIndex, SONG, SONG_LEN, SONG_PHRASE_BREAKS};

/// Playback durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub note_hold_ms: u32,
    pub song_note_ms: u32,
    pub song_gap_ms: u32,
    pub song_long_gap_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            note_hold_ms: 250,
            song_note_ms: 500,
            song_gap_ms: 125,
            song_long_gap_ms: 250,
        }
    }
}

/// One timed tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub tone: Tone,
    pub hold_ms: u32,
}

/// What a playback command plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Melody {
    /// A single key press
    Note(NoteIndex),
    /// The whole song, each note followed by a silent gap
    Song,
}

impl Melody {
    /// Number of steps
    pub fn len(self) -> usize {
        match self {
            Melody::Note(_) => 1,
            Melody::Song => SONG_LEN * 2,
        }
    }

    /// Step at `index`, or `None` past the end
    pub fn step(self, index: usize, timing: &Timing) -> Option<Step> {
        match self {
            Melody::Note(note) => (index == 0).then_some(Step {
                tone: Tone::Note(note),
                hold_ms: timing.note_hold_ms,
            }),
            Melody::Song => {
                let position = index / 2;
                let note = *SONG.get(position)?;
                if index % 2 == 0 {
                    Some(Step {
                        tone: Tone::Note(note),
                        hold_ms: timing.song_note_ms,
                    })
                } else {
                    let hold_ms = if SONG_PHRASE_BREAKS.contains(&position) {
                        timing.song_long_gap_ms
                    } else {
                        timing.song_gap_ms
                    };
                    Some(Step {
                        tone: Tone::Off,
                        hold_ms,
                    })
                }
            }
        }
    }
}

/// Iterator over the steps of a melody
#[derive(Debug, Clone)]
pub struct Sequencer {
    melody: Melody,
    timing: Timing,
    next: usize,
}

impl Sequencer {
    pub fn new(melody: Melody, timing: Timing) -> Self {
        Self {
            melody,
            timing,
            next: 0,
        }
    }

    pub fn melody(&self) -> Melody {
        self.melody
    }

    /// Steps not yet returned
    pub fn remaining(&self) -> usize {
        self.melody.len().saturating_sub(self.next)
    }
}

impl Iterator for Sequencer {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let step = self.melody.step(self.next, &self.timing)?;
        self.next += 1;
        Some(step)
    }
}
