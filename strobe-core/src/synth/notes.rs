//! Key map, note periods and the song

use super::tables::TABLE_LEN;

/// Sample-clock timer input frequency
pub const SAMPLE_CLOCK_HZ: u32 = 32_000_000;

/// Number of playable notes
pub const NOTE_COUNT: usize = 12;

/// Keyboard bytes, one per note, laid out like a piano octave on a
/// QWERTY keyboard (white keys on the letter row, black keys above)
pub const NOTE_KEYS: [u8; NOTE_COUNT] = *b"W3E4RT6Y7U8I";

/// Sample-clock period for each note, C6 up to B6
pub const NOTE_PERIODS: [u16; NOTE_COUNT] = [
    0x77, 0x70, 0x6A, 0x64, 0x5E, 0x59, 0x54, 0x4F, 0x4B, 0x47, 0x43, 0x3F,
];

/// Notes in the song
pub const SONG_LEN: usize = 23;

const C: NoteIndex = NoteIndex(0);
const D: NoteIndex = NoteIndex(2);
const E: NoteIndex = NoteIndex(4);

/// "Mary Had a Little Lamb"
pub static SONG: [NoteIndex; SONG_LEN] = [
    E, D, C, E, E, E,
    D, D, D, E, E,
    E, D, C, E, E, E,
    E, D, D, E, D, C,
];

/// Song positions followed by the long phrase-break gap
pub const SONG_PHRASE_BREAKS: [usize; 2] = [7, 10];

/// Index into the note tables, always in range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteIndex(u8);

impl NoteIndex {
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NOTE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Note played by a keyboard byte
    pub fn from_key(byte: u8) -> Option<Self> {
        NOTE_KEYS
            .iter()
            .position(|&key| key == byte)
            .map(|i| Self(i as u8))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Keyboard byte for this note
    pub fn key(self) -> u8 {
        NOTE_KEYS[self.0 as usize]
    }

    /// Sample-clock period for this note
    pub fn period(self) -> u16 {
        NOTE_PERIODS[self.0 as usize]
    }

    /// Output frequency in millihertz
    pub fn frequency_millihz(self) -> u32 {
        tone_frequency_millihz(self.period())
    }
}

/// Output frequency in millihertz for a sample-clock period
///
/// One table sample per `period + 1` clock ticks, one waveform cycle per
/// table. A period of zero means the clock is stopped.
pub fn tone_frequency_millihz(period: u16) -> u32 {
    if period == 0 {
        return 0;
    }
    let ticks_per_cycle = (period as u64 + 1) * TABLE_LEN as u64;
    (SAMPLE_CLOCK_HZ as u64 * 1000 / ticks_per_cycle) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_in_order() {
        for (i, &key) in NOTE_KEYS.iter().enumerate() {
            let note = NoteIndex::from_key(key).unwrap();
            assert_eq!(note.index() as usize, i);
            assert_eq!(note.key(), key);
        }
        assert_eq!(NoteIndex::from_key(b'w'), None);
        assert_eq!(NoteIndex::from_key(b'Q'), None);
        assert_eq!(NoteIndex::from_key(b's'), None);
    }

    #[test]
    fn test_note_index_bounds() {
        assert!(NoteIndex::new(11).is_some());
        assert!(NoteIndex::new(12).is_none());
    }

    #[test]
    fn test_periods_rise_in_pitch() {
        assert!(NOTE_PERIODS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_song_periods() {
        let periods: [u16; SONG_LEN] = core::array::from_fn(|i| SONG[i].period());
        assert_eq!(
            periods,
            [
                0x5E, 0x6A, 0x77, 0x5E, 0x5E, 0x5E, 0x6A, 0x6A, 0x6A, 0x5E, 0x5E, 0x5E, 0x6A,
                0x77, 0x5E, 0x5E, 0x5E, 0x5E, 0x6A, 0x6A, 0x5E, 0x6A, 0x77,
            ]
        );
    }

    #[test]
    fn test_frequency() {
        // 32 MHz / (120 * 256) = 1041.666 Hz
        let c = NoteIndex::new(0).unwrap();
        assert_eq!(c.frequency_millihz(), 1_041_666);
        assert_eq!(tone_frequency_millihz(0), 0);
    }
}
