//! Shade tables: 16-entry color-index remap palettes and their level keys.
//!
//! A shade is applied by replacing each pixel's color index `i` with
//! `table[i]`. Eight built-in tables exist, four darkening and four
//! lightening, selected by a small integer key with named aliases.

use thiserror::Error;

/// Number of entries in a shade table, one per color index.
pub const TABLE_LEN: usize = 16;

/// An immutable 16-entry remap table over 4-bit color indices.
///
/// `table.apply(i)` yields the replacement index for original index `i`.
/// Every entry is a valid color index (0-15); construction masks each
/// entry to its low nibble, which is the value a 4-bit pixel write keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeTable([u8; TABLE_LEN]);

impl ShadeTable {
    /// The identity mapping: applying it leaves every pixel unchanged.
    pub const IDENTITY: ShadeTable = ShadeTable::new([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
        0x0E, 0x0F,
    ]);

    /// Build a table from raw entries, masking each to the low nibble.
    pub const fn new(entries: [u8; TABLE_LEN]) -> Self {
        let mut masked = entries;
        let mut i = 0;
        while i < TABLE_LEN {
            masked[i] &= 0x0F;
            i += 1;
        }
        ShadeTable(masked)
    }

    /// Replacement index for `index`. Total over all `u8` input; only the
    /// low nibble of `index` participates in the lookup.
    #[inline]
    pub fn apply(&self, index: u8) -> u8 {
        self.0[(index & 0x0F) as usize]
    }

    /// The table equivalent to applying `first`, then `self`.
    pub fn compose(&self, first: &ShadeTable) -> ShadeTable {
        let mut entries = [0u8; TABLE_LEN];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = self.apply(first.0[i]);
        }
        ShadeTable(entries)
    }

    /// The raw entries.
    pub fn entries(&self) -> &[u8; TABLE_LEN] {
        &self.0
    }
}

// Built-in shade data. The light tables carry a high-nibble tag in their
// source bytes; only the low nibble reaches a 4-bit pixel.
const DARK_1: ShadeTable = ShadeTable::new([
    0x0F, 0x0D, 0x0A, 0x0B, 0x0E, 0x04, 0x08, 0x06, 0x0C, 0x06, 0x0B, 0x0C, 0x0F, 0x0B, 0x0C,
    0x0F,
]);
const DARK_2: ShadeTable = ShadeTable::new([
    0x0F, 0x0B, 0x0F, 0x0C, 0x0C, 0x0E, 0x0C, 0x08, 0x0F, 0x08, 0x0C, 0x0F, 0x0F, 0x0C, 0x0F,
    0x0F,
]);
const DARK_3: ShadeTable = ShadeTable::new([
    0x0F, 0x0C, 0x0F, 0x0F, 0x0F, 0x0C, 0x0F, 0x0C, 0x0F, 0x0C, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F,
    0x0F,
]);
const DARK_4: ShadeTable = ShadeTable::new([0x00; TABLE_LEN]);
const LIGHT_1: ShadeTable = ShadeTable::new([
    0x80, 0x82, 0x85, 0x84, 0x81, 0xBC, 0xB7, 0xB9, 0xA3, 0xB9, 0xB4, 0xB5, 0x85, 0xB4, 0x85,
    0xB0,
]);
const LIGHT_2: ShadeTable = ShadeTable::new([
    0xA0, 0xA4, 0xA0, 0xA3, 0xA3, 0xA1, 0xA3, 0xA7, 0xA0, 0xA7, 0xA3, 0xA0, 0xA0, 0xA3, 0xA0,
    0xA0,
]);
const LIGHT_3: ShadeTable = ShadeTable::new([
    0xC0, 0xC3, 0xC0, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0,
]);
const LIGHT_4: ShadeTable = ShadeTable::new([0xE0; TABLE_LEN]);

/// A shade level key. Keys 1-4 darken with increasing strength, 5-8
/// lighten. Unrecognized integer keys resolve to [`ShadeLevel::Dark1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShadeLevel {
    Dark1 = 1,
    Dark2 = 2,
    Dark3 = 3,
    Dark4 = 4,
    Light1 = 5,
    Light2 = 6,
    Light3 = 7,
    Light4 = 8,
}

impl ShadeLevel {
    /// All recognized levels in key order.
    pub const ALL: [ShadeLevel; 8] = [
        ShadeLevel::Dark1,
        ShadeLevel::Dark2,
        ShadeLevel::Dark3,
        ShadeLevel::Dark4,
        ShadeLevel::Light1,
        ShadeLevel::Light2,
        ShadeLevel::Light3,
        ShadeLevel::Light4,
    ];

    /// Map an integer key to a level. Total: any unrecognized key
    /// (zero, negative, or past the last level) yields `Dark1`.
    pub fn from_key(key: i32) -> ShadeLevel {
        match key {
            2 => ShadeLevel::Dark2,
            3 => ShadeLevel::Dark3,
            4 => ShadeLevel::Dark4,
            5 => ShadeLevel::Light1,
            6 => ShadeLevel::Light2,
            7 => ShadeLevel::Light3,
            8 => ShadeLevel::Light4,
            _ => ShadeLevel::Dark1,
        }
    }

    /// The level's integer key.
    pub fn key(self) -> u8 {
        self as u8
    }

    /// Presentational name for the level.
    pub fn name(self) -> &'static str {
        match self {
            ShadeLevel::Dark1 => "dark one",
            ShadeLevel::Dark2 => "dark two",
            ShadeLevel::Dark3 => "dark three",
            ShadeLevel::Dark4 => "dark four",
            ShadeLevel::Light1 => "light one",
            ShadeLevel::Light2 => "light two",
            ShadeLevel::Light3 => "light three",
            ShadeLevel::Light4 => "light four",
        }
    }

    /// The remap table for this level.
    pub fn table(self) -> &'static ShadeTable {
        match self {
            ShadeLevel::Dark1 => &DARK_1,
            ShadeLevel::Dark2 => &DARK_2,
            ShadeLevel::Dark3 => &DARK_3,
            ShadeLevel::Dark4 => &DARK_4,
            ShadeLevel::Light1 => &LIGHT_1,
            ShadeLevel::Light2 => &LIGHT_2,
            ShadeLevel::Light3 => &LIGHT_3,
            ShadeLevel::Light4 => &LIGHT_4,
        }
    }
}

/// Map an integer key straight to its remap table.
///
/// Total over all integers: unrecognized keys yield the level-1 table.
/// Callers rely on this never failing.
pub fn resolve(key: i32) -> &'static ShadeTable {
    ShadeLevel::from_key(key).table()
}

/// Error for parsing a level from a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shade level '{0}'")]
pub struct ShadeLevelParseError(pub String);

impl std::str::FromStr for ShadeLevel {
    type Err = ShadeLevelParseError;

    /// Accepts numeric keys ("1".."8", with the usual fallback for other
    /// integers) and named aliases in either spelling ("dark one",
    /// "dark1", "light four", "light4"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_ascii_lowercase();
        if let Ok(key) = normalized.parse::<i32>() {
            return Ok(ShadeLevel::from_key(key));
        }
        let compact: String = normalized.split_whitespace().collect();
        let level = match compact.as_str() {
            "darkone" | "dark1" => ShadeLevel::Dark1,
            "darktwo" | "dark2" => ShadeLevel::Dark2,
            "darkthree" | "dark3" => ShadeLevel::Dark3,
            "darkfour" | "dark4" => ShadeLevel::Dark4,
            "lightone" | "light1" => ShadeLevel::Light1,
            "lighttwo" | "light2" => ShadeLevel::Light2,
            "lightthree" | "light3" => ShadeLevel::Light3,
            "lightfour" | "light4" => ShadeLevel::Light4,
            _ => return Err(ShadeLevelParseError(s.to_string())),
        };
        Ok(level)
    }
}
