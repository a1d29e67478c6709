//! Nearest-brightness character lookup over a mutable charset.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::glyph::{Font8x8, GlyphRaster};

/// Errors raised by [`CharBrightnessIndex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("charset must contain at least one character")]
    EmptyCharset,
}

/// Normalized brightness used as an ordered map key.
#[derive(Debug, Clone, Copy)]
struct Key(f64);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Extrema of the raw brightness values currently registered.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn over(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Range { min: v, max: v }),
            Some(r) => Some(Range {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Rescale `raw` into `[0, 1]`. A zero-width range collapses everything to 0.
    fn normalize(&self, raw: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.0
        } else {
            (raw - self.min) / span
        }
    }
}

/// Charset with per-character brightness and a nearest-brightness lookup.
///
/// Every character gets a raw brightness from its glyph bitmap. Lookups run
/// against brightness normalized to the current charset's min/max, so the
/// dimmest registered character sits at 0 and the brightest at 1.
///
/// The normalized map is rebuilt only when an add/remove moves the min or
/// max; any other mutation touches a single bucket.
#[derive(Debug, Clone)]
pub struct CharBrightnessIndex<R = Font8x8> {
    raster: R,
    raw: HashMap<char, f64>,
    range: Option<Range>,
    normalized: BTreeMap<Key, BTreeSet<char>>,
}

impl CharBrightnessIndex<Font8x8> {
    /// Index `charset` using the bundled 8x8 font.
    pub fn new(charset: impl IntoIterator<Item = char>) -> Result<Self, IndexError> {
        Self::with_raster(Font8x8, charset)
    }
}

impl<R: GlyphRaster> CharBrightnessIndex<R> {
    /// Index `charset` using a custom glyph raster.
    ///
    /// Duplicate characters are collapsed. Fails if `charset` is empty.
    pub fn with_raster(
        raster: R,
        charset: impl IntoIterator<Item = char>,
    ) -> Result<Self, IndexError> {
        let mut raw = HashMap::new();
        for c in charset {
            raw.entry(c)
                .or_insert_with(|| raster.rasterize(c).brightness());
        }
        if raw.is_empty() {
            return Err(IndexError::EmptyCharset);
        }

        let mut index = Self {
            raster,
            range: Range::over(raw.values().copied()),
            raw,
            normalized: BTreeMap::new(),
        };
        index.rebuild();
        Ok(index)
    }

    /// Character whose normalized brightness is closest to `brightness`.
    ///
    /// The probe is compared with the nearest key at or below it and the
    /// nearest key at or above it. On an exact tie the lower key wins. Within
    /// a bucket the character with the lowest code wins. Probes outside
    /// `[0, 1]` are clamped and NaN is treated as 0.
    ///
    /// Returns `None` only when the index is empty.
    pub fn query(&self, brightness: f64) -> Option<char> {
        let probe = if brightness.is_nan() {
            0.0
        } else {
            brightness.clamp(0.0, 1.0)
        };
        let key = Key(probe);

        let floor = self.normalized.range(..=key).next_back();
        let ceiling = self.normalized.range(key..).next();

        let bucket = match (floor, ceiling) {
            (None, None) => return None,
            (Some((_, bucket)), None) | (None, Some((_, bucket))) => bucket,
            (Some((lo, lo_bucket)), Some((hi, hi_bucket))) => {
                if probe - lo.0 <= hi.0 - probe {
                    lo_bucket
                } else {
                    hi_bucket
                }
            }
        };
        bucket.first().copied()
    }

    /// Register `c`. Returns `false` if it was already present.
    pub fn add(&mut self, c: char) -> bool {
        if self.raw.contains_key(&c) {
            return false;
        }
        let value = self.raster.rasterize(c).brightness();
        self.raw.insert(c, value);

        match self.range {
            Some(range) if range.contains(value) => {
                self.normalized
                    .entry(Key(range.normalize(value)))
                    .or_default()
                    .insert(c);
            }
            _ => {
                log::debug!("{:?} ({:.4}) extends brightness range, rebuilding", c, value);
                self.range = Range::over(self.raw.values().copied());
                self.rebuild();
            }
        }
        true
    }

    /// Unregister `c`. Returns `false` if it wasn't present.
    pub fn remove(&mut self, c: char) -> bool {
        let Some(value) = self.raw.remove(&c) else {
            return false;
        };

        match self.range {
            Some(range) if value != range.min && value != range.max => {
                let key = Key(range.normalize(value));
                if let Some(bucket) = self.normalized.get_mut(&key) {
                    bucket.remove(&c);
                    if bucket.is_empty() {
                        self.normalized.remove(&key);
                    }
                }
            }
            _ => {
                log::debug!("{:?} ({:.4}) held an extremum, rebuilding", c, value);
                self.range = Range::over(self.raw.values().copied());
                self.rebuild();
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.raw.contains_key(&c)
    }

    /// Registered characters in ascending code order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.raw.keys().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Glyph density of `c`, if registered.
    pub fn raw_brightness(&self, c: char) -> Option<f64> {
        self.raw.get(&c).copied()
    }

    /// Brightness of `c` relative to the current charset, if registered.
    pub fn normalized_brightness(&self, c: char) -> Option<f64> {
        let raw = self.raw.get(&c)?;
        self.range.map(|range| range.normalize(*raw))
    }

    /// Distinct normalized keys, ascending.
    pub fn normalized_keys(&self) -> Vec<f64> {
        self.normalized.keys().map(|k| k.0).collect()
    }

    fn rebuild(&mut self) {
        self.normalized.clear();
        let Some(range) = self.range else {
            return;
        };
        for (&c, &raw) in &self.raw {
            self.normalized
                .entry(Key(range.normalize(raw)))
                .or_default()
                .insert(c);
        }
        log::debug!(
            "Rebuilt brightness index: {} chars, {} keys, range {:.4}..={:.4}",
            self.raw.len(),
            self.normalized.len(),
            range.min,
            range.max
        );
    }
}
