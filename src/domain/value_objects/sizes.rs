//! Raster Sizes Value Object

use std::fmt;

/// Largest edge length an ICO entry can describe
pub const MAX_RASTER_SIZE: u32 = 256;

/// Sizes rendered when nothing else is configured
pub const DEFAULT_RASTER_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Ascending, de-duplicated set of square raster sizes in `1..=256`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RasterSizes(Vec<u32>);

impl RasterSizes {
    /// Build from arbitrary values, dropping anything outside `1..=256`.
    ///
    /// Returns `None` when no valid size remains.
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Option<Self> {
        let mut sizes: Vec<u32> = values
            .into_iter()
            .filter(|n| (1..=MAX_RASTER_SIZE as u64).contains(n))
            .map(|n| n as u32)
            .collect();
        sizes.sort_unstable();
        sizes.dedup();

        if sizes.is_empty() {
            None
        } else {
            Some(Self(sizes))
        }
    }

    /// Parse a comma-separated list such as `16,24,32` or `16, 24, 32`.
    pub fn parse(input: &str) -> Option<Self> {
        if !Self::looks_like_list(input) {
            return None;
        }

        // Digit runs too long for u64 are out of range anyway.
        Self::from_values(input.split(',').filter_map(|s| s.trim().parse::<u64>().ok()))
    }

    /// True when `input` has the shape of a size list (digits separated by commas).
    pub fn looks_like_list(input: &str) -> bool {
        if input.is_empty() || input.trim() != input {
            return false;
        }
        input.split(',').all(|part| {
            let part = part.trim();
            !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
        })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RasterSizes {
    fn default() -> Self {
        Self(DEFAULT_RASTER_SIZES.to_vec())
    }
}

impl fmt::Display for RasterSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", joined.join(", "))
    }
}
