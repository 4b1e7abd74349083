//! RGBA color components with a process-wide interning cache.
//!
//! A color may or may not be supported by the receiver of the text;
//! unsupported colors are commonly rendered with the receiver's default.
//! Equality of two colors depends only on the channel values, the name is
//! ignored and serves identification purposes (UIs, debugging).
//!
//! # Invariants
//! - `r`, `g`, `b` are within 0-255 and `a` within 0.0-1.0; out-of-range
//!   values are rejected at construction, never deferred to serialization.
//! - The first color constructed under a given name is cached for the
//!   lifetime of the process; later constructions under the same name with
//!   different channels return fresh, uncached instances.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Name-keyed interning cache, populated on first use and never evicted.
static CACHED_COLORS: OnceLock<Mutex<HashMap<String, Color>>> = OnceLock::new();

/// Error raised when a color channel is outside its legal range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelError {
    /// A red/green/blue channel outside 0-255.
    InvalidChannelValue {
        /// Which channel was out of range.
        channel: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// An alpha value outside 0.0-1.0.
    InvalidAlphaValue {
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::InvalidChannelValue { channel, value } => {
                write!(f, "{} value must be between 0-255, got {}", channel, value)
            }
            ChannelError::InvalidAlphaValue { value } => {
                write!(f, "alpha value must be between 0.0-1.0, got {}", value)
            }
        }
    }
}

impl std::error::Error for ChannelError {}

/// An RGBA color with an identifying name.
///
/// Construct through [`Color::create`] or [`Color::create_rgba`] so that
/// instances are interned by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    name: String,
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl Color {
    /// Creates a fully opaque color, interned by `name`.
    ///
    /// Returns the cached instance when one exists under `name` with the
    /// same channel values. When the cached instance differs in channels, a
    /// new instance is returned and the cache is left untouched.
    pub fn create(name: impl Into<String>, r: i32, g: i32, b: i32) -> Result<Color, ChannelError> {
        Color::create_rgba(name, r, g, b, 1.0)
    }

    /// Creates a color with an explicit alpha, interned by `name`.
    ///
    /// Fails with [`ChannelError`] before the color can enter any tree.
    pub fn create_rgba(
        name: impl Into<String>,
        r: i32,
        g: i32,
        b: i32,
        a: f32,
    ) -> Result<Color, ChannelError> {
        let r = check_channel("red", r)?;
        let g = check_channel("green", g)?;
        let b = check_channel("blue", b)?;
        if !(0.0..=1.0).contains(&a) {
            return Err(ChannelError::InvalidAlphaValue { value: a });
        }
        Ok(Color::intern(name.into(), r, g, b, a))
    }

    /// Interns a color known to be in range.
    ///
    /// First construction under `name` wins and is cached; a later
    /// construction under the same name with different channels returns a
    /// new uncached instance.
    pub(crate) fn intern(name: String, r: u8, g: u8, b: u8, a: f32) -> Color {
        let cache = CACHED_COLORS.get_or_init(|| Mutex::new(HashMap::new()));
        let mut map = cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = map.get(&name) {
            if cached.r == r && cached.g == g && cached.b == b && cached.a.to_bits() == a.to_bits()
            {
                return cached.clone();
            }
            return Color { name, r, g, b, a };
        }

        let color = Color { name, r, g, b, a };
        map.insert(color.name.clone(), color.clone());
        color
    }

    /// The identifying name. Not part of equality.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Red channel, 0-255.
    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel, 0-255.
    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel, 0-255.
    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha, 0.0-1.0.
    #[inline]
    pub fn a(&self) -> f32 {
        self.a
    }
}

fn check_channel(channel: &'static str, value: i32) -> Result<u8, ChannelError> {
    u8::try_from(value).map_err(|_| ChannelError::InvalidChannelValue { channel, value })
}

/// Equality compares only the channel values; the name does not matter.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && self.a.to_bits() == other.a.to_bits()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color[{}, r={}, g={}, b={}, a={}]",
            self.name, self.r, self.g, self.b, self.a
        )
    }
}
