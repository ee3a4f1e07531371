//! Intensity to color transfer functions.
//!
//! Inputs are normalized intensities, `1.0` for background and `<= 0.0` for saturated
//! pixels. Channels are computed in floating point and truncated to 8 bits.

use {
  image::Rgb,
  std::{fmt, str::FromStr},
};

#[cfg(test)] mod tests;

pub const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
pub const GREEN: Rgb<u8> = Rgb([0x00, 0xFF, 0x00]);

/// Multiply every channel by `t`, truncating the result.
pub fn scale(color: Rgb<u8>, t: f64) -> Rgb<u8> {
  let t = t.clamp(0.0, 1.0);
  Rgb(color.0.map(|c| (t * c as f64) as u8))
}

#[inline]
fn ease(value: f64) -> f64 {
  let sq = value * value;
  let quad = sq * sq;
  quad * quad
}

/// Black for saturated pixels, then a steep `value^8` ramp to white.
pub fn grayscale(value: f64) -> Rgb<u8> {
  if value <= 0.0 {
    return BLACK;
  }
  scale(WHITE, ease(value))
}

/// Green between half and full intensity on a `value^8` ramp, white background.
pub fn greenscale(value: f64) -> Rgb<u8> {
  if value <= 0.0 {
    scale(GREEN, 0.5)
  } else if value < 1.0 {
    scale(GREEN, 0.5 + 0.5 * ease(value))
  } else {
    WHITE
  }
}

/// Closed set of color mapping strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Colorer {
  #[default]
  Grayscale,
  Greenscale,
}

impl Colorer {
  pub const ALL: [Colorer; 2] = [Colorer::Grayscale, Colorer::Greenscale];

  #[inline]
  pub fn map(self, value: f64) -> Rgb<u8> {
    match self {
      Colorer::Grayscale => grayscale(value),
      Colorer::Greenscale => greenscale(value),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Colorer::Grayscale => "grayscale",
      Colorer::Greenscale => "greenscale",
    }
  }
}

impl fmt::Display for Colorer {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Colorer {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> anyhow::Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "grayscale" | "greyscale" | "gray" | "grey" => Ok(Colorer::Grayscale),
      "greenscale" | "green" => Ok(Colorer::Greenscale),
      other => anyhow::bail!("unknown colorer {:?}, expected one of: grayscale, greenscale", other)
    }
  }
}
