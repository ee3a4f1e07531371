//! Netpbm pixmap output.
//!
//! A whitespace-delimited text header, `"P6\n{width} {height}\n255\n"`, followed by raw
//! red-green-blue byte triples in row-major order with no padding. The plain `P3`
//! variant writes each pixel as a line of decimal channel values instead.

use {
  super::Sink,
  crate::geometry::PixelSpace,
  anyhow::{bail, Context, Result},
  euclid::Size2D,
  image::Rgb,
  std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
  },
};

pub const MAX_VALUE: u32 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Encoding {
  /// `P3`
  Ascii,
  /// `P6`
  #[default]
  Binary,
}

impl Encoding {
  pub fn magic(self) -> &'static str {
    match self {
      Encoding::Ascii => "P3",
      Encoding::Binary => "P6",
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
  pub encoding: Encoding,
  pub size: Size2D<u32, PixelSpace>,
  pub max_value: u32
}

impl fmt::Display for Header {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}\n{} {}\n{}\n", self.encoding.magic(), self.size.width, self.size.height, self.max_value)
  }
}

impl Header {
  pub fn new(encoding: Encoding, size: Size2D<u32, PixelSpace>) -> Self {
    Self { encoding, size, max_value: MAX_VALUE }
  }

  /// Parse a pixmap header, returning it along with the offset of the first raster byte.
  pub fn parse(bytes: &[u8]) -> Result<(Self, usize)> {
    let mut cursor = 0;
    let mut fields = [0u32; 3];

    let magic = next_token(bytes, &mut cursor)?;
    let encoding = match magic {
      b"P3" => Encoding::Ascii,
      b"P6" => Encoding::Binary,
      other => bail!("unsupported pixmap magic {:?}", String::from_utf8_lossy(other))
    };
    for field in fields.iter_mut() {
      let token = next_token(bytes, &mut cursor)?;
      *field = std::str::from_utf8(token)?
        .parse()
        .with_context(|| format!("invalid header field {:?}", String::from_utf8_lossy(token)))?;
    }
    // exactly one whitespace byte separates the header from the raster
    match bytes.get(cursor) {
      Some(c) if c.is_ascii_whitespace() => cursor += 1,
      _ => bail!("pixmap header is not terminated by whitespace")
    }
    let [width, height, max_value] = fields;
    if max_value == 0 || max_value > 0xFFFF {
      bail!("invalid pixmap max value {}", max_value);
    }
    Ok((Self { encoding, size: Size2D::new(width, height), max_value }, cursor))
  }
}

fn next_token<'a>(bytes: &'a [u8], cursor: &mut usize) -> Result<&'a [u8]> {
  loop {
    match bytes.get(*cursor) {
      Some(c) if c.is_ascii_whitespace() => *cursor += 1,
      // comment runs until the end of line
      Some(&b'#') => while bytes.get(*cursor).map_or(false, |&c| c != b'\n') { *cursor += 1 },
      Some(_) => break,
      None => bail!("unexpected end of pixmap header")
    }
  }
  let start = *cursor;
  while bytes.get(*cursor).map_or(false, |c| !c.is_ascii_whitespace()) {
    *cursor += 1;
  }
  Ok(&bytes[start..*cursor])
}

/// Streams a raster into any writer as a pixmap.
pub struct PpmWriter<W: Write> {
  inner: W,
  encoding: Encoding,
  expected: usize,
  written: usize
}

impl<W: Write> PpmWriter<W> {
  pub fn new(inner: W, encoding: Encoding) -> Self {
    Self { inner, encoding, expected: 0, written: 0 }
  }

  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl PpmWriter<BufWriter<File>> {
  /// Create (or truncate) the file at `path`. The handle is closed when the writer is dropped.
  pub fn create(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
    let path = path.as_ref();
    let file = File::create(path)
      .with_context(|| format!("unable to create {}", path.display()))?;
    Ok(Self::new(BufWriter::new(file), encoding))
  }
}

impl<W: Write> Sink for PpmWriter<W> {
  fn begin(&mut self, size: Size2D<u32, PixelSpace>) -> Result<()> {
    self.expected = size.width as usize * size.height as usize;
    self.written = 0;
    write!(self.inner, "{}", Header::new(self.encoding, size))?;
    Ok(())
  }

  fn put(&mut self, Rgb([r, g, b]): Rgb<u8>) -> Result<()> {
    match self.encoding {
      Encoding::Binary => self.inner.write_all(&[r, g, b])?,
      Encoding::Ascii => writeln!(self.inner, "{} {} {}", r, g, b)?,
    }
    self.written += 1;
    Ok(())
  }

  fn finish(&mut self) -> Result<()> {
    if self.written != self.expected {
      bail!("pixmap declares {} pixels, {} were written", self.expected, self.written);
    }
    self.inner.flush()?;
    Ok(())
  }
}
