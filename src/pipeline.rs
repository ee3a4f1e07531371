//! Simulation followed by rasterization, with the destination acquired up front.

use {
  crate::{
    color::Colorer,
    config::Config,
    drawing::{self, Encoding, PpmWriter, Sink},
    profile,
    solver,
  },
  anyhow::{Context, Result},
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  std::path::{Path, PathBuf},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
  Ppm(Encoding),
  Png,
}

impl Format {
  /// `.png` selects PNG, anything else a binary pixmap.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("png") => Format::Png,
      _ => Format::Ppm(Encoding::Binary),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Output {
  pub path: PathBuf,
  pub format: Format,
  pub bytes: u64,
  pub iterations: u64
}

/// Seeded generator when `config.seed` is set, otherwise seeded from the OS.
pub fn rng(config: &Config) -> Pcg64 {
  match config.seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy()
  }
}

/// Simulate `config` and feed the raster into `sink`.
pub fn render_to(
  config: &Config,
  colorer: Colorer,
  sink: &mut impl Sink,
  rng: &mut impl Rng
) -> Result<()> {
  config.validate()?;
  let histogram = profile!("simulate", solver::simulate_config(config, rng));
  profile!("render", drawing::render(&histogram, config.normalization, colorer, sink))
}

/// Render the fern described by `config` into the file at `path`.
///
/// The file is created before any simulation work, so an unwritable destination fails fast.
pub fn run(config: &Config, colorer: Colorer, path: impl AsRef<Path>) -> Result<Output> {
  let format = Format::from_path(path.as_ref());
  run_as(config, colorer, path, format)
}

pub fn run_as(config: &Config, colorer: Colorer, path: impl AsRef<Path>, format: Format) -> Result<Output> {
  let path = path.as_ref();
  config.validate()?;
  let mut rng = rng(config);

  match format {
    Format::Ppm(encoding) => {
      let mut writer = PpmWriter::create(path, encoding)?;
      render_to(config, colorer, &mut writer, &mut rng)?;
    }
    Format::Png => write_png(config, colorer, path, &mut rng)?,
  }

  let bytes = std::fs::metadata(path)
    .with_context(|| format!("unable to stat {}", path.display()))?
    .len();
  Ok(Output {
    path: path.to_path_buf(),
    format,
    bytes,
    iterations: config.iterations()
  })
}

#[cfg(feature = "png")]
fn write_png(config: &Config, colorer: Colorer, path: &Path, rng: &mut impl Rng) -> Result<()> {
  use std::{fs::File, io::{BufWriter, Write}};

  let file = File::create(path)
    .with_context(|| format!("unable to create {}", path.display()))?;
  let mut writer = BufWriter::new(file);
  let mut sink = drawing::ImageSink::new();
  render_to(config, colorer, &mut sink, rng)?;
  image::DynamicImage::ImageRgb8(sink.into_image())
    .write_to(&mut writer, image::ImageOutputFormat::Png)
    .with_context(|| format!("unable to encode {}", path.display()))?;
  writer.flush()
    .with_context(|| format!("unable to write {}", path.display()))?;
  Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_: &Config, _: Colorer, path: &Path, _: &mut impl Rng) -> Result<()> {
  anyhow::bail!("{}: PNG output requires the `png` feature", path.display())
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::drawing::{Header, Pixels},
  };

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("barnsley-fern-{}-{}", std::process::id(), name))
  }

  #[test] fn writes_ppm() -> Result<()> {
    let path = temp_path("small.ppm");
    let config = Config::default().size(48, 32).iterations_per_pixel(8).seed(0);
    let output = run(&config, Colorer::Greenscale, &path)?;
    let bytes = std::fs::read(&path)?;
    std::fs::remove_file(&path)?;

    let (header, offset) = Header::parse(&bytes)?;
    assert_eq!(header.size, config.size);
    assert_eq!(bytes.len() - offset, 48 * 32 * 3);
    assert_eq!(output.bytes, bytes.len() as u64);
    assert_eq!(output.iterations, 48 * 32 * 8);
    assert_eq!(output.format, Format::Ppm(Encoding::Binary));
    Ok(())
  }

  #[test] fn seeded_output_is_reproducible() -> Result<()> {
    let config = Config::default().size(32, 32).iterations_per_pixel(16).seed(42);
    let mut a = Pixels::default();
    let mut b = Pixels::default();
    render_to(&config, Colorer::Grayscale, &mut a, &mut rng(&config))?;
    render_to(&config, Colorer::Grayscale, &mut b, &mut rng(&config))?;
    assert_eq!(a, b);
    // something got drawn
    assert!(a.data.iter().any(|c| *c != crate::color::WHITE));
    Ok(())
  }

  #[test] fn unwritable_destination_fails_fast() {
    let path = temp_path("missing-dir").join("out.ppm");
    // large enough to notice if the simulation ran before the failure
    let config = Config::default().iterations_per_pixel(1 << 20);
    let err = run(&config, Colorer::Grayscale, &path).unwrap_err();
    assert!(err.to_string().contains("unable to create"), "{}", err);
    assert!(!path.exists());
  }

  #[test] fn invalid_config_writes_nothing() {
    let path = temp_path("invalid.ppm");
    assert!(run(&Config::default().size(0, 0), Colorer::Grayscale, &path).is_err());
    assert!(!path.exists());
  }

  #[test] fn format_from_extension() {
    assert_eq!(Format::from_path(Path::new("a.PNG")), Format::Png);
    assert_eq!(Format::from_path(Path::new("a.ppm")), Format::Ppm(Encoding::Binary));
    assert_eq!(Format::from_path(Path::new("fern")), Format::Ppm(Encoding::Binary));
  }

  #[cfg(feature = "png")]
  #[test] fn writes_png() -> Result<()> {
    let path = temp_path("small.png");
    let config = Config::default().size(16, 24).iterations_per_pixel(4).seed(1);
    run(&config, Colorer::Grayscale, &path)?;
    let image = image::open(&path)?.to_rgb8();
    std::fs::remove_file(&path)?;
    assert_eq!(image.dimensions(), (16, 24));
    Ok(())
  }

  #[cfg(all(feature = "png", target_os = "linux"))]
  #[test] fn failed_png_write_is_an_error() -> Result<()> {
    // small enough to stay in the write buffer until the final flush
    let config = Config::default().size(4, 4).iterations_per_pixel(1).seed(0);
    let png = temp_path("full.png");
    let ppm = temp_path("full.ppm");
    std::os::unix::fs::symlink("/dev/full", &png)?;
    std::os::unix::fs::symlink("/dev/full", &ppm)?;
    let results = [
      run(&config, Colorer::Grayscale, &png),
      run(&config, Colorer::Grayscale, &ppm),
    ];
    std::fs::remove_file(&png)?;
    std::fs::remove_file(&ppm)?;
    for result in results {
      assert!(result.is_err(), "{:?}", result);
    }
    Ok(())
  }
}
