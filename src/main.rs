use {
  barnsley_fern::{
    color::Colorer,
    config::Config,
    drawing::Encoding,
    pipeline::{self, Format},
    util,
  },
  anyhow::{bail, Result},
  clap::Parser,
  std::path::{Path, PathBuf},
};

/// Render a Barnsley fern with the chaos game.
#[derive(Parser)]
#[command(version)]
struct Args {
  /// Color transfer function: grayscale or greenscale
  #[arg(short, long, default_value = "greenscale")]
  colorer: Colorer,
  /// Output path; a .png extension selects PNG, anything else a P6 pixmap
  #[arg(short, long)]
  output: Option<PathBuf>,
  /// Canvas size, WIDTHxHEIGHT
  #[arg(short, long, default_value = "1024x1024", value_parser = parse_size)]
  size: (u32, u32),
  /// Chaos game iterations per pixel
  #[arg(short, long, default_value_t = 64)]
  iterations_per_pixel: u64,
  /// Random seed, for reproducible output
  #[arg(long)]
  seed: Option<u64>,
  /// Write a plain (P3) pixmap instead of a binary one
  #[arg(long)]
  ascii: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
  let (w, h) = s.split_once(|c: char| c == 'x' || c == 'X')
    .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", s))?;
  let parse = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("{:?}: {}", v, e));
  Ok((parse(w)?, parse(h)?))
}

/// Format implied by the output extension, with `--ascii` switching pixmaps to `P3`.
fn output_format(path: &Path, ascii: bool) -> Result<Format> {
  match (Format::from_path(path), ascii) {
    (Format::Ppm(_), true) => Ok(Format::Ppm(Encoding::Ascii)),
    (Format::Png, true) => bail!("--ascii only applies to pixmap output, not {}", path.display()),
    (format, false) => Ok(format),
  }
}

fn main() -> Result<()> {
  let args = Args::parse();

  let mut config = Config::default()
    .size(args.size.0, args.size.1)
    .iterations_per_pixel(args.iterations_per_pixel);
  config.seed = args.seed;

  let path = args.output
    .unwrap_or_else(|| format!("barnsley_fern_{}.ppm", args.colorer).into());
  let format = output_format(&path, args.ascii)?;

  let output = pipeline::run_as(&config, args.colorer, &path, format)?;
  println!(
    "{}: {}x{}, {} iterations, {}",
    output.path.display(),
    config.size.width,
    config.size.height,
    output.iterations,
    util::file_size(output.bytes)
  );
  Ok(())
}
