//! Barnsley fern renderer.
//!
//! The fern is the attractor of four affine maps. Running the "chaos game" (repeatedly
//! sending a point through one randomly chosen map) visits the attractor, and counting
//! the visits per pixel gives a density [`histogram`]. The histogram is then mapped to
//! colors and written out as an image.
//!
//! It is split into [`solver`] for the simulation, [`color`] for the transfer functions,
//! and [`drawing`] for rasterization; [`pipeline`] glues them together.
//!
//! # Basic usage
//! ```no_run
//! # use barnsley_fern::{color::Colorer, config::Config, pipeline};
//! # fn main() -> anyhow::Result<()> {
//! // 1024x1024 canvas, 64 chaos game iterations per pixel
//! let config = Config::default().seed(0);
//! pipeline::run(&config, Colorer::Greenscale, "barnsley_fern_green.ppm")?;
//! #   Ok(())
//! # }
//! ```
//! Lower level, rendering into memory:
//! ```
//! # use {
//! #   barnsley_fern::{
//! #     color::Colorer, config::Config,
//! #     drawing::{self, Pixels}, solver,
//! #   },
//! #   rand::SeedableRng,
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default().size(64, 64).iterations_per_pixel(8);
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let histogram = solver::simulate_config(&config, &mut rng);
//! assert_eq!(histogram.total(), (64 * 64 * 8) as f64);
//!
//! let mut pixels = Pixels::default();
//! drawing::render(&histogram, config.normalization, Colorer::Grayscale, &mut pixels)?;
//! assert_eq!(pixels.data.len(), 64 * 64);
//! #   Ok(())
//! # }
//! ```

pub mod util;
pub mod config;
pub mod geometry;
pub mod histogram;
pub mod solver;
pub mod color;
pub mod drawing;
pub mod pipeline;
