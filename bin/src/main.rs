#[macro_use]
extern crate log;

mod app;
mod camera;
mod demo_scene;
mod image_io;

use app::*;
use camera::*;
use clap::Parser;
use image_io::*;
use integrators::*;
use itertools::iproduct;
use pbr::geometry::*;
use pbr::integrator::*;
use pbr::pbrt::*;
use pbr::rng::*;
use pbr::sampler::*;
use pbr::scene::*;
use pbr::spectrum::*;
use rayon::prelude::*;

/// Vertical field of view of the demo camera in degrees.
const FIELD_OF_VIEW: Float = 45.0;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = render(&options) {
        error!("{e}");
    }
}

/// Pixels of one rendered tile.
struct Tile {
    /// Pixel coordinates and their radiance.
    pixels: Vec<(usize, usize, Spectrum)>,
}

/// Renders the built-in scene and writes the image.
///
/// * `options` - Application options.
fn render(options: &Options) -> Result<(), String> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 {
        return Err(format!("Invalid image resolution {width}x{height}"));
    }
    let spp = if options.spp == 0 {
        warn!("Invalid spp; using 1 sample per pixel");
        1
    } else {
        options.spp
    };

    let scene = demo_scene::build(options);
    let camera = PinholeCamera::look_at(
        Point3f::new(0.0, -6.0, 2.5),
        Point3f::new(0.0, 0.0, 1.0),
        Vector3f::new(0.0, 0.0, 1.0),
        FIELD_OF_VIEW,
        (width, height),
    );
    let integrator = WhittedIntegrator::new(options.max_depth);

    // Compute number of tiles to use for parallel rendering.
    let tile_size = options.tile_size();
    let n_tiles = (
        (width + tile_size - 1) / tile_size,
        (height + tile_size - 1) / tile_size,
    );
    info!("Rendering {}x{} tiles", n_tiles.0, n_tiles.1);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads())
        .build()
        .map_err(|e| format!("Unable to create thread pool: {e}"))?;

    let tiles: Vec<Tile> = pool.install(|| {
        iproduct!(0..n_tiles.0, 0..n_tiles.1)
            .par_bridge()
            .map(|(tile_x, tile_y)| {
                // Compute pixel bounds for tile.
                let x0 = tile_x * tile_size;
                let x1 = min(x0 + tile_size, width);
                let y0 = tile_y * tile_size;
                let y1 = min(y0 + tile_size, height);

                let seed = tile_y * n_tiles.0 + tile_x;
                let mut rng = RNG::new(seed as u64);

                debug!("Starting image tile ({tile_x}, {tile_y})");
                let pixels = iproduct!(y0..y1, x0..x1)
                    .map(|(y, x)| {
                        let l = render_pixel(&scene, &camera, &integrator, (x, y), spp, &mut rng);
                        (x, y, l)
                    })
                    .collect();
                debug!("Finished image tile ({tile_x}, {tile_y})");

                Tile { pixels }
            })
            .collect()
    });
    info!("Rendering finished.");

    // Merge tiles into the image.
    let mut rgb = vec![0.0; width * height * 3];
    for tile in tiles.iter() {
        for &(x, y, l) in tile.pixels.iter() {
            let offset = 3 * (y * width + x);
            rgb[offset..offset + 3].copy_from_slice(&l.to_rgb());
        }
    }

    write_8_bit(&options.image_file, &rgb, width as u32, height as u32)
}

/// Returns the average radiance of `spp` samples within a pixel.
///
/// * `scene`      - The scene.
/// * `camera`     - The camera.
/// * `integrator` - The integrator.
/// * `pixel`      - Pixel coordinates.
/// * `spp`        - Samples per pixel.
/// * `rng`        - Random number generator.
fn render_pixel(
    scene: &Scene,
    camera: &PinholeCamera,
    integrator: &WhittedIntegrator,
    pixel: (usize, usize),
    spp: usize,
    rng: &mut RNG,
) -> Spectrum {
    let mut sum = Spectrum::ZERO;
    for sample_number in 0..spp {
        let sample = PixelSample::jittered(pixel, rng);
        let mut ray = camera.generate_ray(&sample.p_film);
        let mut l = integrator.li(&mut ray, scene, &sample, 0);

        // Issue warning if unexpected radiance value returned.
        if l.has_nans() {
            error!(
                "Not-a-number radiance value returned for pixel ({}, {}), sample {}. Setting to black.",
                pixel.0, pixel.1, sample_number
            );
            l = Spectrum::ZERO;
        } else if l.has_infs() {
            error!(
                "Infinite radiance value returned for pixel ({}, {}), sample {}. Setting to black.",
                pixel.0, pixel.1, sample_number
            );
            l = Spectrum::ZERO;
        }

        sum += l;
    }
    sum / spp as Float
}
