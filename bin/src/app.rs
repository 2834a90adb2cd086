//! Application related stuff

use clap::Parser;

/// Options for rendering the built-in scene.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Image width.
    #[clap(
        long = "width",
        value_name = "NUM",
        default_value_t = 320,
        help = "Width of the output image in pixels."
    )]
    pub width: usize,

    /// Image height.
    #[clap(
        long = "height",
        value_name = "NUM",
        default_value_t = 240,
        help = "Height of the output image in pixels."
    )]
    pub height: usize,

    /// Samples per pixel.
    #[clap(
        long = "spp",
        short = 's',
        value_name = "NUM",
        default_value_t = 4,
        help = "Number of samples taken per pixel."
    )]
    pub spp: usize,

    /// Maximum recursion depth.
    #[clap(
        long = "maxdepth",
        short = 'd',
        value_name = "NUM",
        default_value_t = 5,
        help = "Maximum recursion depth of the integrator."
    )]
    pub max_depth: usize,

    /// Number of threads to use for rendering.
    #[clap(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads for rendering."
    )]
    n_threads: usize,

    /// Tile size.
    #[clap(
        long = "tilesize",
        short = 'p',
        value_name = "NUM",
        default_value_t = 16,
        help = "Size in pixels of square tiles rendered per thread."
    )]
    tile_size: usize,

    /// Path to the image file.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        default_value = "render.png",
        help = "Write the final image to the given filename."
    )]
    pub image_file: String,

    /// Path to a MERL BRDF file.
    #[clap(
        long = "merl",
        value_name = "FILE",
        help = "Use the measured MERL BRDF for the left sphere."
    )]
    pub merl_file: Option<String>,

    /// Path to a Fourier BSDF file.
    #[clap(
        long = "fourier",
        value_name = "FILE",
        help = "Use the tabulated Fourier BSDF for the right sphere."
    )]
    pub fourier_file: Option<String>,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the tile size, at least one pixel.
    pub fn tile_size(&self) -> usize {
        if self.tile_size == 0 {
            warn!("Invalid tilesize");
            1
        } else {
            self.tile_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::parse_from(["pbr-render"]);
        assert_eq!(options.width, 320);
        assert_eq!(options.height, 240);
        assert_eq!(options.spp, 4);
        assert_eq!(options.max_depth, 5);
        assert_eq!(options.threads(), 1);
        assert_eq!(options.image_file, "render.png");
        assert!(options.merl_file.is_none());
    }

    #[test]
    fn zero_threads_falls_back_to_one() {
        let options = Options::parse_from(["pbr-render", "--nthreads", "0", "--tilesize", "0"]);
        assert_eq!(options.threads(), 1);
        assert_eq!(options.tile_size(), 1);
    }
}
