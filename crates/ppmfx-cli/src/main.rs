//! ppmfx CLI - apply pixel and geometry filters to PPM images.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use ppmfx_core::{read_ppm, write_ppm, PixelBuffer, PpmVariant, Transform};
use tracing::{debug, warn};

/// Minimum accepted input size on either axis. Presentation-layer policy;
/// the core library itself has no size floor.
const MIN_DIMENSION: u32 = 400;

/// Command-line arguments for the ppmfx tool.
#[derive(Parser, Debug)]
#[command(name = "ppmfx")]
#[command(version)]
#[command(about = "Apply pixel and geometry filters to PPM images")]
#[command(long_about = "ppmfx loads an uncompressed PPM image (binary P6 or \
    ascii P3), applies one transform, and writes the result in the same \
    encoding.\n\n\
    EXAMPLES:\n    \
    ppmfx -i photo.ppm grayscale\n    \
    ppmfx -i photo.ppm xray --intensity 1.8\n    \
    ppmfx -i photo.ppm --format ascii rotate90\n    \
    ppmfx -i photo.ppm -o out.ppm sepia")]
struct Args {
    /// Input PPM file (must end in .ppm)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file path (default: <prefix>_<input name> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sample encoding of the input, also used for the output
    #[arg(long, value_enum, default_value = "binary")]
    format: FormatArg,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    operation: Operation,
}

/// Sample encoding choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Binary samples (magic P6)
    Binary,
    /// Ascii decimal samples (magic P3)
    Ascii,
}

impl From<FormatArg> for PpmVariant {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Binary => PpmVariant::Binary,
            FormatArg::Ascii => PpmVariant::Ascii,
        }
    }
}

/// The transform to apply.
#[derive(Subcommand, Debug)]
enum Operation {
    /// Convert to grayscale
    Grayscale,
    /// Convert to negative
    Negative,
    /// Convert to an x-ray style contrast remap
    Xray {
        /// Intensity exponent, clamped to 1.0-2.0
        #[arg(long, default_value_t = 1.5)]
        intensity: f32,
    },
    /// Convert to sepia (fixed weighted matrix)
    Sepia,
    /// Convert to sepia (warm/cool factor plus flat tint offset)
    SepiaTint {
        /// Warm/cool channel factor
        #[arg(long, default_value_t = 0.3)]
        factor: f32,
        /// Flat tint added to warm channels, subtracted from blue
        #[arg(long, default_value_t = 20.0)]
        tint: f32,
    },
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
}

impl Operation {
    /// Build the core transform, clamping parameters where needed.
    fn transform(&self) -> Transform {
        match *self {
            Operation::Grayscale => Transform::Grayscale,
            Operation::Negative => Transform::Negative,
            Operation::Xray { intensity } => Transform::XRay {
                intensity: clamp_intensity(intensity),
            },
            Operation::Sepia => Transform::SepiaMatrix,
            Operation::SepiaTint { factor, tint } => Transform::SepiaTint { factor, tint },
            Operation::Rotate90 => Transform::Rotate90Cw,
            Operation::Rotate180 => Transform::Rotate180,
        }
    }

    /// Prefix used for the default output filename.
    fn prefix(&self) -> &'static str {
        match self {
            Operation::Grayscale => "gray_",
            Operation::Negative => "negative_",
            Operation::Xray { .. } => "xray_",
            Operation::Sepia => "sepia_",
            Operation::SepiaTint { .. } => "sepia_tint_",
            Operation::Rotate90 => "rot90_",
            Operation::Rotate180 => "rot180_",
        }
    }
}

/// Clamp the x-ray intensity exponent to its accepted range.
fn clamp_intensity(intensity: f32) -> f32 {
    let clamped = intensity.clamp(1.0, 2.0);
    if clamped != intensity {
        warn!(
            "intensity {} out of range, clamped to {}",
            intensity, clamped
        );
    }
    clamped
}

/// Build the default output path: `<prefix><input name>` next to the input.
fn default_output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}

fn check_extension(path: &Path) -> anyhow::Result<()> {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("ppm") => Ok(()),
        _ => bail!("input file must have a .ppm extension: {}", path.display()),
    }
}

fn check_min_dimensions(image: &PixelBuffer) -> anyhow::Result<()> {
    if image.width < MIN_DIMENSION || image.height < MIN_DIMENSION {
        bail!(
            "image is {}x{}, minimum accepted size is {}x{}",
            image.width,
            image.height,
            MIN_DIMENSION,
            MIN_DIMENSION
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    check_extension(&args.input)?;

    let variant = PpmVariant::from(args.format);
    let image = read_ppm(&args.input, variant)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    debug!("loaded {}x{} image", image.width, image.height);

    check_min_dimensions(&image)?;

    let transform = args.operation.transform();
    let result = transform.apply(&image);
    debug!("applied {:?}, output {}x{}", transform, result.width, result.height);

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, args.operation.prefix()));
    write_ppm(&out_path, &result, variant)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!(
        "{} {}",
        style("Saved").green().bold(),
        style(out_path.display()).white()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_prefixes() {
        assert_eq!(Operation::Grayscale.prefix(), "gray_");
        assert_eq!(Operation::Negative.prefix(), "negative_");
        assert_eq!(Operation::Xray { intensity: 1.5 }.prefix(), "xray_");
        assert_eq!(Operation::Sepia.prefix(), "sepia_");
        assert_eq!(
            Operation::SepiaTint {
                factor: 0.3,
                tint: 20.0
            }
            .prefix(),
            "sepia_tint_"
        );
        assert_eq!(Operation::Rotate90.prefix(), "rot90_");
        assert_eq!(Operation::Rotate180.prefix(), "rot180_");
    }

    #[test]
    fn test_default_output_path_keeps_directory() {
        let path = default_output_path(Path::new("/photos/cat.ppm"), "gray_");
        assert_eq!(path, PathBuf::from("/photos/gray_cat.ppm"));
    }

    #[test]
    fn test_default_output_path_bare_filename() {
        let path = default_output_path(Path::new("cat.ppm"), "rot90_");
        assert_eq!(path, PathBuf::from("rot90_cat.ppm"));
    }

    #[test]
    fn test_clamp_intensity() {
        assert_eq!(clamp_intensity(0.5), 1.0);
        assert_eq!(clamp_intensity(1.0), 1.0);
        assert_eq!(clamp_intensity(1.5), 1.5);
        assert_eq!(clamp_intensity(2.0), 2.0);
        assert_eq!(clamp_intensity(3.0), 2.0);
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("photo.ppm")).is_ok());
        assert!(check_extension(Path::new("photo.PPM")).is_ok());
        assert!(check_extension(Path::new("photo.png")).is_err());
        assert!(check_extension(Path::new("photo")).is_err());
    }

    #[test]
    fn test_check_min_dimensions() {
        let big = PixelBuffer::new(400, 400, vec![0u8; 400 * 400 * 3]);
        assert!(check_min_dimensions(&big).is_ok());

        let narrow = PixelBuffer::new(399, 400, vec![0u8; 399 * 400 * 3]);
        assert!(check_min_dimensions(&narrow).is_err());

        let short = PixelBuffer::new(400, 399, vec![0u8; 400 * 399 * 3]);
        assert!(check_min_dimensions(&short).is_err());
    }

    #[test]
    fn test_xray_intensity_clamped_in_transform() {
        let op = Operation::Xray { intensity: 5.0 };
        match op.transform() {
            Transform::XRay { intensity } => assert_eq!(intensity, 2.0),
            other => panic!("unexpected transform {:?}", other),
        }
    }

    #[test]
    fn test_args_parse_smoke() {
        use clap::Parser;
        let args = Args::try_parse_from([
            "ppmfx", "-i", "photo.ppm", "--format", "ascii", "xray", "--intensity", "1.8",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("photo.ppm"));
        assert_eq!(args.format, FormatArg::Ascii);
        assert!(matches!(args.operation, Operation::Xray { intensity } if intensity == 1.8));
    }
}
