use image::{imageops::FilterType, DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::error::AppError;

/// Images above this many pixels are downsampled before analysis.
pub const MAX_ANALYSIS_PIXELS: u64 = 1_000_000;
/// Longest side after downsampling.
pub const ANALYSIS_DIMENSION: u32 = 500;
/// Color variance above which an image is treated as containing a distinct object.
pub const COMPLEXITY_THRESHOLD: f64 = 2000.0;

/// Aggregate color and complexity statistics for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelStatistics {
    pub width: u32,
    pub height: u32,
    pub mean_r: f64,
    pub mean_g: f64,
    pub mean_b: f64,
    /// Mean of the per-channel population variances.
    pub color_variance: f64,
    pub brightness: f64,
    pub orange_ratio: f64,
    pub gray_ratio: f64,
    pub golden_ratio: f64,
    pub red_ratio: f64,
    pub white_ratio: f64,
    pub black_ratio: f64,
    pub is_complex: bool,
}

impl PixelStatistics {
    /// Builds statistics from channel means, variance and bucket ratios,
    /// deriving `brightness` and `is_complex`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        (width, height): (u32, u32),
        (mean_r, mean_g, mean_b): (f64, f64, f64),
        color_variance: f64,
        orange_ratio: f64,
        gray_ratio: f64,
        golden_ratio: f64,
        red_ratio: f64,
        white_ratio: f64,
        black_ratio: f64,
    ) -> Self {
        Self {
            width,
            height,
            mean_r,
            mean_g,
            mean_b,
            color_variance,
            brightness: (mean_r + mean_g + mean_b) / 3.0,
            orange_ratio,
            gray_ratio,
            golden_ratio,
            red_ratio,
            white_ratio,
            black_ratio,
            is_complex: color_variance > COMPLEXITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PixelStatisticsCollector;

impl PixelStatisticsCollector {
    pub fn new() -> Self {
        Self
    }

    pub fn collect(&self, image: &DynamicImage) -> Result<PixelStatistics, AppError> {
        let rgb_image = self.prepare(image);
        self.collect_rgb(&rgb_image)
    }

    /// Converts to RGB and bounds the resolution the thresholds were tuned against.
    fn prepare(&self, image: &DynamicImage) -> RgbImage {
        let (width, height) = (image.width(), image.height());
        if width as u64 * height as u64 > MAX_ANALYSIS_PIXELS {
            debug!(
                "Downsampling {}x{} image to fit {}px",
                width, height, ANALYSIS_DIMENSION
            );
            image
                .resize(ANALYSIS_DIMENSION, ANALYSIS_DIMENSION, FilterType::Lanczos3)
                .to_rgb8()
        } else {
            image.to_rgb8()
        }
    }

    pub fn collect_rgb(&self, image: &RgbImage) -> Result<PixelStatistics, AppError> {
        let total = image.pixels().len();
        if total == 0 {
            return Err(AppError::Heuristic("image contains no pixels".to_string()));
        }
        let n = total as f64;

        let mut sums = [0u64; 3];
        for px in image.pixels() {
            for (sum, channel) in sums.iter_mut().zip(px.0) {
                *sum += channel as u64;
            }
        }
        let means = sums.map(|sum| sum as f64 / n);

        let mut squared = [0f64; 3];
        let mut counts = BucketCounts::default();
        for px in image.pixels() {
            for ((acc, channel), mean) in squared.iter_mut().zip(px.0).zip(means) {
                let delta = channel as f64 - mean;
                *acc += delta * delta;
            }
            counts.record(px);
        }
        let color_variance = squared.iter().map(|acc| acc / n).sum::<f64>() / 3.0;

        let ratio = |count: usize| count as f64 / n;
        Ok(PixelStatistics::from_parts(
            image.dimensions(),
            (means[0], means[1], means[2]),
            color_variance,
            ratio(counts.orange),
            ratio(counts.gray),
            ratio(counts.golden),
            ratio(counts.red),
            ratio(counts.white),
            ratio(counts.black),
        ))
    }
}

#[derive(Debug, Default)]
struct BucketCounts {
    orange: usize,
    gray: usize,
    golden: usize,
    red: usize,
    white: usize,
    black: usize,
}

impl BucketCounts {
    fn record(&mut self, px: &Rgb<u8>) {
        let [r, g, b] = px.0.map(f64::from);
        self.orange += is_orange(r, g, b) as usize;
        self.gray += is_gray(r, g, b) as usize;
        self.golden += is_golden(r, g, b) as usize;
        self.red += is_red(r, g, b) as usize;
        self.white += is_white(r, g, b) as usize;
        self.black += is_black(r, g, b) as usize;
    }
}

// Orange, ginger and brown fur tones.
fn is_orange(r: f64, g: f64, b: f64) -> bool {
    (r > 150.0 && r > g * 1.2 && r > b * 1.2)
        || (r > 100.0 && g > 80.0 && b < 100.0 && r > b * 1.5)
        || (r > 80.0 && g > 60.0 && b < 80.0 && (r - g).abs() < 40.0)
}

fn is_gray(r: f64, g: f64, b: f64) -> bool {
    (r - g).abs() < 20.0 && (g - b).abs() < 20.0 && (r + g + b) / 3.0 < 200.0
}

fn is_golden(r: f64, g: f64, b: f64) -> bool {
    r > 150.0 && g > 120.0 && b < 100.0 && r > g * 0.9 && g > b * 1.5
}

fn is_red(r: f64, g: f64, b: f64) -> bool {
    r > 150.0 && r > g * 1.3 && r > b * 1.3
}

fn is_white(r: f64, g: f64, b: f64) -> bool {
    r > 200.0 && g > 200.0 && b > 200.0
}

fn is_black(r: f64, g: f64, b: f64) -> bool {
    (r + g + b) / 3.0 < 50.0
}
