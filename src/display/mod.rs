#[cfg(feature = "gui")]
pub mod window;

use image::imageops::{self, FilterType};
use image::RgbImage;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::error::Result;

#[cfg(feature = "gui")]
pub use window::WindowSurface;

/// Somewhere annotated images can be presented.
///
/// Acquire through [`DisplayGuard`] so `close` runs on every exit path.
pub trait DisplaySurface {
    fn open(&mut self) -> Result<()>;

    /// Queue or present one titled image
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()>;

    /// Block until the user dismisses what was shown
    fn wait_for_dismissal(&mut self) -> Result<()>;

    /// Release the surface. Must tolerate being called more than once.
    fn close(&mut self);
}

/// Scoped acquisition of a [`DisplaySurface`]; closes it on drop
pub struct DisplayGuard<'a, S: DisplaySurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DisplaySurface + ?Sized> DisplayGuard<'a, S> {
    pub fn open(surface: &'a mut S) -> Result<Self> {
        surface.open()?;
        Ok(Self { surface })
    }
}

impl<S: DisplaySurface + ?Sized> Deref for DisplayGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DisplaySurface + ?Sized> DerefMut for DisplayGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DisplaySurface + ?Sized> Drop for DisplayGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.close();
    }
}

/// Headless surface: the last image shown is written to `path` on dismissal
pub struct FileSurface {
    path: PathBuf,
    latest: Option<RgbImage>,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            latest: None,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DisplaySurface for FileSurface {
    fn open(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        debug!("{}: {}x{}", title, image.width(), image.height());
        self.latest = Some(image.clone());
        Ok(())
    }

    fn wait_for_dismissal(&mut self) -> Result<()> {
        if let Some(image) = self.latest.take() {
            image.save(&self.path)?;
            info!("Wrote {}", self.path.display());
        }
        Ok(())
    }

    fn close(&mut self) {
        self.latest = None;
    }
}

/// Output size that fits `ratio` of the screen while keeping aspect ratio.
/// Sizes already within bounds come back unchanged.
pub fn fit_to_screen(width: u32, height: u32, config: &DisplayConfig) -> (u32, u32) {
    let max_width = (config.fit_ratio * config.screen_width as f64) as u32;
    let max_height = (config.fit_ratio * config.screen_height as f64) as u32;

    if (width <= max_width && height <= max_height) || height == 0 {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let (mut out_width, mut out_height) = (width, height);
    if out_width > max_width {
        out_width = max_width;
        out_height = (out_width as f64 / aspect) as u32;
    }
    if out_height > max_height {
        out_height = max_height;
        out_width = (out_height as f64 * aspect) as u32;
    }
    (out_width.max(1), out_height.max(1))
}

/// Shrink an image for presentation; never used on detection inputs
pub fn resize_to_fit(image: &RgbImage, config: &DisplayConfig) -> RgbImage {
    let (width, height) = fit_to_screen(image.width(), image.height(), config);
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Triangle)
}
