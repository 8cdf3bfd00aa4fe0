//! Module which defines the demotivator generator.

use std::path::Path;

use antidote::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use image::{DynamicImage, RgbaImage};

use model::Config;
use resources::{self, Font, FontError};
use util::cache::ThreadSafeCache;
use super::error::CaptionError;
use super::task::CaptionTask;


/// Demotivator generator.
///
/// The generator is thread-safe (`Sync`): any number of `generate` calls
/// may run concurrently on the same instance. Each call works on its own
/// snapshot of the configuration and its own output canvas;
/// the only shared state is the font cache, which is synchronized internally.
#[derive(Debug)]
pub struct Generator {
    config: RwLock<Config>,
    font_cache: ThreadSafeCache<String, Font>,
}

impl Generator {
    /// Create a new generator with given configuration.
    ///
    /// Every generator owns its font cache; fonts loaded from files
    /// are retained there until `clear_font_cache` is called.
    pub fn new(config: Config) -> Self {
        Generator{
            config: RwLock::new(config),
            font_cache: ThreadSafeCache::new(),
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(Config::default())
    }
}

// Generation.
impl Generator {
    /// Generate a demotivator from given image.
    ///
    /// Returns a newly allocated RGBA canvas with the composed poster;
    /// the source image is left untouched. On error, no canvas is returned.
    pub fn generate(&self, image: &DynamicImage) -> Result<RgbaImage, CaptionError> {
        let config = self.config().clone();
        CaptionTask::new(config, &self.font_cache, image).perform()
    }
}

// Configuration access.
impl Generator {
    /// Read the generator's configuration.
    #[inline]
    pub fn config(&self) -> RwLockReadGuard<Config> {
        self.config.read()
    }

    /// Modify the generator's configuration.
    ///
    /// Changes affect future `generate` calls, not the ones in progress.
    #[inline]
    pub fn config_mut(&self) -> RwLockWriteGuard<Config> {
        self.config.write()
    }
}

// Managing fonts.
impl Generator {
    /// Load a font file and make it the font for subsequent generations.
    ///
    /// The file is read & validated eagerly, so that an unusable font
    /// surfaces here rather than in a later `generate` call.
    pub fn load_font_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FontError> {
        let path = path.as_ref();
        let bytes = resources::load_font_file(path)?;

        let mut config = self.config_mut();
        config.font_data = Some(bytes);
        config.font_path = Some(path.to_owned());
        Ok(())
    }

    /// Preemptively load a font into the generator's cache.
    pub fn preload_font<P: AsRef<Path>>(&self, path: P) -> Result<(), FontError> {
        let path = path.as_ref();
        let bytes = resources::load_font_file(path)?;
        let font = resources::parse_font(bytes)?;
        self.font_cache.put(path.display().to_string(), font);
        Ok(())
    }

    /// Purge the font cache.
    ///
    /// Subsequent generations will load font files from disk again.
    pub fn clear_font_cache(&self) {
        self.font_cache.clear()
    }

    /// Return a reference to the internal font cache.
    /// This can be used to examine cache statistics (hits & misses).
    pub fn font_cache(&self) -> &ThreadSafeCache<String, Font> {
        &self.font_cache
    }
}


/// Generate a demotivator with given caption texts and default settings.
pub fn generate_with_text(image: &DynamicImage, top_text: &str, bottom_text: &str)
    -> Result<RgbaImage, CaptionError>
{
    let mut config = Config::default();
    config.top_text = top_text.to_owned();
    config.bottom_text = bottom_text.to_owned();
    Generator::new(config).generate(image)
}

/// Generate a demotivator, rendering the captions with a custom font file.
pub fn generate_with_custom_font<P: AsRef<Path>>(
    image: &DynamicImage, top_text: &str, bottom_text: &str, font_path: P)
    -> Result<RgbaImage, CaptionError>
{
    let mut config = Config::default();
    config.top_text = top_text.to_owned();
    config.bottom_text = bottom_text.to_owned();
    config.font_path = Some(font_path.as_ref().to_owned());
    Generator::new(config).generate(image)
}
