//! Driver configuration types and builder

pub use crate::error::{BuilderError, MAX_BRIGHTNESS};

/// Default time each frame of a sliding text stays on the display
pub const DEFAULT_SLIDE_DELAY_MS: u32 = 500;

/// Display brightness (pulse width), 0 = dimmest, 7 = brightest
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest setting
    pub const MIN: Self = Self(0);
    /// Brightest setting
    pub const MAX: Self = Self(MAX_BRIGHTNESS);
    /// Level applied by [`crate::Tm1638::begin`] unless configured otherwise
    pub const DEFAULT: Self = Self(2);

    /// Create a brightness level with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if `level > MAX_BRIGHTNESS`
    pub fn new(level: u8) -> Result<Self, BuilderError> {
        if level > MAX_BRIGHTNESS {
            return Err(BuilderError::InvalidBrightness { level });
        }
        Ok(Self(level))
    }

    /// The raw level, 0..=7
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Driver configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Brightness applied by `begin` and `display_on`
    pub brightness: Brightness,
    /// Frame time of `display_sliding_text`, in milliseconds
    pub slide_delay_ms: u32,
    /// Whether `begin` switches the display on before applying brightness
    pub activate_on_begin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().into_config()
    }
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```
/// use tm1638::{Brightness, Builder};
///
/// let brightness = match Brightness::new(5) {
///     Ok(brightness) => brightness,
///     Err(_) => return,
/// };
/// let config = Builder::new().brightness(brightness).slide_delay_ms(250).build();
/// assert_eq!(config.brightness.level(), 5);
/// assert_eq!(config.slide_delay_ms, 250);
/// ```
#[must_use]
pub struct Builder {
    /// Brightness applied by `begin` and `display_on`
    brightness: Brightness,
    /// Frame time of `display_sliding_text`, in milliseconds
    slide_delay_ms: u32,
    /// Whether `begin` switches the display on before applying brightness
    activate_on_begin: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            brightness: Brightness::DEFAULT,
            slide_delay_ms: DEFAULT_SLIDE_DELAY_MS,
            activate_on_begin: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the brightness
    pub fn brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the brightness from a raw level
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if `level > MAX_BRIGHTNESS`
    pub fn brightness_level(self, level: u8) -> Result<Self, BuilderError> {
        Ok(self.brightness(Brightness::new(level)?))
    }

    /// Set the frame time of sliding text
    pub fn slide_delay_ms(mut self, delay_ms: u32) -> Self {
        self.slide_delay_ms = delay_ms;
        self
    }

    /// Set whether `begin` sends the activate command
    pub fn activate_on_begin(mut self, value: bool) -> Self {
        self.activate_on_begin = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.into_config()
    }

    fn into_config(self) -> Config {
        Config {
            brightness: self.brightness,
            slide_delay_ms: self.slide_delay_ms,
            activate_on_begin: self.activate_on_begin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_range() {
        assert_eq!(Brightness::new(0).unwrap(), Brightness::MIN);
        assert_eq!(Brightness::new(7).unwrap(), Brightness::MAX);
        assert!(matches!(
            Brightness::new(8),
            Err(BuilderError::InvalidBrightness { level: 8 })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build();
        assert_eq!(config.brightness, Brightness::DEFAULT);
        assert_eq!(config.brightness.level(), 2);
        assert_eq!(config.slide_delay_ms, DEFAULT_SLIDE_DELAY_MS);
        assert!(config.activate_on_begin);
    }

    #[test]
    fn test_builder_brightness_level_rejects_out_of_range() {
        assert!(Builder::new().brightness_level(9).is_err());
        let config = Builder::new().brightness_level(7).unwrap().build();
        assert_eq!(config.brightness, Brightness::MAX);
    }

    #[test]
    fn test_config_default_matches_builder() {
        let config = Config::default();
        assert_eq!(config.slide_delay_ms, 500);
        assert!(config.activate_on_begin);
    }
}
