//! Game configuration
//!
//! `Settings` is validated once when it is built and never changes afterwards. The game
//! receives it explicitly instead of reading module-level constants.

use std::fmt;

/// Error type for settings that cannot produce a playable round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    EmptyList,
    InvalidBounds { lower: i32, upper: i32 },
    MinListSizeTooLarge { min_list_size: usize, list_size: usize },
    RangeTooSmall { span: u64, list_size: usize },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => write!(f, "List size must be at least 1"),
            Self::InvalidBounds { lower, upper } => write!(
                f,
                "Lower bound ({lower}) must be less than upper bound ({upper})"
            ),
            Self::MinListSizeTooLarge {
                min_list_size,
                list_size,
            } => write!(
                f,
                "Minimum list size ({min_list_size}) cannot exceed list size ({list_size})"
            ),
            Self::RangeTooSmall { span, list_size } => write!(
                f,
                "Range holds {span} numbers, too few for a list of {list_size} unique numbers"
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Validated, immutable game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    debug: bool,
    minimum_age_years: u32,
    minimum_year: i32,
    list_size: usize,
    lower_bound: i32,
    upper_bound: i32,
    min_list_size: usize,
    range_threshold: u32,
}

impl Settings {
    /// Start from the defaults and override individual values
    ///
    /// # Examples
    /// ```
    /// use lucky_number::settings::Settings;
    ///
    /// let settings = Settings::builder().list_size(20).upper_bound(200).build().unwrap();
    /// assert_eq!(settings.list_size(), 20);
    ///
    /// assert!(Settings::builder().lower_bound(5).upper_bound(5).build().is_err());
    /// ```
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Print extra information such as the secret number
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub const fn minimum_age_years(&self) -> u32 {
        self.minimum_age_years
    }

    /// Birth years up to and including this one are rejected
    #[must_use]
    pub const fn minimum_year(&self) -> i32 {
        self.minimum_year
    }

    #[must_use]
    pub const fn list_size(&self) -> usize {
        self.list_size
    }

    #[must_use]
    pub const fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// Phase 2 ends as a loss once fewer numbers than this remain
    #[must_use]
    pub const fn min_list_size(&self) -> usize {
        self.min_list_size
    }

    /// Radius around the secret number that phase 2 clamps the list to
    #[must_use]
    pub const fn range_threshold(&self) -> u32 {
        self.range_threshold
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            minimum_age_years: 18,
            minimum_year: 1900,
            list_size: 10,
            lower_bound: 0,
            upper_bound: 100,
            min_list_size: 3,
            range_threshold: 10,
        }
    }
}

/// Builder for [`Settings`]; `build` runs the validation
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    inner: Settings,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            inner: Settings::default(),
        }
    }
}

impl SettingsBuilder {
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.inner.debug = debug;
        self
    }

    #[must_use]
    pub const fn minimum_age_years(mut self, years: u32) -> Self {
        self.inner.minimum_age_years = years;
        self
    }

    #[must_use]
    pub const fn minimum_year(mut self, year: i32) -> Self {
        self.inner.minimum_year = year;
        self
    }

    #[must_use]
    pub const fn list_size(mut self, size: usize) -> Self {
        self.inner.list_size = size;
        self
    }

    #[must_use]
    pub const fn lower_bound(mut self, lower: i32) -> Self {
        self.inner.lower_bound = lower;
        self
    }

    #[must_use]
    pub const fn upper_bound(mut self, upper: i32) -> Self {
        self.inner.upper_bound = upper;
        self
    }

    #[must_use]
    pub const fn min_list_size(mut self, size: usize) -> Self {
        self.inner.min_list_size = size;
        self
    }

    #[must_use]
    pub const fn range_threshold(mut self, radius: u32) -> Self {
        self.inner.range_threshold = radius;
        self
    }

    /// Validate and freeze the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list size is zero
    /// - The lower bound is not strictly below the upper bound
    /// - The minimum list size exceeds the list size
    /// - The bounds hold fewer numbers than the list size
    pub fn build(self) -> Result<Settings, SettingsError> {
        let s = self.inner;

        if s.list_size == 0 {
            return Err(SettingsError::EmptyList);
        }

        if s.lower_bound >= s.upper_bound {
            return Err(SettingsError::InvalidBounds {
                lower: s.lower_bound,
                upper: s.upper_bound,
            });
        }

        if s.min_list_size > s.list_size {
            return Err(SettingsError::MinListSizeTooLarge {
                min_list_size: s.min_list_size,
                list_size: s.list_size,
            });
        }

        let span = u64::from(s.upper_bound.abs_diff(s.lower_bound)) + 1;
        if span < s.list_size as u64 {
            return Err(SettingsError::RangeTooSmall {
                span,
                list_size: s.list_size,
            });
        }

        Ok(s)
    }
}
