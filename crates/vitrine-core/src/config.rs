//! Storefront configuration and setup.

/// Viewport width breakpoints for the responsive carousel.
///
/// Widths at or below `narrow_max` show one slide per page, widths at or
/// below `medium_max` show two, anything wider shows four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Upper bound (inclusive) of the single-slide layout, in CSS pixels.
    pub narrow_max: u32,
    /// Upper bound (inclusive) of the two-slide layout, in CSS pixels.
    pub medium_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_max: 768,
            medium_max: 1024,
        }
    }
}

/// Timing of a single toast notification's lifecycle, in milliseconds.
///
/// A toast is inserted hidden, made visible after `enter_delay_ms` so the
/// CSS transition can trigger, stays visible for `visible_ms`, and is
/// removed from the document `fade_ms` after it starts fading out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Delay between insertion and the visibility flip.
    pub enter_delay_ms: u32,
    /// How long the toast stays fully visible.
    pub visible_ms: u32,
    /// Length of the exit transition before removal.
    pub fade_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            visible_ms: 3000,
            fade_ms: 400,
        }
    }
}

/// Configuration for the storefront enhancement layer.
///
/// Built once by the page bootstrap and passed explicitly to every
/// component that needs it.
///
/// # Example
///
/// ```rust
/// use vitrine_core::StorefrontConfig;
///
/// let config = StorefrontConfig::new()
///     .with_catalog_url("/data/products.json")
///     .with_autoplay_interval(8000);
/// assert_eq!(config.autoplay_interval_ms, 8000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Path of the shared header fragment.
    pub header_fragment: String,
    /// Path of the shared footer fragment.
    pub footer_fragment: String,
    /// Element id the header fragment is injected into.
    pub header_mount: String,
    /// Element id the footer fragment is injected into.
    pub footer_mount: String,
    /// URL of the product catalog.
    pub catalog_url: String,
    /// Interval between automatic carousel advances, in milliseconds.
    pub autoplay_interval_ms: u32,
    /// Responsive carousel breakpoints.
    pub breakpoints: Breakpoints,
    /// Toast lifecycle timing.
    pub toast: ToastTiming,
    /// CSS selectors of the sections revealed on scroll.
    pub reveal_selectors: Vec<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            header_fragment: "header.html".to_string(),
            footer_fragment: "footer.html".to_string(),
            header_mount: "header-placeholder".to_string(),
            footer_mount: "footer-placeholder".to_string(),
            catalog_url: "products.json".to_string(),
            autoplay_interval_ms: 5000,
            breakpoints: Breakpoints::default(),
            toast: ToastTiming::default(),
            reveal_selectors: vec![
                ".categories-section".to_string(),
                ".main-footer".to_string(),
                ".featured-products".to_string(),
                ".all-products-section".to_string(),
            ],
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header fragment path.
    pub fn with_header_fragment(mut self, path: impl Into<String>) -> Self {
        self.header_fragment = path.into();
        self
    }

    /// Set the footer fragment path.
    pub fn with_footer_fragment(mut self, path: impl Into<String>) -> Self {
        self.footer_fragment = path.into();
        self
    }

    /// Set the product catalog URL.
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    /// Set the autoplay interval in milliseconds.
    pub fn with_autoplay_interval(mut self, ms: u32) -> Self {
        self.autoplay_interval_ms = ms;
        self
    }

    /// Set the responsive breakpoints.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the toast lifecycle timing.
    pub fn with_toast_timing(mut self, toast: ToastTiming) -> Self {
        self.toast = toast;
        self
    }

    /// Replace the scroll-reveal section selectors.
    pub fn with_reveal_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reveal_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }
}
