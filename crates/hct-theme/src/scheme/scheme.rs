//! Scheme type and seed-to-scheme generation.

use crate::color::{Hct, ParseColorError, Rgb};
use crate::contrast::accessible_text_color;

use super::role::ColorRole;
use super::tones::{
    ErrorColors, Mode, ToneTargets, CONTAINER_TONE_OFFSET, SECONDARY_HUE_SHIFT,
    SURFACE_CHROMA_REDUCTION, TERTIARY_HUE_SHIFT,
};

/// A complete color scheme: one color for every [`ColorRole`].
///
/// Immutable once built. To change a scheme, generate a new one.
///
/// # Example
///
/// ```
/// use hct_theme::{ColorRole, Rgb, Scheme};
///
/// let seed = Rgb::new(0x67, 0x50, 0xA4);
/// let light = Scheme::from_seed(seed, false);
/// assert_eq!(light.get(ColorRole::Primary), seed);
/// assert_eq!(light.iter().count(), ColorRole::COUNT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    mode: Mode,
    colors: [Rgb; ColorRole::COUNT],
}

impl Scheme {
    /// Generate the light (`is_dark == false`) or dark scheme for `seed`.
    ///
    /// Deterministic: identical inputs always yield identical schemes.
    pub fn from_seed(seed: Rgb, is_dark: bool) -> Self {
        let mode = Mode::from_dark(is_dark);
        let tones = ToneTargets::for_mode(mode);
        let errors = ErrorColors::for_mode(mode);
        let hct = Hct::from(seed);

        let primary = seed;
        let primary_container = hct.with_tone(tones.container).to_rgb();

        let secondary_base = hct.adjust_hue(SECONDARY_HUE_SHIFT).with_tone(tones.base);
        let secondary = secondary_base.to_rgb();
        let secondary_container = secondary_base.adjust_tone(CONTAINER_TONE_OFFSET).to_rgb();

        let tertiary_base = hct.adjust_hue(TERTIARY_HUE_SHIFT).with_tone(tones.base);
        let tertiary = tertiary_base.to_rgb();
        let tertiary_container = tertiary_base.adjust_tone(CONTAINER_TONE_OFFSET).to_rgb();

        let neutral = hct
            .adjust_chroma(-SURFACE_CHROMA_REDUCTION)
            .with_tone(tones.surface);
        let deltas = &tones.surface_deltas;
        let surface = neutral.to_rgb();
        let surface_at = |delta: f64| neutral.adjust_tone(delta).to_rgb();
        let surface_container_highest = surface_at(deltas.container_highest);

        let mut colors = [Rgb::BLACK; ColorRole::COUNT];
        let mut set = |role: ColorRole, color: Rgb| colors[role.index()] = color;

        set(ColorRole::Primary, primary);
        set(ColorRole::OnPrimary, accessible_text_color(primary));
        set(ColorRole::PrimaryContainer, primary_container);
        set(
            ColorRole::OnPrimaryContainer,
            accessible_text_color(primary_container),
        );

        set(ColorRole::Secondary, secondary);
        set(ColorRole::OnSecondary, accessible_text_color(secondary));
        set(ColorRole::SecondaryContainer, secondary_container);
        set(
            ColorRole::OnSecondaryContainer,
            accessible_text_color(secondary_container),
        );

        set(ColorRole::Tertiary, tertiary);
        set(ColorRole::OnTertiary, accessible_text_color(tertiary));
        set(ColorRole::TertiaryContainer, tertiary_container);
        set(
            ColorRole::OnTertiaryContainer,
            accessible_text_color(tertiary_container),
        );

        set(ColorRole::Surface, surface);
        set(ColorRole::SurfaceDim, surface_at(deltas.dim));
        set(ColorRole::SurfaceBright, surface_at(deltas.bright));
        set(
            ColorRole::SurfaceContainerLowest,
            surface_at(deltas.container_lowest),
        );
        set(ColorRole::SurfaceContainerLow, surface_at(deltas.container_low));
        set(ColorRole::SurfaceContainer, surface_at(deltas.container));
        set(
            ColorRole::SurfaceContainerHigh,
            surface_at(deltas.container_high),
        );
        set(ColorRole::SurfaceContainerHighest, surface_container_highest);
        set(ColorRole::OnSurface, accessible_text_color(surface));
        set(
            ColorRole::OnSurfaceVariant,
            accessible_text_color(surface_container_highest),
        );

        set(ColorRole::Outline, hct.with_tone(tones.outline).to_rgb());
        set(
            ColorRole::OutlineVariant,
            hct.with_tone(tones.outline_variant).to_rgb(),
        );

        set(ColorRole::Error, errors.error);
        set(ColorRole::OnError, errors.on_error);
        set(ColorRole::ErrorContainer, errors.error_container);
        set(ColorRole::OnErrorContainer, errors.on_error_container);

        Self { mode, colors }
    }

    /// Parse `seed` as hex and generate its scheme.
    pub fn from_hex(seed: &str, is_dark: bool) -> Result<Self, ParseColorError> {
        Ok(Self::from_seed(seed.parse()?, is_dark))
    }

    /// Color assigned to `role`.
    #[inline]
    pub fn get(&self, role: ColorRole) -> Rgb {
        self.colors[role.index()]
    }

    /// Whether this is the dark variant.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Light or dark.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `(role, color)` pairs in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Rgb)> + '_ {
        ColorRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }

    /// `(camelCaseName, "#RRGGBB")` pairs in [`ColorRole::ALL`] order.
    pub fn to_hex_map(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(role, color)| (role.name(), color.to_hex()))
            .collect()
    }

    /// Render as CSS custom property declarations, one per line:
    /// `--{prefix}-{role}: #RRGGBB;`.
    ///
    /// ```
    /// use hct_theme::Scheme;
    ///
    /// let css = Scheme::from_hex("#6750A4", false).unwrap().to_css_variables("md-sys-color");
    /// assert!(css.starts_with("--md-sys-color-primary: #6750A4;\n"));
    /// ```
    pub fn to_css_variables(&self, prefix: &str) -> String {
        let mut out = String::new();
        for (role, color) in self.iter() {
            out.push_str("--");
            if !prefix.is_empty() {
                out.push_str(prefix);
                out.push('-');
            }
            out.push_str(&role.css_name());
            out.push_str(": ");
            out.push_str(&color.to_hex());
            out.push_str(";\n");
        }
        out
    }
}

/// Generate the scheme for a seed color. See [`Scheme::from_seed`].
pub fn generate_scheme_from_color(seed: Rgb, is_dark: bool) -> Scheme {
    Scheme::from_seed(seed, is_dark)
}

/// Generate the scheme for a hex seed. See [`Scheme::from_hex`].
pub fn generate_scheme_from_hex(seed: &str, is_dark: bool) -> Result<Scheme, ParseColorError> {
    Scheme::from_hex(seed, is_dark)
}
