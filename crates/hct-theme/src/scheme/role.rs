//! Color role names.

use std::fmt;
use std::str::FromStr;

/// A named semantic slot in a [`Scheme`](super::Scheme).
///
/// Variants are declared in output order; [`ColorRole::ALL`] follows the
/// same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Surface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    OnSurface,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
}

impl ColorRole {
    /// Number of roles in every scheme.
    pub const COUNT: usize = 28;

    /// Every role, in declaration order.
    pub const ALL: [ColorRole; Self::COUNT] = [
        ColorRole::Primary,
        ColorRole::OnPrimary,
        ColorRole::PrimaryContainer,
        ColorRole::OnPrimaryContainer,
        ColorRole::Secondary,
        ColorRole::OnSecondary,
        ColorRole::SecondaryContainer,
        ColorRole::OnSecondaryContainer,
        ColorRole::Tertiary,
        ColorRole::OnTertiary,
        ColorRole::TertiaryContainer,
        ColorRole::OnTertiaryContainer,
        ColorRole::Surface,
        ColorRole::SurfaceDim,
        ColorRole::SurfaceBright,
        ColorRole::SurfaceContainerLowest,
        ColorRole::SurfaceContainerLow,
        ColorRole::SurfaceContainer,
        ColorRole::SurfaceContainerHigh,
        ColorRole::SurfaceContainerHighest,
        ColorRole::OnSurface,
        ColorRole::OnSurfaceVariant,
        ColorRole::Outline,
        ColorRole::OutlineVariant,
        ColorRole::Error,
        ColorRole::OnError,
        ColorRole::ErrorContainer,
        ColorRole::OnErrorContainer,
    ];

    /// camelCase name, e.g. `surfaceContainerHighest`.
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::PrimaryContainer => "primaryContainer",
            ColorRole::OnPrimaryContainer => "onPrimaryContainer",
            ColorRole::Secondary => "secondary",
            ColorRole::OnSecondary => "onSecondary",
            ColorRole::SecondaryContainer => "secondaryContainer",
            ColorRole::OnSecondaryContainer => "onSecondaryContainer",
            ColorRole::Tertiary => "tertiary",
            ColorRole::OnTertiary => "onTertiary",
            ColorRole::TertiaryContainer => "tertiaryContainer",
            ColorRole::OnTertiaryContainer => "onTertiaryContainer",
            ColorRole::Surface => "surface",
            ColorRole::SurfaceDim => "surfaceDim",
            ColorRole::SurfaceBright => "surfaceBright",
            ColorRole::SurfaceContainerLowest => "surfaceContainerLowest",
            ColorRole::SurfaceContainerLow => "surfaceContainerLow",
            ColorRole::SurfaceContainer => "surfaceContainer",
            ColorRole::SurfaceContainerHigh => "surfaceContainerHigh",
            ColorRole::SurfaceContainerHighest => "surfaceContainerHighest",
            ColorRole::OnSurface => "onSurface",
            ColorRole::OnSurfaceVariant => "onSurfaceVariant",
            ColorRole::Outline => "outline",
            ColorRole::OutlineVariant => "outlineVariant",
            ColorRole::Error => "error",
            ColorRole::OnError => "onError",
            ColorRole::ErrorContainer => "errorContainer",
            ColorRole::OnErrorContainer => "onErrorContainer",
        }
    }

    /// kebab-case name for CSS custom properties, e.g. `on-primary-container`.
    pub fn css_name(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 4);
        for ch in self.name().chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Position in [`ColorRole::ALL`].
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError(pub String);

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color role: {}", self.0)
    }
}

impl std::error::Error for UnknownRoleError {}

impl FromStr for ColorRole {
    type Err = UnknownRoleError;

    /// Parse a camelCase role name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownRoleError(s.to_string()))
    }
}
