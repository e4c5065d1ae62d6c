pub mod contrast;
pub mod extract;
pub mod palette;
pub mod scheme;
pub mod theme;

pub use contrast::{handle_contrast, ContrastResponse, __path_handle_contrast};
pub use extract::{handle_extract, ExtractResponse, __path_handle_extract};
pub use palette::{handle_palette, PaletteResponse, ToneEntry, __path_handle_palette};
pub use scheme::{handle_scheme, RoleMap, SchemeResponse, __path_handle_scheme};
pub use theme::{
    handle_get_theme, handle_put_theme, ThemeResponse, UpdateThemeRequest,
    __path_handle_get_theme, __path_handle_put_theme,
};
