pub mod image_loader;
pub mod theme_store;

pub use image_loader::{decode_png, DecodedImage, ImageLoader, ImageSource};
pub use theme_store::{InMemoryThemeStore, ThemeStore};
