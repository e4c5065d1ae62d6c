//! Test fixtures and constants.

/// Seed colors used across tests
pub mod seeds {
    /// Default seed (Material baseline purple)
    pub const PURPLE: &str = "#6750A4";

    /// Muted blue; HCT hue ~270, chroma ~25
    pub const SLATE_BLUE: &str = "#306090";

    pub const RED: &str = "#FF0000";
}

/// Encode RGBA8 pixels as a PNG
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgba, rgba)
}

/// Encode RGB8 pixels as a PNG
pub fn encode_png_rgb(width: u32, height: u32, rgb: &[u8]) -> Vec<u8> {
    encode(width, height, png::ColorType::Rgb, rgb)
}

fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(data)
            .expect("Failed to write PNG data");
    }
    out
}

/// PNG of a single opaque color
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let pixel = [rgb[0], rgb[1], rgb[2], 255];
    encode_png(width, height, &pixel.repeat((width * height) as usize))
}

/// Left half `left`, right half `right`
pub fn split_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..height {
        for x in 0..width {
            let c = if x < width / 2 { left } else { right };
            rgba.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    encode_png(width, height, &rgba)
}

/// Fully transparent PNG
pub fn transparent_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(width, height, &[0u8; 4].repeat((width * height) as usize))
}

/// Mostly neutral gray with a blue accent stripe
pub fn gray_with_accent_png() -> Vec<u8> {
    let (width, height) = (20u32, 20u32);
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for _ in 0..width {
            let c = if y < 4 { [0x33, 0x66, 0x99] } else { [128, 128, 128] };
            rgba.extend_from_slice(&[c[0], c[1], c[2], 255]);
        }
    }
    encode_png(width, height, &rgba)
}
