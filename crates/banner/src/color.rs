use image::Rgba;

#[derive(Debug, thiserror::Error)]
#[error("invalid color '{0}'; expected #rrggbb or #rrggbbaa")]
pub struct ColorError(String);

/// Parses a `#rrggbb` or `#rrggbbaa` string into an RGBA pixel.
///
/// Six-digit colors are treated as fully opaque.
pub fn parse_hex_color(raw: &str) -> Result<Rgba<u8>, ColorError> {
    let digits = raw
        .strip_prefix('#')
        .ok_or_else(|| ColorError(raw.to_string()))?;

    let channel = |offset: usize| -> Result<u8, ColorError> {
        let pair = digits
            .get(offset..offset + 2)
            .ok_or_else(|| ColorError(raw.to_string()))?;
        u8::from_str_radix(pair, 16).map_err(|_| ColorError(raw.to_string()))
    };

    match digits.len() {
        6 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])),
        8 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, channel(6)?])),
        _ => Err(ColorError(raw.to_string())),
    }
}
