//! QR code rendering to SVG.
//!
//! Encoding is delegated to the `qrcode` crate; the SVG document is emitted
//! directly so the configured module size and quiet zone are applied exactly.

use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Renders `data` as a black-on-white SVG QR code.
///
/// # Arguments
///
/// - `data` - The payload to encode (here, the full short URL)
/// - `module_size` - Edge length of one QR module in SVG user units
/// - `quiet_zone` - Width of the white border, in modules
///
/// # Errors
///
/// Returns [`QrError`] if the payload does not fit in any QR version.
/// Short URLs are far below that limit, but the error is propagated rather
/// than unwrapped so callers can abandon the creation workflow cleanly.
pub fn encode_svg(data: &str, module_size: u32, quiet_zone: u32) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    let width = code.width();
    let colors = code.to_colors();

    let dimension = (width as u32 + 2 * quiet_zone) * module_size;

    let mut svg = format!(
        concat!(
            r#"<?xml version="1.0" standalone="yes"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#,
            r#"width="{d}" height="{d}" viewBox="0 0 {d} {d}" shape-rendering="crispEdges">"#,
            r##"<rect width="{d}" height="{d}" fill="#ffffff"/>"##,
            r##"<path fill="#000000" d=""##,
        ),
        d = dimension
    );

    for (index, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = ((index % width) as u32 + quiet_zone) * module_size;
        let y = ((index / width) as u32 + quiet_zone) * module_size;
        svg.push_str(&format!(
            "M{x} {y}h{s}v{s}h-{s}z",
            x = x,
            y = y,
            s = module_size
        ));
    }

    svg.push_str(r#""/></svg>"#);
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_svg_document() {
        let svg = encode_svg("http://localhost:3000/abc123", 10, 5).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_encode_contains_dark_modules() {
        let svg = encode_svg("http://localhost:3000/abc123", 10, 5).unwrap();
        // Every QR code has finder patterns, so the path is never empty.
        assert!(svg.contains("h10v10h-10z"));
    }

    #[test]
    fn test_dimensions_follow_module_size_and_quiet_zone() {
        let data = "http://localhost:3000/abc123";
        let width = QrCode::new(data.as_bytes()).unwrap().width() as u32;

        let svg = encode_svg(data, 10, 5).unwrap();
        let expected = (width + 10) * 10;
        assert!(svg.contains(&format!(r#"width="{expected}""#)));

        let svg = encode_svg(data, 4, 0).unwrap();
        let expected = width * 4;
        assert!(svg.contains(&format!(r#"width="{expected}""#)));
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode_svg("https://example.com/", 10, 5).unwrap();
        let b = encode_svg("https://example.com/", 10, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oversized_payload_is_an_error() {
        let data = "x".repeat(8000);
        assert!(encode_svg(&data, 10, 5).is_err());
    }
}
