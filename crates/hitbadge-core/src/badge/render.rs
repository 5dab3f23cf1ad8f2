//! SVG badge rasterizer.
//!
//! Produces shields.io-shaped badges. Output depends only on the config:
//! text widths come from a fixed per-character table instead of font
//! metrics, so the same config always renders to the same bytes.

use std::fmt::Write;

use super::config::BadgeConfig;
use super::style::BadgeStyle;

const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
const SOCIAL_FONT_FAMILY: &str = "Helvetica Neue,Helvetica,Arial,sans-serif";
const HORIZONTAL_PADDING: u32 = 5;
const LOGO_SIZE: u32 = 14;
const LOGO_GAP: u32 = 3;

/// Per-style geometry shared by the two-segment layouts.
struct Geometry {
    height: u32,
    radius: u32,
    font_size: u32,
    text_y: f64,
    shadow: bool,
    gradient: Option<&'static str>,
    bold: bool,
    uppercase: bool,
    /// Extra width per character, in tenths of a pixel.
    letter_spacing: u32,
}

fn geometry(style: BadgeStyle) -> Geometry {
    match style {
        BadgeStyle::Plastic => Geometry {
            height: 18,
            radius: 4,
            font_size: 11,
            text_y: 13.0,
            shadow: true,
            gradient: Some(
                r##"<linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#fff" stop-opacity=".7"/><stop offset=".1" stop-color="#aaa" stop-opacity=".1"/><stop offset=".9" stop-color="#000" stop-opacity=".3"/><stop offset="1" stop-color="#000" stop-opacity=".5"/></linearGradient>"##,
            ),
            bold: false,
            uppercase: false,
            letter_spacing: 0,
        },
        BadgeStyle::Flat => Geometry {
            height: 20,
            radius: 3,
            font_size: 11,
            text_y: 14.0,
            shadow: true,
            gradient: Some(
                r##"<linearGradient id="s" x2="0" y2="100%"><stop offset="0" stop-color="#bbb" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/></linearGradient>"##,
            ),
            bold: false,
            uppercase: false,
            letter_spacing: 0,
        },
        BadgeStyle::FlatSquare => Geometry {
            height: 20,
            radius: 0,
            font_size: 11,
            text_y: 14.0,
            shadow: false,
            gradient: None,
            bold: false,
            uppercase: false,
            letter_spacing: 0,
        },
        // Social is drawn by `render_social` and never reaches this table.
        BadgeStyle::ForTheBadge | BadgeStyle::Social => Geometry {
            height: 28,
            radius: 0,
            font_size: 10,
            text_y: 17.5,
            shadow: false,
            gradient: None,
            bold: true,
            uppercase: true,
            letter_spacing: 12,
        },
    }
}

/// Render a badge to SVG markup.
pub fn render(config: &BadgeConfig) -> String {
    match config.style {
        BadgeStyle::Social => render_social(config),
        style => render_segments(config, &geometry(style)),
    }
}

fn render_segments(config: &BadgeConfig, geo: &Geometry) -> String {
    let (label, message) = if geo.uppercase {
        (config.label.to_uppercase(), config.message.to_uppercase())
    } else {
        (config.label.clone(), config.message.clone())
    };
    let has_logo = !config.logo_base64.is_empty();
    let logo_extra = if has_logo { LOGO_SIZE + LOGO_GAP } else { 0 };

    let label_text_w = text_width(&label, geo.letter_spacing);
    let label_w = if label.is_empty() && !has_logo {
        0
    } else if label.is_empty() {
        LOGO_SIZE + 2 * HORIZONTAL_PADDING
    } else {
        label_text_w + logo_extra + 2 * HORIZONTAL_PADDING
    };
    let message_w = text_width(&message, geo.letter_spacing) + 2 * HORIZONTAL_PADDING;
    let total_w = label_w + message_w;
    let h = geo.height;

    let label_color = svg_color(&config.label_color);
    let color = svg_color(&config.color);
    let aria = aria_label(&config.label, &config.message);

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{total_w}" height="{h}" role="img" aria-label="{aria}"><title>{aria}</title>"#
    );
    if let Some(gradient) = geo.gradient {
        out.push_str(gradient);
    }
    let _ = write!(
        out,
        r##"<clipPath id="r"><rect width="{total_w}" height="{h}" rx="{rx}" fill="#fff"/></clipPath><g clip-path="url(#r)">"##,
        rx = geo.radius,
    );
    if label_w > 0 {
        let _ = write!(out, r#"<rect width="{label_w}" height="{h}" fill="{label_color}"/>"#);
    }
    let _ = write!(
        out,
        r#"<rect x="{label_w}" width="{message_w}" height="{h}" fill="{color}"/>"#
    );
    if geo.gradient.is_some() {
        let _ = write!(out, r#"<rect width="{total_w}" height="{h}" fill="url(#s)"/>"#);
    }
    out.push_str("</g>");

    let weight = if geo.bold { r#" font-weight="bold""# } else { "" };
    let spacing = if geo.letter_spacing > 0 {
        format!(r#" letter-spacing="{}""#, tenths(geo.letter_spacing))
    } else {
        String::new()
    };
    let _ = write!(
        out,
        r##"<g fill="#fff" text-anchor="middle" font-family="{FONT_FAMILY}" text-rendering="geometricPrecision" font-size="{size}"{weight}{spacing}>"##,
        size = geo.font_size,
    );

    if has_logo {
        let _ = write!(
            out,
            r#"<image x="{HORIZONTAL_PADDING}" y="{y}" width="{LOGO_SIZE}" height="{LOGO_SIZE}" xlink:href="{href}"/>"#,
            y = (h - LOGO_SIZE) / 2,
            href = escape_xml(&config.logo_base64),
        );
    }
    if !label.is_empty() {
        let x = (HORIZONTAL_PADDING + logo_extra) as f64 + label_text_w as f64 / 2.0;
        write_text(&mut out, x, geo.text_y, &label, geo.shadow);
    }
    let x = label_w as f64 + message_w as f64 / 2.0;
    write_text(&mut out, x, geo.text_y, &message, geo.shadow);
    out.push_str("</g>");

    write_links(&mut out, &config.links, label_w, message_w, h);
    out.push_str("</svg>");
    out
}

fn render_social(config: &BadgeConfig) -> String {
    let label = capitalize(&config.label);
    let message = &config.message;
    let has_logo = !config.logo_base64.is_empty();
    let logo_extra = if has_logo { LOGO_SIZE + LOGO_GAP } else { 0 };

    let label_text_w = text_width(&label, 0);
    let label_w = label_text_w + logo_extra + 2 * HORIZONTAL_PADDING;
    let message_w = text_width(message, 0) + 2 * HORIZONTAL_PADDING;
    let bubble_x = label_w + 6;
    let total_w = bubble_x + message_w + 1;
    let h = 20;
    let aria = aria_label(&config.label, &config.message);

    let mut out = String::new();
    let _ = write!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{total_w}" height="{h}" role="img" aria-label="{aria}"><title>{aria}</title><linearGradient id="a" x2="0" y2="100%"><stop offset="0" stop-color="#fcfcfc" stop-opacity="0"/><stop offset="1" stop-opacity=".1"/></linearGradient><g stroke="#d5d5d5"><rect stroke="none" fill="#fcfcfc" x="0.5" y="0.5" width="{label_w}" height="19" rx="2"/><rect x="0.5" y="0.5" width="{label_w}" height="19" rx="2" fill="url(#a)"/><rect x="{bubble_x}.5" y="0.5" width="{message_w}" height="19" rx="2" fill="#fafafa"/><rect x="{bubble_x}" y="7.5" width="0.5" height="5" stroke="#fafafa"/><path d="M{bubble_x}.5 6.5l-3 3v1l3 3" fill="#fafafa"/></g>"##
    );
    let _ = write!(
        out,
        r##"<g fill="#333" text-anchor="middle" font-family="{SOCIAL_FONT_FAMILY}" font-weight="700" font-size="11">"##
    );
    if has_logo {
        let _ = write!(
            out,
            r#"<image x="{HORIZONTAL_PADDING}" y="3" width="{LOGO_SIZE}" height="{LOGO_SIZE}" xlink:href="{href}"/>"#,
            href = escape_xml(&config.logo_base64),
        );
    }
    let label_x = (HORIZONTAL_PADDING + logo_extra) as f64 + label_text_w as f64 / 2.0;
    let _ = write!(
        out,
        r#"<text x="{label_x:.1}" y="14">{text}</text>"#,
        text = escape_xml(&label)
    );
    let message_x = bubble_x as f64 + message_w as f64 / 2.0;
    let _ = write!(
        out,
        r#"<text x="{message_x:.1}" y="14">{text}</text>"#,
        text = escape_xml(message)
    );
    out.push_str("</g>");

    write_links(&mut out, &config.links, label_w, total_w - label_w, h);
    out.push_str("</svg>");
    out
}

fn write_text(out: &mut String, x: f64, y: f64, text: &str, shadow: bool) {
    let text = escape_xml(text);
    if shadow {
        let _ = write!(
            out,
            r##"<text x="{x:.1}" y="{sy:.1}" fill="#010101" fill-opacity=".3">{text}</text>"##,
            sy = y + 1.0,
        );
    }
    let _ = write!(out, r#"<text x="{x:.1}" y="{y:.1}">{text}</text>"#);
}

/// One link covers the whole badge; two links split it label/message.
fn write_links(out: &mut String, links: &[String], label_w: u32, message_w: u32, h: u32) {
    match links {
        [] => {}
        [only] => write_anchor(out, only, 0, label_w + message_w, h),
        [left, right, ..] => {
            if label_w > 0 {
                write_anchor(out, left, 0, label_w, h);
            }
            write_anchor(out, right, label_w, message_w, h);
        }
    }
}

fn write_anchor(out: &mut String, href: &str, x: u32, width: u32, h: u32) {
    if href.is_empty() {
        return;
    }
    let _ = write!(
        out,
        r#"<a target="_blank" xlink:href="{href}"><rect x="{x}" width="{width}" height="{h}" fill="rgba(0,0,0,0)"/></a>"#,
        href = escape_xml(href),
    );
}

fn aria_label(label: &str, message: &str) -> String {
    if label.is_empty() {
        escape_xml(message)
    } else {
        escape_xml(&format!("{label}: {message}"))
    }
}

/// Estimated rendered width in whole pixels at 11px Verdana.
fn text_width(text: &str, letter_spacing: u32) -> u32 {
    let tenths: u32 = text
        .chars()
        .map(|c| char_width(c) + letter_spacing)
        .sum();
    tenths.div_ceil(10)
}

/// Approximate advance width in tenths of a pixel.
fn char_width(c: char) -> u32 {
    match c {
        'i' | 'l' | 'j' | '\'' | '|' | '!' | '.' | ',' | ':' | ';' => 30,
        'f' | 'r' | 't' | 'I' | '(' | ')' | '[' | ']' | ' ' | '-' => 42,
        'm' | 'w' | 'M' | 'W' => 100,
        '0'..='9' => 70,
        'A'..='Z' => 75,
        c if c.is_ascii() => 62,
        _ => 75,
    }
}

fn tenths(v: u32) -> String {
    format!("{}.{}", v / 10, v % 10)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve shields.io color names and bare hex into an SVG fill value.
fn svg_color(raw: &str) -> String {
    let named = match raw {
        "brightgreen" | "success" => Some("#4c1"),
        "green" => Some("#97ca00"),
        "yellowgreen" => Some("#a4a61d"),
        "yellow" => Some("#dfb317"),
        "orange" | "important" => Some("#fe7d37"),
        "red" | "critical" => Some("#e05d44"),
        "blue" | "informational" => Some("#007ec6"),
        "grey" | "gray" => Some("#555"),
        "lightgrey" | "lightgray" | "inactive" => Some("#9f9f9f"),
        _ => None,
    };
    if let Some(hex) = named {
        return hex.to_string();
    }
    let bare_hex = matches!(raw.len(), 3 | 6 | 8) && raw.chars().all(|c| c.is_ascii_hexdigit());
    if bare_hex {
        format!("#{raw}")
    } else {
        escape_xml(raw)
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_bare_hex_colors() {
        assert_eq!(svg_color("brightgreen"), "#4c1");
        assert_eq!(svg_color("ff0000"), "#ff0000");
        assert_eq!(svg_color("#555"), "#555");
        assert_eq!(svg_color("rgb(1,2,3)"), "rgb(1,2,3)");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
    }

    #[test]
    fn width_grows_with_text() {
        assert!(text_width("Total Hits", 0) > text_width("Hits", 0));
        assert_eq!(text_width("", 0), 0);
    }

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("total hits"), "Total hits");
        assert_eq!(capitalize(""), "");
    }
}
