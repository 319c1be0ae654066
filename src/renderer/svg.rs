//! SVG generation from wheel layouts

use crate::layout::{ItemPlacement, Point, Size, WheelLayout};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add CSS rules for items, guides and labels
    pub fn add_default_styles(&mut self) {
        let p = self.prefix();
        let fill = &self.config.item_fill;
        let stroke = &self.config.stroke;
        self.styles.push(format!(
            ".{p}item rect {{ fill: {fill}; stroke: {stroke}; }}"
        ));
        self.styles.push(format!(
            ".{p}guide {{ fill: none; stroke: {stroke}; stroke-dasharray: 4 2; }}"
        ));
        self.styles.push(format!(
            ".{p}label {{ font-size: 10px; text-anchor: middle; dominant-baseline: middle; }}"
        ));
    }

    /// Outline of the container square
    pub fn add_container(&mut self, size: Size) {
        let p = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}guide {}container" x="0" y="0" width="{}" height="{}"/>"#,
            self.indent_str(),
            p,
            p,
            num(size.width),
            num(size.height)
        ));
    }

    /// A guide circle, e.g. the inner radius
    pub fn add_guide_circle(&mut self, name: &str, center: Point, r: f64) {
        let p = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}guide {}{}" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            p,
            p,
            name,
            num(center.x),
            num(center.y),
            num(r)
        ));
    }

    /// One item, rotated around its center by its wheel angle
    pub fn add_item(&mut self, placement: &ItemPlacement, label: Option<&str>) {
        let p = self.prefix();
        let b = placement.bounds;
        let c = placement.center();

        self.elements.push(format!(
            r#"{}<g id="item-{}" class="{}item" transform="rotate({} {} {})">"#,
            self.indent_str(),
            placement.index,
            p,
            num(placement.angle_degrees),
            num(c.x),
            num(c.y)
        ));
        self.indent += 1;

        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}"/>"#,
            self.indent_str(),
            num(b.x),
            num(b.y),
            num(b.width),
            num(b.height)
        ));
        if let Some(text) = label {
            self.elements.push(format!(
                r#"{}<text class="{}label" x="{}" y="{}">{}</text>"#,
                self.indent_str(),
                p,
                num(c.x),
                num(c.y),
                escape_xml(text)
            ));
        }

        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, size: Size) -> String {
        let padding = self.config.viewbox_padding;
        let vb_w = size.width + 2.0 * padding;
        let vb_h = size.height + 2.0 * padding;

        let nl = self.newline();
        let indent = self.indent_str();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            num(-padding),
            num(-padding),
            num(vb_w),
            num(vb_h),
            num(vb_w),
            num(vb_h)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(&indent);
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(&indent);
                svg.push_str(&indent);
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(&indent);
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a wheel layout to an SVG string
pub fn render_svg(layout: &WheelLayout, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_default_styles();

    if config.show_guides {
        let center = layout.center();
        let g = &layout.geometry;
        builder.add_container(layout.container_size);
        builder.add_guide_circle("inner", center, g.inner_radius);
        builder.add_guide_circle("middle", center, g.middle_radius);
        builder.add_guide_circle("outer", center, g.outer_radius);
    }

    for placement in &layout.placements {
        let label = config.label_items.then(|| placement.index.to_string());
        builder.add_item(placement, label.as_deref());
    }

    builder.build(layout.container_size)
}

/// Format a coordinate, dropping float noise below a thousandth
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
