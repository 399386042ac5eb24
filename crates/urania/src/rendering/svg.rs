//! SVG mapping of a scene graph, one host surface among many.

use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor};
use crate::rendering::scene::SceneGraph;

pub fn to_svg(scene: &SceneGraph) -> String {
    let view = &scene.viewport;
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.2} {:.2} {:.2} {:.2}\" width=\"{:.0}\" height=\"{:.0}\">",
        view.x, view.y, view.width, view.height, view.width, view.height
    ));
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
        view.x,
        view.y,
        view.width,
        view.height,
        scene.background_color.to_css_string()
    ));

    for node in &scene.nodes {
        svg.push_str(&shape_svg(&node.shape));
    }

    svg.push_str("</svg>");
    svg
}

fn shape_svg(shape: &Shape) -> String {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"{}/>",
            center.x,
            center.y,
            radius,
            fill.map(|c| c.to_css_string()).unwrap_or_else(|| "none".to_string()),
            stroke.as_ref().map(stroke_attrs).unwrap_or_default()
        ),
        Shape::Line { from, to, stroke } => format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"{}/>",
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attrs(stroke)
        ),
        Shape::Label {
            position,
            content,
            size,
            color,
            anchor,
        } => text_svg(position.x, position.y, content, *size, *color, *anchor),
        Shape::Icon {
            position,
            glyph,
            icon_key,
            size,
            fill,
        } => {
            let mut text = text_svg(position.x, position.y, glyph.symbol(), *size, *fill, TextAnchor::Middle);
            // Hosts with real icon assets can swap the glyph by key
            text.insert_str(5, &format!(" data-icon=\"{}\"", escape_xml(icon_key)));
            text
        }
    }
}

fn text_svg(x: f64, y: f64, content: &str, size: f64, color: Color, anchor: TextAnchor) -> String {
    let anchor = match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>",
        x,
        y,
        size,
        color.to_css_string(),
        anchor,
        escape_xml(content)
    )
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{:.2}\"",
        stroke.color.to_css_string(),
        stroke.width
    );
    if let Some(dash) = &stroke.dash_array {
        let pattern: Vec<String> = dash.iter().map(|d| format!("{}", d)).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", pattern.join(" ")));
    }
    attrs
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
