use bincp::entities::{BP2Instance, Layout};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::io::svg_util::SvgDrawOptions;

/// Draws the contents of a single bin. The origin of the bin is its bottom left corner.
pub fn layout_to_svg(
    layout: &Layout,
    instance: &BP2Instance,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = options.theme.get_theme();
    let (width, height) = (
        instance.container.width as f32,
        instance.container.height as f32,
    );
    let min_dim = f32::min(width, height);
    let stroke_width = min_dim * 0.002 * theme.stroke_width_multiplier;
    let margin = 0.05 * min_dim;

    let label = {
        //print some information above the left top of the bin
        let label_content = format!(
            "bin: {} | width: {} | height: {} | items: {} | density: {:.3}% | {}",
            layout.slot,
            instance.container.width,
            instance.container.height,
            layout.placed_items.len(),
            layout.density(instance) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * margin)
            .set("font-size", min_dim * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container = Rectangle::new()
        .set("x", 0.0)
        .set("y", 0.0)
        .set("width", width)
        .set("height", height)
        .set("fill", theme.container_fill)
        .set("stroke", "black")
        .set("stroke-width", 2.0 * stroke_width)
        .add(Title::new(format!("bin {}", layout.slot)));

    let items_group = layout
        .placed_items
        .iter()
        .fold(Group::new().set("id", "items"), |group, pi| {
            let item = instance.item(pi.item_id);
            let (x, w, h) = (pi.x as f32, item.width as f32, item.height as f32);
            // svg's y-axis points down
            let y = height - pi.y as f32 - h;
            let mut item_group = Group::new().set("id", format!("item_{}", item.id)).add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", w)
                    .set("height", h)
                    .set("fill", theme.item_fill)
                    .set("fill-opacity", 0.9)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!(
                        "item, id: {}, position: ({}, {}), size: {}x{}",
                        item.id, pi.x, pi.y, item.width, item.height
                    ))),
            );
            if options.item_ids {
                item_group = item_group.add(
                    Text::new(format!("{}", item.id))
                        .set("x", x + w / 2.0)
                        .set("y", y + h / 2.0)
                        .set("font-size", f32::min(w, h) * 0.4)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("fill", theme.text_fill),
                );
            }
            group.add(item_group)
        });

    Document::new()
        .set(
            "viewBox",
            (-margin, -2.0 * margin, width + 2.0 * margin, height + 3.0 * margin),
        )
        .add(container)
        .add(items_group)
        .add(label)
}
