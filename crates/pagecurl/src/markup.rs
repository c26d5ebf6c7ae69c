//! Markup output for a rendered tree
//!
//! Two surfaces: DOM markup for embedding in a page, and a standalone SVG
//! document of the widget at its displayed pixel size, which is what the
//! rasterizer consumes.

use pagecurl_svg::{escape_attr, RasterizedSvg};

use crate::error::Result;
use crate::geometry::{VIEW_BOX_ATTR, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};
use crate::tree::PageCurlTree;

impl PageCurlTree {
    /// DOM markup: a fixed `div` holding the inline `<svg>` and the `<img>`
    pub fn to_html(&self) -> String {
        let c = &self.container;
        let bg = &self.background;
        let hit = &self.hit_region;
        let deco = &self.decoration;

        let class = if c.class_name.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape_attr(&c.class_name))
        };

        let lines = [
            format!(
                r#"<div{class} style="position: fixed; top: {}px; left: {}px; z-index: {}; width: {}px; height: {}px; transform: {}; transform-origin: top left; transition: {};">"#,
                c.position.y,
                c.position.x,
                c.z_index,
                c.size.width,
                c.size.height,
                c.transform,
                c.transition,
            ),
            format!(
                r#"  <svg viewBox="{VIEW_BOX_ATTR}" preserveAspectRatio="xMinYMin meet" style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; overflow: visible;">"#
            ),
            "    <defs>".to_string(),
            format!(
                r#"      <mask id="{}"><path d="{}" fill="white"/></mask>"#,
                bg.mask_id,
                escape_attr(bg.mask_path)
            ),
            format!(
                r#"      <clipPath id="{}"><path d="{}"/></clipPath>"#,
                hit.clip_id,
                escape_attr(hit.clip_path)
            ),
            "    </defs>".to_string(),
            format!(
                r#"    <rect x="0" y="0" width="{}" height="{}" mask="url(#{})" style="pointer-events: {}; fill: {}; transition: {};"/>"#,
                bg.view_box.width(),
                bg.view_box.height(),
                bg.mask_id,
                bg.pointer_events.as_css(),
                escape_attr(&bg.fill),
                bg.transition,
            ),
            format!(
                r#"    <rect x="0" y="0" width="{}" height="{}" clip-path="url(#{})" role="{}" aria-label="{}" style="cursor: {};" fill="transparent"/>"#,
                hit.view_box.width(),
                hit.view_box.height(),
                hit.clip_id,
                hit.role,
                escape_attr(hit.label),
                hit.cursor,
            ),
            "  </svg>".to_string(),
            format!(
                r#"  <img src="{}" alt="{}" width="{}" height="{}" style="position: relative; width: {}px; height: {}px; pointer-events: {}; filter: {};">"#,
                deco.src,
                deco.alt,
                deco.intrinsic_size.width,
                deco.intrinsic_size.height,
                deco.size.width,
                deco.size.height,
                deco.pointer_events.as_css(),
                escape_attr(&deco.filter),
            ),
            "</div>".to_string(),
        ];
        join_lines(&lines)
    }

    /// Standalone SVG of the widget at its displayed pixel size
    ///
    /// The container's scale is baked in: the document is `width * scale`
    /// pixels wide and every layer is drawn from view-box units through one
    /// group transform anchored at the origin.
    pub fn to_svg(&self) -> String {
        let scale = self.scale();
        let width = self.width() * scale;
        let height = self.height() * scale;
        let k = width / VIEW_BOX_WIDTH;

        let bg = &self.background;
        let hit = &self.hit_region;
        let deco = &self.decoration;

        let filter = if deco.filter.is_empty() || deco.filter == "none" {
            String::new()
        } else {
            format!(r#" filter="{}""#, escape_attr(&deco.filter))
        };

        let lines = [
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
            ),
            "  <defs>".to_string(),
            format!(
                r#"    <mask id="{}"><path d="{}" fill="white"/></mask>"#,
                bg.mask_id,
                escape_attr(bg.mask_path)
            ),
            format!(
                r#"    <clipPath id="{}"><path d="{}"/></clipPath>"#,
                hit.clip_id,
                escape_attr(hit.clip_path)
            ),
            "  </defs>".to_string(),
            format!(r#"  <g transform="scale({k})">"#),
            format!(
                r#"    <rect x="0" y="0" width="{VIEW_BOX_WIDTH}" height="{VIEW_BOX_HEIGHT}" fill="{}" mask="url(#{})"/>"#,
                escape_attr(&bg.fill),
                bg.mask_id
            ),
            format!(
                r#"    <rect x="0" y="0" width="{VIEW_BOX_WIDTH}" height="{VIEW_BOX_HEIGHT}" fill="none" clip-path="url(#{})"/>"#,
                hit.clip_id
            ),
            format!(
                r#"    <image x="0" y="0" width="{}" height="{}" preserveAspectRatio="none" xlink:href="{}"{filter}/>"#,
                deco.intrinsic_size.width, deco.intrinsic_size.height, deco.src
            ),
            "  </g>".to_string(),
            "</svg>".to_string(),
        ];
        join_lines(&lines)
    }

    /// Rasterize [`to_svg`](Self::to_svg) at its own size
    pub fn rasterize(&self) -> Result<RasterizedSvg> {
        Ok(RasterizedSvg::from_str_native(&self.to_svg())?)
    }
}

/// One element per line, newline terminated
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
