//! HTML preview sink.
//!
//! Renders a [`PageSequence`] as a single self-contained HTML document,
//! one inline SVG per page. This is one possible sink for the page model;
//! the renderers know nothing about it, and a PDF or image sink would
//! consume the same primitives.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templating:
//! malformed markup is a build error and all interpolation is auto-escaped.

use crate::render::page::{FontWeight, Page, Primitive, TextAlign};
use maud::{DOCTYPE, Markup, html};

const PREVIEW_CSS: &str = "\
body { background: #e5e5e5; margin: 0; padding: 24px; font-family: sans-serif; }\n\
.page { margin: 0 auto 24px; width: fit-content; box-shadow: 0 2px 8px rgba(0,0,0,0.25); }\n\
.page svg { display: block; background: #ffffff; }\n\
.caption { text-align: center; color: #666; font-size: 12px; margin: 4px 0 16px; }";

/// Render pages as a standalone HTML preview document.
pub fn render_preview(pages: &[Page], title: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (PREVIEW_CSS) }
            }
            body {
                @for (i, page) in pages.iter().enumerate() {
                    div.page {
                        (page_svg(page))
                    }
                    p.caption { "Page " (i + 1) " of " (pages.len()) }
                }
            }
        }
    };
    markup.into_string()
}

fn page_svg(page: &Page) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(page.width)
            height=(page.height)
            viewBox=(format!("0 0 {} {}", page.width, page.height)) {
            @for primitive in &page.primitives {
                (primitive_svg(primitive))
            }
        }
    }
}

fn primitive_svg(primitive: &Primitive) -> Markup {
    match primitive {
        Primitive::Text {
            x,
            y,
            text,
            size,
            weight,
            color,
            align,
        } => {
            let anchor = match align {
                TextAlign::Left => "start",
                TextAlign::Center => "middle",
                TextAlign::Right => "end",
            };
            let font_weight = match weight {
                FontWeight::Regular => "normal",
                FontWeight::Bold => "bold",
            };
            html! {
                text x=(x) y=(y)
                    font-size=(size)
                    font-weight=(font_weight)
                    font-family="Helvetica, Arial, sans-serif"
                    fill=(color.to_hex())
                    text-anchor=(anchor) {
                    (text)
                }
            }
        }
        Primitive::Rect {
            x,
            y,
            w,
            h,
            fill,
            stroke,
            radius,
        } => html! {
            rect x=(x) y=(y) width=(w) height=(h) rx=(radius)
                fill=(fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string()))
                stroke=[stroke.map(|c| c.to_hex())] {}
        },
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => html! {
            line x1=(x1) y1=(y1) x2=(x2) y2=(y2)
                stroke=(color.to_hex()) stroke-width=(width) {}
        },
        Primitive::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        } => html! {
            circle cx=(cx) cy=(cy) r=(r)
                fill=(fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string()))
                stroke=[stroke.map(|c| c.to_hex())]
                stroke-width=(stroke_width) {}
        },
    }
}
