pub mod formatting;
pub mod render;
pub mod share;

pub use render::{render_active_filters, render_facets, render_json, render_list, render_map};
pub use share::format_share_text;
