pub mod fountain_renderer;

pub use fountain_renderer::{
    render_fountain,
    format_element,
    element_separator,
    render_title_page,
    render_metadata_note
};
