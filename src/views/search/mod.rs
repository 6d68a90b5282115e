mod render;

pub use render::draw_search_panel;
