use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 0xff, 0xff);
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    /// Gap between neighbouring cells, as a fraction of the cell side.
    pub const CELL_GAP: f32 = 0.1;

    pub const WIDGET_GAP: f32 = 20.;
}
