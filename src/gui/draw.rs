use super::{App, Config};
use eframe::egui::{vec2, Button, Rect, RichText, Sense, Stroke, Ui, Vec2};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.toggle_pause();
            }

            if ui
                .add_enabled(self.is_paused, Self::new_button("Next step"))
                .clicked()
            {
                self.request_step();
            }

            ui.add_space(Config::WIDGET_GAP);
            ui.label(Self::new_text(&format!(
                "Generation: {}   Population: {}   FPS: {:.1}",
                self.life.generation(),
                self.life.population(),
                self.fps_limiter.fps(),
            )));
        });
        ui.add_space(Config::WIDGET_GAP);
    }

    fn draw_field(&self, ui: &mut Ui) {
        let (width, height) = self.life.size();
        let available = ui.available_size();
        let side = (available.x / width as f32)
            .min(available.y / height as f32)
            .max(1.);
        let (rect, _) =
            ui.allocate_exact_size(vec2(side * width as f32, side * height as f32), Sense::hover());

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0., Config::DEAD_COLOR);

        let gap = side * Config::CELL_GAP;
        let field = self.life.field();
        for y in 0..height {
            for x in 0..width {
                if field.alive(x as i64, y as i64) {
                    let min = rect.min + vec2(x as f32 * side + gap, y as f32 * side + gap);
                    let cell = Rect::from_min_size(min, Vec2::splat(side - 2. * gap));
                    painter.rect_filled(cell, 0., Config::ALIVE_COLOR);
                }
            }
        }
    }

    pub(super) fn draw(&mut self, ui: &mut Ui) {
        self.draw_controls(ui);
        self.draw_field(ui);
    }
}
