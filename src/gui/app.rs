use super::Config;
use crate::{FpsLimiter, Simulation};
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin};

pub struct App {
    pub(super) life: Simulation,                  // Conway's GoL simulation.
    pub(super) is_paused: bool,                   // Flag indicating whether the simulation is paused.
    pub(super) updates_before_pause: Option<u64>, // Number of updates left before stopping.
    pub(super) do_one_step: bool,                 // Do one step and pause.
    pub(super) fps_limiter: FpsLimiter,           // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(life: Simulation, max_fps: f64, updates_before_pause: Option<u64>) -> Self {
        Self {
            life,
            is_paused: false,
            updates_before_pause,
            do_one_step: false,
            fps_limiter: FpsLimiter::new(max_fps),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.life
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    pub fn request_step(&mut self) {
        self.do_one_step = true;
    }

    /// Steps the simulation once unless it is paused.
    pub fn update_engine(&mut self) {
        if self.updates_before_pause == Some(0) {
            self.updates_before_pause = None;
            self.is_paused = true;
            self.do_one_step = false;
        }
        if self.is_paused && !self.do_one_step {
            return;
        }

        self.life.step();

        if let Some(n) = self.updates_before_pause.as_mut() {
            *n -= 1;
        }
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);
                self.draw(ui);
                self.update_engine();
            });

        self.fps_limiter.delay();
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::Simulation;

    #[test]
    fn pauses_after_given_updates() {
        let mut app = App::new(Simulation::random(8, 8, Some(1)), 1e6, Some(3));
        for _ in 0..10 {
            app.update_engine();
        }
        assert!(app.is_paused());
        assert_eq!(app.simulation().generation(), 3);

        app.toggle_pause();
        app.update_engine();
        assert_eq!(app.simulation().generation(), 4);
    }

    #[test]
    fn single_step_while_paused() {
        let mut app = App::new(Simulation::random(8, 8, Some(1)), 1e6, None);
        app.toggle_pause();
        app.update_engine();
        assert_eq!(app.simulation().generation(), 0);

        app.request_step();
        app.update_engine();
        app.update_engine();
        assert_eq!(app.simulation().generation(), 1);
    }
}
