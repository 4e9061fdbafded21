use crate::{state::State, widgets};

pub struct CarsApp {
    pub state: State,
    initialized: bool,
}

impl CarsApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            initialized: false,
        }
    }
}

impl eframe::App for CarsApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The table loads itself as soon as the page is up.
        if !self.initialized {
            self.state.controller.set_repaint_context(ctx.clone());
            self.state.controller.initialize();
            self.initialized = true;
        }

        self.state.controller.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::toolbar(&mut self.state.controller, ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                widgets::error_banner(&mut self.state.controller, ui);
                widgets::car_form(&mut self.state.controller, ui);
                ui.separator();
                widgets::cars_table(&mut self.state.controller, ui);
            });
        });
    }
}
