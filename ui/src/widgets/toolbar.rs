use cars_business::CarTableController;
use egui::{Response, Ui};

/// Title, reload button and load status shown in the top panel.
pub fn toolbar(controller: &mut CarTableController, ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        ui.heading("Carros");
        ui.separator();

        let reload = ui
            .add_enabled(
                !controller.table().is_fetching(),
                egui::Button::new("🔄 Recarregar"),
            )
            .on_hover_text("Buscar os carros novamente");
        if reload.clicked() {
            controller.initialize();
        }

        if controller.task_count() > 0 {
            ui.spinner();
        } else if let Some(loaded_at) = controller.table().last_load() {
            ui.weak(format!("Atualizado às {}", loaded_at.format("%H:%M:%S UTC")));
        }
    })
    .response
}
