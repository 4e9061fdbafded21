use cars_business::CarTableController;
use egui::{Margin, Response, RichText, Ui};

use crate::utils::colors::{COLOR_ON_RED, COLOR_RED};

/// Shows the last API failure until the user closes it.
///
/// Renders nothing while the banner is hidden.
pub fn error_banner(controller: &mut CarTableController, ui: &mut Ui) -> Option<Response> {
    let message = controller.banner().message()?.to_owned();

    let mut dismiss = false;
    let response = egui::Frame::NONE
        .fill(COLOR_RED)
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&message).color(COLOR_ON_RED).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismiss = ui.button("Fechar").clicked();
                });
            });
        })
        .response;

    if dismiss {
        controller.dismiss_error();
    }
    ui.add_space(8.0);

    Some(response)
}
