//! Form for registering a new car.

use cars_business::CarTableController;
use egui::{Key, Response, TextEdit, Ui};

const FIELD_WIDTH: f32 = 280.0;

/// Renders the five car fields and the submit button.
///
/// Pressing Enter in any field submits the same way the button does.
pub fn car_form(controller: &mut CarTableController, ui: &mut Ui) -> Response {
    let focus_image = controller.form_mut().take_focus_request();
    let mut submit = false;

    let response = ui
        .vertical(|ui| {
            egui::Grid::new("car_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    let form = controller.form_mut();

                    let image = form_field(ui, "Imagem", &mut form.image, "https://...");
                    if focus_image {
                        image.request_focus();
                    }
                    submit |= enter_pressed(ui, &image);

                    let brand_model =
                        form_field(ui, "Marca / Modelo", &mut form.brand_model, "Marca e modelo");
                    submit |= enter_pressed(ui, &brand_model);

                    let year = form_field(ui, "Ano", &mut form.year, "1998");
                    submit |= enter_pressed(ui, &year);

                    let plate = form_field(ui, "Placa", &mut form.plate, "ABC-1234");
                    submit |= enter_pressed(ui, &plate);

                    let color = form_field(ui, "Cor", &mut form.color, "#ff0000");
                    submit |= enter_pressed(ui, &color);
                });

            ui.add_space(4.0);
            submit |= ui.button("Cadastrar").clicked();
        })
        .response;

    if submit {
        controller.submit_new_car();
    }

    response
}

fn form_field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> Response {
    let label = ui.label(label);
    let response = ui
        .add(
            TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(FIELD_WIDTH),
        )
        .labelled_by(label.id);
    ui.end_row();
    response
}

#[inline]
fn enter_pressed(ui: &Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
