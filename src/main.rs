use quiz_setup::QuizSetupApp;
use quiz_setup::data::read_form_options_embedded;
use quiz_setup::model::QuizRequest;

/// Sin backend: la petición se vuelca en YAML por stdout para que otro
/// proceso la recoja.
fn print_request(request: QuizRequest) {
    match serde_yaml::to_string(&request) {
        Ok(yaml) => println!("---\n{yaml}"),
        Err(e) => log::error!("no se pudo serializar la petición: {e}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let form_options = read_form_options_embedded()?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Quiz - Nouvelle session",
        options,
        Box::new(|_cc| Ok(Box::new(QuizSetupApp::new(form_options, print_request)))),
    )?;
    Ok(())
}
