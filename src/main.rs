use ember8_gui::Application;

fn main() {
    env_logger::init();
    if let Err(error) = Application::run() {
        log::error!("{error}");
        std::process::exit(1);
    }
}
