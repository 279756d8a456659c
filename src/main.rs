fn main() {
    if let Err(e) = settings_app_lib::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
