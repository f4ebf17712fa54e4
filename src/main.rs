use std::process;

fn main() {
    if let Err(e) = rsa_cli::ui::app::run() {
        eprintln!("Error running application: {}", e);
        process::exit(1);
    }
}
