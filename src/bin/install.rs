use std::process::ExitCode;

use rusky_installer::{CargoToolchain, Environment, HttpTransport};

fn main() -> ExitCode {
    let env = match Environment::from_host() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rusky_installer::provision(&env, &HttpTransport::new(), &CargoToolchain) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
