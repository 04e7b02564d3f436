use std::process::ExitCode;

fn main() -> ExitCode {
    match std::env::current_dir() {
        Ok(cwd) => rusky_installer::advise(&cwd),
        Err(e) => eprintln!("⚠️  Warning: Could not clean up hooks: {e}"),
    }

    // Advisory only: package removal must never be blocked from here.
    ExitCode::SUCCESS
}
