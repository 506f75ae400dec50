use std::io;
use lms_console::core::controller::AppState;
use lms_console::core::domain::Configuration;
use lms_console::core::library::LibraryError;
use lms_console::shell::Shell;
use lms_console::utils::logs::setup_tracing;

const DEV_MODE: bool = false;

fn main() -> Result<(), LibraryError> {
    let state = if DEV_MODE {
        AppState::new(Configuration::dev("dev"))
    } else {
        AppState::new(Configuration::new("main"))
    };
    setup_tracing(&state.config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(state, stdin.lock(), stdout.lock());
    shell.run()
}
