use std::process::ExitCode;

fn main() -> ExitCode {
    match folio_tui::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}
