use std::process::ExitCode;

fn main() -> ExitCode {
    match strest_cloudwatch::entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
