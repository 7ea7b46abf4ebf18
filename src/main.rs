use std::io;
use std::process::ExitCode;

use essay_retrieval::cli;
use essay_retrieval::config::Config;
use essay_retrieval::logging;
use essay_retrieval::state::AppState;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config);

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.is_empty() {
        cli::serve_lines(&state, io::stdin().lock(), &mut out)
    } else {
        args.iter()
            .try_for_each(|query| cli::handle_line(&state, query, &mut out))
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "failed to read query or write response");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
