use std::io::{self, BufRead, Write};

use crate::state::AppState;

pub const STATS_COMMAND: &str = ":stats";
pub const RESET_COMMAND: &str = ":reset";

/// Answers one query or command with a single JSON line.
pub fn handle_line(state: &AppState, line: &str, out: &mut impl Write) -> io::Result<()> {
    let router = state.router();
    let json = match line {
        STATS_COMMAND => serde_json::to_string(&router.statistics()),
        RESET_COMMAND => {
            router.reset();
            serde_json::to_string(&router.statistics())
        }
        query => serde_json::to_string(&router.retrieve_with_statistics(query)),
    }
    .map_err(io::Error::other)?;

    writeln!(out, "{json}")
}

/// Serves every line of `reader` until EOF. A line that cannot be read ends
/// the loop with that error rather than being treated as end of input.
pub fn serve_lines<R: BufRead, W: Write>(
    state: &AppState,
    reader: R,
    out: &mut W,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        handle_line(state, line.trim(), out)?;
    }
    out.flush()
}
