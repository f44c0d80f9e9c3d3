use clap::Parser;

/// Interactive workout log
///
/// GymLog keeps a list of planned exercises for the current session. Add
/// exercises, list them, record repetitions and weight once they are done,
/// or remove them, all from a numbered menu. Nothing is written to disk:
/// the log is discarded when the program exits.
///
/// Set RUST_LOG (e.g. RUST_LOG=debug) to see diagnostic logs on stderr.
#[derive(Parser)]
#[command(version, about, name = "gymlog")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
