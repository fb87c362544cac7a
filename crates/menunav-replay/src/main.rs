//! Command-line entry point.

use clap::Parser;
use menunav_replay::ReplayError;
use std::path::PathBuf;

/// Replay a key/mouse script against a menu screen and print the report.
#[derive(Parser)]
#[command(name = "menunav-replay")]
#[command(version)]
struct Args {
    /// Screen layout (JSON)
    layout: PathBuf,

    /// Input script (JSON)
    script: PathBuf,
}

fn main() -> Result<(), ReplayError> {
    env_logger::init();
    let args = Args::parse();

    let report = menunav_replay::run(&args.layout, &args.script)?;
    println!("{}", report.to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
        let args = Args::try_parse_from(["menunav-replay", "layout.json", "script.json"]).unwrap();
        assert_eq!(args.layout, PathBuf::from("layout.json"));
        assert_eq!(args.script, PathBuf::from("script.json"));
        assert!(Args::try_parse_from(["menunav-replay", "layout.json"]).is_err());
        assert!(Args::try_parse_from(["menunav-replay", "a", "b", "c"]).is_err());
    }
}
