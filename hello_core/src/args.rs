//! Command-line arguments shared by the publisher and subscriber programs

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const MAX_VERBOSITY: u8 = 5;

/// Flags understood by every hello_bus program
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(about = "Example application.", long_about = None)]
pub struct ApplicationArguments {
    /// Domain ID this application will publish or subscribe in
    #[arg(short, long = "domain", default_value_t = 0)]
    pub domain_id: u32,

    /// Number of samples to handle before cleanly shutting down (0 = infinite)
    #[arg(short, long, default_value_t = 0)]
    pub sample_count: u32,

    /// How much middleware debugging output to show (0-5)
    #[arg(short, long, default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=MAX_VERBOSITY as i64))]
    pub verbosity: u8,

    /// Configuration file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for ApplicationArguments {
    fn default() -> Self {
        Self {
            domain_id: 0,
            sample_count: 0,
            verbosity: 0,
            config: None,
        }
    }
}

impl ApplicationArguments {
    /// A sample count of zero means run until shutdown
    pub fn is_unbounded(&self) -> bool {
        self.sample_count == 0
    }

    /// True once `count` samples satisfy the requested sample count
    pub fn limit_reached(&self, count: u32) -> bool {
        !self.is_unbounded() && count >= self.sample_count
    }
}

/// Flags for the temperature programs
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(about = "Chocolate temperature example application.", long_about = None)]
pub struct TemperatureArguments {
    #[command(flatten)]
    pub common: ApplicationArguments,

    /// Identifies the sensor publishing temperatures
    #[arg(short = 'i', long, default_value = "default_id")]
    pub sensor_id: String,
}

/// Result of parsing the command line
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Arguments are valid, run the program
    Run(T),
    /// Help or version was printed, exit successfully
    Exit,
    /// Bad parameter, usage was printed, exit with failure
    Failure,
}

/// Parse the process command line
pub fn parse<T: Parser>() -> ParseOutcome<T> {
    parse_from(std::env::args_os())
}

/// Parse an explicit argument list (first item is the program name)
pub fn parse_from<T, I, S>(args: I) -> ParseOutcome<T>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => ParseOutcome::Run(parsed),
        Err(err) => {
            err.print().ok();
            match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseOutcome::Exit,
                _ => ParseOutcome::Failure,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<T: Parser + std::fmt::Debug>(argv: &[&str]) -> T {
        match parse_from::<T, _, _>(argv) {
            ParseOutcome::Run(args) => args,
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let args: ApplicationArguments = run(&["hello_world_publisher"]);
        assert_eq!(args, ApplicationArguments::default());
        assert!(args.is_unbounded());
    }

    #[test]
    fn test_short_and_long_flags() {
        let args: ApplicationArguments = run(&["pub", "-d", "7", "-s", "10", "-v", "3"]);
        assert_eq!(args.domain_id, 7);
        assert_eq!(args.sample_count, 10);
        assert_eq!(args.verbosity, 3);

        let args: ApplicationArguments = run(&[
            "pub",
            "--domain",
            "2",
            "--sample-count",
            "1",
            "--verbosity",
            "5",
            "--config",
            "bus.toml",
        ]);
        assert_eq!(args.domain_id, 2);
        assert_eq!(args.sample_count, 1);
        assert_eq!(args.verbosity, 5);
        assert_eq!(args.config, Some(PathBuf::from("bus.toml")));
    }

    #[test]
    fn test_help_exits() {
        let outcome = parse_from::<ApplicationArguments, _, _>(["pub", "--help"]);
        assert!(matches!(outcome, ParseOutcome::Exit));

        let outcome = parse_from::<ApplicationArguments, _, _>(["pub", "-h"]);
        assert!(matches!(outcome, ParseOutcome::Exit));
    }

    #[test]
    fn test_bad_parameter_fails() {
        for argv in [
            vec!["pub", "--bogus"],
            vec!["pub", "-d"],
            vec!["pub", "-d", "minus-one"],
            vec!["pub", "-v", "6"],
            vec!["pub", "-s", "-3"],
        ] {
            let outcome = parse_from::<ApplicationArguments, _, _>(argv.clone());
            assert!(matches!(outcome, ParseOutcome::Failure), "{:?}", argv);
        }
    }

    #[test]
    fn test_limit_reached() {
        let bounded = ApplicationArguments {
            sample_count: 3,
            ..Default::default()
        };
        assert!(!bounded.limit_reached(0));
        assert!(!bounded.limit_reached(2));
        assert!(bounded.limit_reached(3));

        let unbounded = ApplicationArguments::default();
        assert!(!unbounded.limit_reached(u32::MAX));
    }

    #[test]
    fn test_temperature_arguments() {
        let args: TemperatureArguments = run(&["temperature_publisher"]);
        assert_eq!(args.sensor_id, "default_id");
        assert_eq!(args.common.domain_id, 0);

        let args: TemperatureArguments = run(&["temperature_publisher", "-i", "tempering-1", "-d", "4"]);
        assert_eq!(args.sensor_id, "tempering-1");
        assert_eq!(args.common.domain_id, 4);
    }
}
