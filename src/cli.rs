use std::ffi::OsString;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "sez2ecef")]
#[command(about = "Convert a topocentric SEZ offset to ECEF coordinates")]
pub struct Cli {
    /// Observer geodetic latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub o_lat_deg: f64,
    /// Observer geodetic longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub o_lon_deg: f64,
    /// Observer height above the ellipsoid in km
    #[arg(allow_negative_numbers = true)]
    pub o_hae_km: f64,
    /// Target south offset from the observer in km
    #[arg(allow_negative_numbers = true)]
    pub s_km: f64,
    /// Target east offset from the observer in km
    #[arg(allow_negative_numbers = true)]
    pub e_km: f64,
    /// Target zenith offset from the observer in km
    #[arg(allow_negative_numbers = true)]
    pub z_km: f64,
    /// Print the result as a single JSON object instead of three lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong argument count, unknown argument, or an explicit help request.
    /// Carries the text to print to stdout; the process exits with status 0.
    #[error("{0}")]
    Usage(String),
    /// An argument was present but is not a valid floating-point literal.
    #[error("invalid value {value:?} for {argument}: not a number")]
    Parse { argument: String, value: String },
}

pub fn parse_args<I, T>(argv: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map_err(classify)
}

fn classify(err: clap::Error) -> CliError {
    match err.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            let argument = err
                .get(ContextKind::InvalidArg)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "argument".to_string());
            let value = err
                .get(ContextKind::InvalidValue)
                .map(|v| v.to_string())
                .unwrap_or_default();
            CliError::Parse { argument, value }
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Usage(err.to_string()),
        _ => CliError::Usage(Cli::command().render_usage().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_arguments_parse_into_fields() {
        let cli = parse_args([
            "sez2ecef",
            "34.352496",
            "-86.786100",
            "0.295966",
            "-0.734260",
            "-1.927172",
            "-3.177040",
        ])
        .unwrap();
        assert_eq!(cli.o_lat_deg, 34.352496);
        assert_eq!(cli.o_lon_deg, -86.786100);
        assert_eq!(cli.o_hae_km, 0.295966);
        assert_eq!(cli.s_km, -0.734260);
        assert_eq!(cli.e_km, -1.927172);
        assert_eq!(cli.z_km, -3.177040);
        assert!(!cli.json);
    }

    #[test]
    fn json_flag_is_recognized() {
        let cli = parse_args(["sez2ecef", "0", "0", "0", "0", "0", "0", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn missing_arguments_are_a_usage_error() {
        let err = parse_args(["sez2ecef", "1.0", "2.0"]).unwrap_err();
        match err {
            CliError::Usage(text) => assert!(text.contains("Usage")),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        let err = parse_args(["sez2ecef", "1", "2", "3", "4", "5", "6", "7"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn non_numeric_argument_is_a_parse_error() {
        let err = parse_args(["sez2ecef", "1", "2", "north", "4", "5", "6"]).unwrap_err();
        match err {
            CliError::Parse { argument, value } => {
                assert!(argument.contains("O_HAE_KM"), "argument was {argument:?}");
                assert_eq!(value, "north");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
