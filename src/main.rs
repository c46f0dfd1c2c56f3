mod cli;
mod coords;

use std::process::ExitCode;

use cli::{parse_args, CliError};
use coords::{sez_to_ecef, GeodeticPosition, SezVector, WGS84};

fn main() -> ExitCode {
    env_logger::init();

    let cli = match parse_args(std::env::args()) {
        Ok(cli) => cli,
        Err(CliError::Usage(text)) => {
            // Usage problems intentionally exit 0; only malformed numeric
            // input below reports a failure status.
            println!("{}", text);
            return ExitCode::SUCCESS;
        }
        Err(err @ CliError::Parse { .. }) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let observer = GeodeticPosition {
        latitude_deg: cli.o_lat_deg,
        longitude_deg: cli.o_lon_deg,
        height_km: cli.o_hae_km,
    };
    let offset = SezVector {
        s_km: cli.s_km,
        e_km: cli.e_km,
        z_km: cli.z_km,
    };
    log::debug!("Observer: {:?}, SEZ offset: {:?}", observer, offset);

    let target = sez_to_ecef(&observer, &offset, &WGS84);
    log::debug!("Target ECEF: {:?}", target);

    if cli.json {
        match serde_json::to_string(&target) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("JSON encode error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", target.x_km);
        println!("{}", target.y_km);
        println!("{}", target.z_km);
    }

    ExitCode::SUCCESS
}
