use clap::Parser;
use log::{debug, error};

use console::{Config, Tally, check_once, run};
use radar::SpeedLimit;
use radar::infraction::{DEFAULT_LIMIT, DEFAULT_TOLERANCE};

#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
struct Args {
    /// Posted speed limit of the road in km/h
    #[arg(
        short = 'l',
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    limit: u16,

    /// Tolerance over the limit, in percent
    #[arg(short = 't', long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: u8,

    /// Seed for the made-up vehicle data
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Check a single reading and exit instead of starting a session
    #[arg(long)]
    speed: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    debug!("Speed limit is {} km/h", args.limit);
    debug!("Tolerance is {}%", args.tolerance);

    let config = Config {
        limit: SpeedLimit::new(args.limit, args.tolerance),
        seed: args.seed,
        interactive: args.speed.is_none(),
    };

    let result = match args.speed {
        Some(speed) => check_once(&speed, tokio::io::stdout(), config).await,
        None => run(tokio::io::stdin(), tokio::io::stdout(), config).await,
    };

    match result {
        Ok(tally) => std::process::exit(exit_status(&tally, &config)),
        Err(e) => {
            error!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// A one-shot check fails when its reading was rejected.
fn exit_status(tally: &Tally, config: &Config) -> i32 {
    if tally.rejected > 0 && !config.interactive {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_shot() -> Config {
        Config {
            seed: Some(3),
            interactive: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(Args::try_parse_from(["console", "--limit", "0"]).is_err());
        let args = Args::try_parse_from(["console", "--limit", "1"]).unwrap();
        assert_eq!(args.limit, 1);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["console"]).unwrap();
        assert_eq!(args.limit, 80);
        assert_eq!(args.tolerance, 10);
        assert!(args.speed.is_none());
    }

    #[tokio::test]
    async fn test_blank_speed_fails() {
        for raw in ["", "   ", "help", "quit"] {
            let mut out = Vec::new();
            let tally = check_once(raw, &mut out, one_shot()).await.unwrap();

            assert_eq!(tally.rejected, 1, "{:?}", raw);
            assert_eq!(exit_status(&tally, &one_shot()), 1);
            assert!(String::from_utf8(out).unwrap().starts_with("Error: "));
        }
    }

    #[tokio::test]
    async fn test_valid_speed_succeeds() {
        let mut out = Vec::new();
        let tally = check_once("121", &mut out, one_shot()).await.unwrap();

        assert_eq!(tally.infractions, 1);
        assert_eq!(exit_status(&tally, &one_shot()), 0);
    }
}
