use futures::sink::SinkExt;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_stream::StreamExt;
use tokio_util::codec::{FramedRead, FramedWrite};

use radar::SpeedLimit;
use radar::inspect;
use radar::messages::{MAX_LINE, Request, RequestDecoder, Response, ResponseEncoder};

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub limit: SpeedLimit,
    /// Fixed seed for the vehicle generator; fresh entropy when unset.
    pub seed: Option<u64>,
    /// Print the banner and a prompt before each reading.
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limit: SpeedLimit::default(),
            seed: None,
            interactive: true,
        }
    }
}

/// Summary of a finished session.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Tally {
    pub checked: u32,
    pub infractions: u32,
    pub rejected: u32,
}

fn seeded(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

async fn check<W>(
    raw: &str,
    config: &Config,
    rng: &mut StdRng,
    writer: &mut FramedWrite<W, ResponseEncoder>,
    tally: &mut Tally,
) -> Result<(), std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    match inspect(raw, config.limit, rng) {
        Ok(report) => {
            tally.checked += 1;
            if report.has_infraction() {
                tally.infractions += 1;
            }
            writer.send(Response::Notice(report)).await
        }
        Err(e) => {
            debug!("Rejected reading {:?}", e.input);
            tally.rejected += 1;
            writer.send(Response::Error(e.to_string())).await
        }
    }
}

/// Checks a single reading taken verbatim; no commands, blank is invalid.
pub async fn check_once<W>(raw: &str, output: W, config: Config) -> Result<Tally, std::io::Error>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = FramedWrite::new(output, ResponseEncoder {});
    let mut rng = seeded(&config);
    let mut tally = Tally::default();

    check(raw, &config, &mut rng, &mut writer, &mut tally).await?;
    Ok(tally)
}

pub async fn run<R, W>(input: R, output: W, config: Config) -> Result<Tally, std::io::Error>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = FramedRead::new(input, RequestDecoder::new());
    let mut writer = FramedWrite::new(output, ResponseEncoder {});

    let mut rng = seeded(&config);
    let mut tally = Tally::default();

    info!(
        "Limit {} km/h with {}% tolerance",
        config.limit.kmh, config.limit.tolerance_percent
    );
    if config.interactive {
        writer.send(Response::Banner).await?;
    }

    loop {
        if config.interactive {
            writer.send(Response::Prompt).await?;
        }

        match reader.next().await {
            Some(Ok(request)) => match request {
                Request::Check(raw) => {
                    check(&raw, &config, &mut rng, &mut writer, &mut tally).await?
                }
                Request::TooLong => {
                    tally.rejected += 1;
                    let message = format!("reading longer than {} bytes ignored", MAX_LINE);
                    writer.send(Response::Error(message)).await?;
                }
                Request::Help => writer.send(Response::Help).await?,
                Request::Quit => {
                    debug!("Operator quit");
                    break;
                }
            },
            // The framed reader yields nothing more after an error
            Some(Err(e)) => {
                error!("Error reading input {}", e);
                return Err(e);
            }
            None => {
                debug!("End of input");
                break;
            }
        }
    }

    info!(
        "Session over: {} checked, {} infractions, {} rejected",
        tally.checked, tally.infractions, tally.rejected
    );
    Ok(tally)
}
