use bytes::{BufMut, BytesMut};
use log::debug;
use std::fmt::Write;
use tokio_util::codec::{Decoder, Encoder};

use crate::notice::Report;

/// A line typed by the operator.
#[derive(Debug, PartialEq, Eq)]
pub enum Request {
    Check(String),
    Help,
    Quit,
    /// A line longer than [`MAX_LINE`] bytes; its content is dropped.
    TooLong,
}

/// Something written back to the operator.
#[derive(Debug, PartialEq)]
pub enum Response {
    Banner,
    Prompt,
    Help,
    Notice(Report),
    Error(String),
}

/// Longest line accepted, newline excluded.
pub const MAX_LINE: usize = 256;

const BANNER: &str = "ELECTRONIC SPEED CAMERA SYSTEM\n\
    Enter the recorded vehicle speed (km/h), or `help` for commands.\n";

const HELP: &str = "Commands:\n  \
    <speed>   check a reading, e.g. 85 or 90,5\n  \
    help      show this message\n  \
    quit      leave the session\n";

const PROMPT: &str = "Recorded speed (km/h): ";

// Bytes that are not UTF-8 still make a line; the reading then fails to parse
fn to_request(line: &[u8]) -> Option<Request> {
    let text = String::from_utf8_lossy(line);
    match text.trim() {
        "" => None,
        "help" | "?" => Some(Request::Help),
        "quit" | "exit" | "q" => Some(Request::Quit),
        reading => Some(Request::Check(reading.to_string())),
    }
}

#[derive(Debug, Default)]
pub struct RequestDecoder {
    // Bytes of the buffer already searched for a newline
    next_index: usize,
    // Dropping the tail of an overlong line
    discarding: bool,
}

impl RequestDecoder {
    pub fn new() -> Self {
        RequestDecoder::default()
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            let newline = src[self.next_index..].iter().position(|b| *b == b'\n');
            let line_end = match newline {
                Some(offset) => self.next_index + offset,
                None if self.discarding => {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }
                None if src.len() > MAX_LINE => {
                    debug!("dropping line over {} bytes", MAX_LINE);
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Ok(Some(Request::TooLong));
                }
                None => {
                    self.next_index = src.len();
                    return Ok(None);
                }
            };

            let line = src.split_to(line_end + 1);
            self.next_index = 0;
            if self.discarding {
                self.discarding = false;
                continue;
            }
            if line_end > MAX_LINE {
                return Ok(Some(Request::TooLong));
            }

            debug!("line: {:?}", &line[..line_end]);
            // Blank lines are skipped rather than surfaced
            if let Some(request) = to_request(&line[..line_end]) {
                return Ok(Some(request));
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(src)? {
            return Ok(Some(request));
        }
        self.next_index = 0;
        if self.discarding {
            self.discarding = false;
            src.clear();
            return Ok(None);
        }
        if src.is_empty() {
            return Ok(None);
        }

        // Last line had no trailing newline
        let rest = src.split_to(src.len());
        Ok(to_request(&rest))
    }
}

pub struct ResponseEncoder {}

impl Encoder<Response> for ResponseEncoder {
    type Error = std::io::Error;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            Response::Banner => dst.extend_from_slice(BANNER.as_bytes()),
            Response::Prompt => dst.extend_from_slice(PROMPT.as_bytes()),
            Response::Help => dst.extend_from_slice(HELP.as_bytes()),
            Response::Notice(report) => {
                write!(dst, "{}", report).map_err(std::io::Error::other)?;
                dst.put_u8(b'\n');
            }
            Response::Error(e) => {
                dst.reserve(8 + e.len());

                dst.extend_from_slice(b"Error: ");
                dst.extend_from_slice(e.as_bytes());
                dst.put_u8(b'\n');
            }
        }
        Ok(())
    }
}
