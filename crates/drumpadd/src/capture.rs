use std::path::Path;

use drumpad_driver::TransferStatus;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}

/// One recorded interrupt completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFrame {
    pub status: TransferStatus,
    pub data: SmallVec<[u8; 32]>,
}

impl CaptureFrame {
    pub fn completed(data: &[u8]) -> Self {
        Self {
            status: TransferStatus::Completed,
            data: SmallVec::from_slice(data),
        }
    }
}

fn parse_status(word: &str) -> Option<TransferStatus> {
    match word {
        "ok" => Some(TransferStatus::Completed),
        "stall" => Some(TransferStatus::Stalled),
        "error" => Some(TransferStatus::Failed),
        "cancel" => Some(TransferStatus::Cancelled),
        _ => None,
    }
}

fn parse_line(line: &str) -> Result<CaptureFrame, String> {
    let (status, bytes) = match line.split_once(':') {
        Some((word, rest)) => {
            let word = word.trim();
            let status =
                parse_status(word).ok_or_else(|| format!("unknown status \"{word}\""))?;
            (status, rest)
        }
        None => (TransferStatus::Completed, line),
    };

    let mut data = SmallVec::new();
    for token in bytes.split_whitespace() {
        let byte = u8::from_str_radix(token, 16)
            .map_err(|_| format!("invalid hex byte \"{token}\""))?;
        data.push(byte);
    }
    Ok(CaptureFrame { status, data })
}

/// Parse a capture: one frame of hex bytes per line, with an optional
/// `ok:`/`stall:`/`error:`/`cancel:` prefix. `#` starts a comment.
pub fn parse_capture(input: &str) -> Result<Vec<CaptureFrame>, CaptureError> {
    let mut frames = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((content, _)) => content,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let frame = parse_line(line).map_err(|message| CaptureError::Parse {
            line: index + 1,
            message,
        })?;
        frames.push(frame);
    }
    Ok(frames)
}

pub fn load_capture(path: &Path) -> Result<Vec<CaptureFrame>, CaptureError> {
    let input = std::fs::read_to_string(path)?;
    parse_capture(&input)
}
