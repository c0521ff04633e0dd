use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioConverter, ConversionError};

use super::wav::TARGET_SAMPLE_RATE;

/// Converts through the `ffmpeg` binary.
///
/// The upload and the converted output live in named temp files under
/// `scratch_dir`; both are removed when they go out of scope, whichever way
/// `to_wav` returns.
pub struct FfmpegAudioConverter {
    binary: String,
    scratch_dir: PathBuf,
}

impl FfmpegAudioConverter {
    pub fn new(binary: impl Into<String>, scratch_dir: PathBuf) -> Result<Self, ConversionError> {
        std::fs::create_dir_all(&scratch_dir)?;
        Ok(Self {
            binary: binary.into(),
            scratch_dir,
        })
    }

    pub async fn check_binary(&self) -> Result<(), ConversionError> {
        let output = Command::new(&self.binary)
            .arg("-version")
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !output.status.success() {
            return Err(ConversionError::ConverterUnavailable(format!(
                "{} -version exited with {}",
                self.binary, output.status
            )));
        }
        Ok(())
    }

    fn unavailable(&self, e: std::io::Error) -> ConversionError {
        ConversionError::ConverterUnavailable(format!("{}: {}", self.binary, e))
    }
}

#[async_trait]
impl AudioConverter for FfmpegAudioConverter {
    async fn to_wav(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let mut input = tempfile::Builder::new()
            .prefix("upload-")
            .tempfile_in(&self.scratch_dir)?;
        input.write_all(data)?;
        input.flush()?;

        let output = tempfile::Builder::new()
            .prefix("converted-")
            .suffix(".wav")
            .tempfile_in(&self.scratch_dir)?;

        let sample_rate = TARGET_SAMPLE_RATE.to_string();
        let result = Command::new(&self.binary)
            .arg("-y")
            .args(["-hide_banner", "-loglevel", "error"])
            .arg("-i")
            .arg(input.path())
            .args(["-ar", sample_rate.as_str(), "-ac", "1", "-c:a", "pcm_s16le", "-f", "wav"])
            .arg(output.path())
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ConversionError::DecodingFailed(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        let wav = tokio::fs::read(output.path()).await?;
        if wav.is_empty() {
            return Err(ConversionError::DecodingFailed(
                "ffmpeg produced no output".to_string(),
            ));
        }

        tracing::debug!(bytes = wav.len(), "ffmpeg conversion completed");
        Ok(wav)
    }
}
