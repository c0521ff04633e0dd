use std::io::Cursor;

use async_trait::async_trait;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioConverter, ConversionError};

use super::wav::{TARGET_SAMPLE_RATE, encode_wav_pcm16};

/// In-process conversion: symphonia decode, mono downmix, rubato resample.
pub struct SymphoniaAudioConverter;

#[async_trait]
impl AudioConverter for SymphoniaAudioConverter {
    async fn to_wav(&self, data: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let data = data.to_vec();
        tokio::task::spawn_blocking(move || {
            let pcm = decode_to_mono_16k(data)?;
            Ok(encode_wav_pcm16(&pcm, TARGET_SAMPLE_RATE))
        })
        .await
        .map_err(|e| ConversionError::DecodingFailed(format!("decoder task: {}", e)))?
    }
}

fn decode_failed(stage: &str, e: impl std::fmt::Display) -> ConversionError {
    ConversionError::DecodingFailed(format!("{}: {}", stage, e))
}

pub fn decode_to_mono_16k(data: Vec<u8>) -> Result<Vec<f32>, ConversionError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data)), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| decode_failed("probe", e))?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| ConversionError::DecodingFailed("no audio track found".to_string()))?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| ConversionError::DecodingFailed("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| decode_failed("codec", e))?;

    let mut mono: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(decode_failed("packet", e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => return Err(decode_failed("decode", e)),
        };

        let frames = decoded.frames();
        if frames == 0 {
            continue;
        }

        let mut buffer = SampleBuffer::<f32>::new(frames as u64, *decoded.spec());
        buffer.copy_interleaved_ref(decoded);

        if channels > 1 {
            mono.extend(
                buffer
                    .samples()
                    .chunks(channels)
                    .map(|frame| frame.iter().sum::<f32>() / channels as f32),
            );
        } else {
            mono.extend_from_slice(buffer.samples());
        }
    }

    if mono.is_empty() {
        return Err(ConversionError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    if source_rate != TARGET_SAMPLE_RATE {
        mono = resample(&mono, source_rate, TARGET_SAMPLE_RATE)?;
    }

    tracing::debug!(
        samples = mono.len(),
        duration_secs = mono.len() as f32 / TARGET_SAMPLE_RATE as f32,
        "Upload decoded to 16kHz mono"
    );

    Ok(mono)
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, ConversionError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    const CHUNK: usize = 1024;

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let ratio = to_rate as f64 / from_rate as f64;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK, 1)
        .map_err(|e| decode_failed("resampler init", e))?;

    let expected_len = (samples.len() as f64 * ratio) as usize;
    let mut output = Vec::with_capacity(expected_len + CHUNK);

    for chunk in samples.chunks(CHUNK) {
        let mut input = chunk.to_vec();
        input.resize(CHUNK, 0.0);

        let result = resampler
            .process(&[input], None)
            .map_err(|e| decode_failed("resample", e))?;
        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    // padding of the last chunk adds trailing silence
    output.truncate(expected_len);
    Ok(output)
}
