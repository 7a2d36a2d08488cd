use anyhow::{ensure, Result};

use crate::types::AudioData;

/// Linearly resample audio to `target_rate`, returning it unchanged when
/// the rates already match. Whisper expects 16 kHz mono input.
pub fn resample_to(audio: AudioData, target_rate: u32) -> Result<AudioData> {
    ensure!(audio.sample_rate > 0, "source sample rate must be positive");
    ensure!(target_rate > 0, "target sample rate must be positive");
    if audio.samples.is_empty() || audio.sample_rate == target_rate {
        return Ok(AudioData {
            samples: audio.samples,
            sample_rate: target_rate,
        });
    }

    let ratio = target_rate as f64 / audio.sample_rate as f64;
    let output_len = ((audio.samples.len() as f64) * ratio).ceil().max(1.0) as usize;
    let last_index = audio.samples.len() - 1;
    let mut output = Vec::with_capacity(output_len);
    for i in 0..output_len {
        let position = i as f64 / ratio;
        let left = position.floor() as usize;
        let right = (left + 1).min(last_index);
        let t = (position - left as f64) as f32;
        output.push(audio.samples[left] * (1.0 - t) + audio.samples[right] * t);
    }

    Ok(AudioData {
        samples: output,
        sample_rate: target_rate,
    })
}
