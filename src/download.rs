//! Audio acquisition collaborator - fetches a video's audio track with yt-dlp
//!
//! The mechanism is deliberately opaque to the engine: given a locator,
//! either a local audio file comes back or the whole operation fails with a
//! retrievable error.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

/// A fetched audio asset on local disk
#[derive(Debug, Clone)]
pub struct AudioAsset {
    pub audio_path: PathBuf,
    pub video_id: String,
}

/// Does this input look like a remote video URL rather than a local path?
pub fn is_remote_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Download the best audio track of `url` into `work_dir` as an mp3.
///
/// Requires `yt-dlp` (and ffmpeg for the mp3 extraction) on PATH.
pub fn fetch_audio(url: &str, work_dir: &Path) -> Result<AudioAsset> {
    std::fs::create_dir_all(work_dir)
        .with_context(|| format!("Failed to create work directory {:?}", work_dir))?;

    let video_id = probe_video_id(url)?;
    let audio_path = work_dir.join(format!("{}.mp3", video_id));
    if audio_path.is_file() {
        info!(path = %audio_path.display(), "reusing previously downloaded audio");
        return Ok(AudioAsset {
            audio_path,
            video_id,
        });
    }

    let output_template = work_dir.join("%(id)s.%(ext)s");
    info!(url, "downloading audio track");
    let output = Command::new("yt-dlp")
        .arg("--format")
        .arg("bestaudio[ext=m4a]/bestaudio/best")
        .arg("--extract-audio")
        .arg("--audio-format")
        .arg("mp3")
        .arg("--no-playlist")
        .arg("--quiet")
        .arg("--extractor-args")
        .arg("youtube:player_client=android")
        .arg("--output")
        .arg(&output_template)
        .arg(url)
        .output()
        .context("Failed to run yt-dlp; is it installed and on PATH?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("yt-dlp failed ({}): {}", output.status, stderr.trim());
    }

    if !audio_path.is_file() {
        bail!("Audio download failed. Please try another video.");
    }

    debug!(path = %audio_path.display(), "audio download complete");
    Ok(AudioAsset {
        audio_path,
        video_id,
    })
}

/// Ask yt-dlp for the canonical video id without downloading anything
fn probe_video_id(url: &str) -> Result<String> {
    let output = Command::new("yt-dlp")
        .arg("--no-playlist")
        .arg("--print")
        .arg("id")
        .arg("--skip-download")
        .arg(url)
        .output()
        .context("Failed to run yt-dlp; is it installed and on PATH?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("yt-dlp could not resolve {}: {}", url, stderr.trim());
    }

    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if id.is_empty() {
        bail!("yt-dlp returned an empty video id for {}", url);
    }
    Ok(id)
}
