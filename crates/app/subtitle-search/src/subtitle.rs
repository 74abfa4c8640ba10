/*!
Subtitle and episode loading.

Mirrors the original tool's `Subtitle`/`Episode` split and its handling
of multi-episode subtitle files (a single `.srt`-shaped file whose name
lists several episode names joined by `" - "`, split into per-episode
runs using the offsets file).
*/

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub time_begin_ms: i64,
    pub time_end_ms: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub name: String,
    pub subtitles: Vec<Subtitle>,
}

fn subtitle_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+:\d+:\d+\.\d+), (\d+:\d+:\d+\.\d+), *(.*)$").expect("valid regex")
    })
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+):(\d+):(\d+)\.(\d+)$").expect("valid regex"))
}

/// Parses `HH:MM:SS.mmm` into a millisecond count.
pub fn parse_time(text: &str) -> Result<i64> {
    let caps =
        timestamp_pattern().captures(text).ok_or_else(|| AppError::MalformedTimestamp {
            text: text.to_string(),
        })?;

    let field = |i: usize| -> i64 { caps[i].parse().expect("regex guarantees digits") };
    let hours = field(1);
    let minutes = field(2);
    let seconds = field(3);
    let millis = field(4);

    Ok(((hours * 60 + minutes) * 60 + seconds) * 1000 + millis)
}

/// Parses one `HH:MM:SS.mmm, HH:MM:SS.mmm, text` line.
pub fn parse_subtitle_line(line: &str) -> Result<Subtitle> {
    let caps = subtitle_line_pattern()
        .captures(line)
        .ok_or_else(|| AppError::MalformedSubtitleLine { line: line.to_string() })?;

    Ok(Subtitle {
        time_begin_ms: parse_time(&caps[1])?,
        time_end_ms: parse_time(&caps[2])?,
        text: caps[3].to_string(),
    })
}

/// Loads every non-blank line of `path` as a subtitle, logging and
/// skipping lines that don't parse instead of failing the whole file.
pub fn load_subtitles_file(path: &Path) -> anyhow::Result<Vec<Subtitle>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading subtitle file {}: {e}", path.display()))?;

    let mut subtitles = Vec::new();
    for line in contents.lines() {
        if line.is_empty() {
            continue;
        }
        match parse_subtitle_line(line) {
            Ok(subtitle) => subtitles.push(subtitle),
            Err(err) => tracing::warn!("skipping malformed subtitle line in {}: {err}", path.display()),
        }
    }

    Ok(subtitles)
}

/// Splits a multi-episode file stem (e.g. `"Ep1 - Ep2"`) into names.
pub fn split_episode_names(stem: &str) -> Vec<String> {
    stem.split(" - ").map(str::to_string).collect()
}

/// Pairs each episode name with its millisecond offset, in the order given.
pub fn pair_episode_names_and_offsets(
    names: &[String],
    offsets: &HashMap<String, i64>,
) -> Result<Vec<(String, i64)>> {
    names
        .iter()
        .map(|name| {
            offsets
                .get(name)
                .map(|&offset| (name.clone(), offset))
                .ok_or_else(|| AppError::UnknownEpisodeOffset { name: name.clone() })
        })
        .collect()
}

/// Splits one subtitle file's lines across the episodes named in its
/// filename stem, using each episode's offset as the boundary between
/// it and its predecessor.
///
/// Subtitles that time out before the earliest episode's offset have
/// no episode to belong to and are dropped, matching the original
/// tool's reverse-scan boundary assignment.
pub fn load_multi_episode(path: &Path, offsets: &HashMap<String, i64>) -> anyhow::Result<Vec<Episode>> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("subtitle file {} has no usable file name", path.display()))?;

    tracing::info!("loading episodes from {}", path.display());

    let names = split_episode_names(stem);
    let mut name_offsets = pair_episode_names_and_offsets(&names, offsets)?;
    name_offsets.sort_by_key(|(_, offset)| *offset);

    let subtitles = load_subtitles_file(path)?;

    let mut episodes = Vec::new();
    let mut cursor = name_offsets.len() - 1;
    let mut current = Episode { name: name_offsets[cursor].0.clone(), subtitles: Vec::new() };

    for subtitle in subtitles.into_iter().rev() {
        if subtitle.time_begin_ms < name_offsets[cursor].1 {
            if cursor == 0 {
                break;
            }
            cursor -= 1;
            episodes.push(current);
            current = Episode { name: name_offsets[cursor].0.clone(), subtitles: Vec::new() };
        }

        let offset = name_offsets[cursor].1;
        current.subtitles.insert(
            0,
            Subtitle {
                time_begin_ms: subtitle.time_begin_ms - offset,
                time_end_ms: subtitle.time_end_ms - offset,
                text: subtitle.text,
            },
        );
    }
    episodes.push(current);
    episodes.reverse();

    Ok(episodes)
}

/// Loads every subtitle file in `subtitles_directory` as one or more episodes.
pub fn load_episodes(subtitles_directory: &Path, offsets: &HashMap<String, i64>) -> anyhow::Result<Vec<Episode>> {
    let mut episodes = Vec::new();
    for entry in fs::read_dir(subtitles_directory)
        .map_err(|e| anyhow::anyhow!("reading subtitles directory {}: {e}", subtitles_directory.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            episodes.extend(load_multi_episode(&path, offsets)?);
        }
    }
    Ok(episodes)
}
