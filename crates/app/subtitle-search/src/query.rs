/*!
The interactive query loop: for each query string, scores every loaded
subtitle line by k-mismatch distance and writes the surviving matches,
best first.
*/

use std::io::{BufRead, Write};

use kmismatch_engine::{min_kangaroo, Mismatches};

use crate::subtitle::Episode;

/// The mismatch budget beyond which a query is no longer considered a
/// match against a subtitle line: one quarter of the query's length.
fn tolerance(query: &[u8]) -> u32 {
    (query.len() / 4) as u32
}

/// A surviving match against one subtitle line.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    pub episode_name: String,
    pub time_begin_ms: i64,
    pub time_end_ms: i64,
    pub text: String,
    pub mismatches: u32,
}

impl QueryMatch {
    /// `1 - mismatches / 17`, matching the scoring convention the
    /// original tool reserved a mismatch budget of up to 17 for.
    pub fn score(&self) -> f64 {
        1.0 - (self.mismatches as f64) / 17.0
    }
}

/// Scores `query` against every subtitle line of every episode,
/// keeping only alignments within budget, sorted best-first.
///
/// Subtitle text containing the reserved sentinel byte is skipped (and
/// logged) rather than failing the whole query — untrusted subtitle
/// files are exactly the caller this crate's sentinel-validation entry
/// point exists for.
pub fn run_query(episodes: &[Episode], query: &[u8]) -> Vec<QueryMatch> {
    let k = tolerance(query);
    let mut matches = Vec::new();

    for episode in episodes {
        for subtitle in &episode.subtitles {
            let text = subtitle.text.as_bytes();

            if let Err(err) = kmismatch_engine::validate_inputs(query, text) {
                tracing::warn!(
                    "skipping subtitle line in {:?} with reserved sentinel byte: {err}",
                    episode.name
                );
                continue;
            }

            if let Mismatches::Match(mismatches) = min_kangaroo(k, query, text) {
                matches.push(QueryMatch {
                    episode_name: episode.name.clone(),
                    time_begin_ms: subtitle.time_begin_ms,
                    time_end_ms: subtitle.time_end_ms,
                    text: subtitle.text.clone(),
                    mismatches,
                });
            }
        }
    }

    matches.sort_by_key(|m| m.mismatches);
    matches
}

/// Writes the count line followed by one `score / name / timing /
/// text` block per match.
pub fn write_matches(writer: &mut impl Write, matches: &[QueryMatch]) -> std::io::Result<()> {
    writeln!(writer, "{}", matches.len())?;
    for m in matches {
        writeln!(writer, "{}", m.score())?;
        writeln!(writer, "{}", m.episode_name)?;
        writeln!(writer, "{}, {}, {}", m.time_begin_ms, m.time_end_ms, m.text)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Handles one query line end to end.
pub fn handle_query(episodes: &[Episode], query: &str, writer: &mut impl Write) -> std::io::Result<()> {
    let matches = run_query(episodes, query.as_bytes());
    write_matches(writer, &matches)
}

/// Reads queries one per line until EOF, handling each in turn.
pub fn handle_queries(
    episodes: &[Episode],
    reader: impl BufRead,
    writer: &mut impl Write,
) -> std::io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        handle_query(episodes, &line, writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitle::Subtitle;

    fn sample_episodes() -> Vec<Episode> {
        vec![Episode {
            name: "Pilot".to_string(),
            subtitles: vec![
                Subtitle { time_begin_ms: 1000, time_end_ms: 2000, text: "hello there friend".to_string() },
                Subtitle { time_begin_ms: 3000, time_end_ms: 4000, text: "completely unrelated".to_string() },
            ],
        }]
    }

    #[test]
    fn run_query_finds_the_matching_line_and_skips_the_rest() {
        let episodes = sample_episodes();
        let matches = run_query(&episodes, b"hello");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].mismatches, 0);
        assert_eq!(matches[0].episode_name, "Pilot");
    }

    #[test]
    fn write_matches_emits_a_count_line_and_one_block_per_match() {
        let episodes = sample_episodes();
        let matches = run_query(&episodes, b"hello");
        let mut out = Vec::new();
        write_matches(&mut out, &matches).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1"));
        assert_eq!(lines.next(), Some("1"));
        assert_eq!(lines.next(), Some("Pilot"));
        assert_eq!(lines.next(), Some("1000, 2000, hello there friend"));
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn results_are_sorted_best_match_first() {
        let episodes = vec![Episode {
            name: "E".to_string(),
            subtitles: vec![
                Subtitle { time_begin_ms: 0, time_end_ms: 1, text: "xxelloxx".to_string() },
                Subtitle { time_begin_ms: 0, time_end_ms: 1, text: "hello".to_string() },
            ],
        }];
        let matches = run_query(&episodes, b"hello");
        assert!(matches[0].mismatches <= matches.last().unwrap().mismatches);
    }
}
