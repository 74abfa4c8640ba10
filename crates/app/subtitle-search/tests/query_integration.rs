use subtitle_search::query::handle_query;
use subtitle_search::subtitle::{Episode, Subtitle};

fn sample_episodes() -> Vec<Episode> {
    vec![
        Episode {
            name: "Pilot".to_string(),
            subtitles: vec![
                Subtitle { time_begin_ms: 1_000, time_end_ms: 2_000, text: "a needle in a haystack".to_string() },
                Subtitle { time_begin_ms: 3_000, time_end_ms: 4_000, text: "nothing relevant here".to_string() },
            ],
        },
        Episode {
            name: "Second Episode".to_string(),
            subtitles: vec![Subtitle {
                time_begin_ms: 500,
                time_end_ms: 1_500,
                text: "a needle in a stack".to_string(),
            }],
        },
    ]
}

#[test]
fn end_to_end_query_reports_best_match_first() {
    let episodes = sample_episodes();
    let mut out = Vec::new();
    handle_query(&episodes, "needle", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    let count: usize = lines.next().unwrap().parse().unwrap();
    assert_eq!(count, 2);

    // Both subtitles contain "needle" exactly; ties keep their original load order.
    assert_eq!(lines.next(), Some("1"));
    assert_eq!(lines.next(), Some("Pilot"));
    assert_eq!(lines.next(), Some("1000, 2000, a needle in a haystack"));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn end_to_end_query_with_no_matches_reports_zero() {
    let episodes = sample_episodes();
    let mut out = Vec::new();
    handle_query(&episodes, "zzzzzzzzzzzz", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "0\n");
}
