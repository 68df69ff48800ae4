//! Non-interactive dump of the high-score table.

use anyhow::Result;
use chrono::DateTime;
use simon_core::ScoreStore;

/// Print the stored high scores, as a table or as the raw JSON collection.
///
/// Reading seeds the file with starter records when it does not exist yet,
/// so this always has something to show.
pub fn run(store: &ScoreStore, json: bool) -> Result<()> {
    let scores = store.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!("High scores from {}", store.path().display());
    for record in &scores.high_scores {
        let when = if record.achieved() {
            format_moment(record.score_moment)
        } else {
            String::from("-")
        };
        println!(
            "  Mode {}  {:<12}  best {:>4}  {}",
            u8::from(record.mode),
            record.description,
            record.score,
            when
        );
    }
    Ok(())
}

/// Render a stored score moment (unix seconds) as a UTC timestamp.
fn format_moment(moment: f64) -> String {
    let secs = moment.trunc() as i64;
    let nanos = (moment.fract() * 1e9) as u32;
    match DateTime::from_timestamp(secs, nanos) {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::from("-"),
    }
}
