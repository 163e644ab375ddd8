use std::fmt;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use srs_core::{due_cards, StateStore, DEFAULT_DUE_LIMIT};

use crate::store::{self, JsonFileStore};

#[derive(Default)]
struct Counts {
    subday: u64,
    day: u64,
    week: u64,
    month: u64,
    quarter: u64,
    year: u64,
    more: u64,
}

impl Counts {
    fn increment_count(&mut self, interval: f64) {
        if interval < 1.0 {
            self.subday += 1;
        } else if interval < 2.0 {
            self.day += 1;
        } else if interval < 7.0 {
            self.week += 1;
        } else if interval < 30.0 {
            self.month += 1;
        } else if interval < 90.0 {
            self.quarter += 1;
        } else if interval < 365.0 {
            self.year += 1;
        } else {
            self.more += 1;
        }
    }

    fn total(&self) -> u64 {
        self.subday + self.day + self.week + self.month + self.quarter + self.year + self.more
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            concat!(
                "Scheduled intervals:\n",
                "  <day     {}\n",
                "  =day     {}\n",
                "  <week    {}\n",
                "  <month   {}\n",
                "  <quarter {}\n",
                "  <year    {}\n",
                "  >=year   {}\n\n",
                "Total: {}"
            ),
            self.subday,
            self.day,
            self.week,
            self.month,
            self.quarter,
            self.year,
            self.more,
            self.total(),
        )
    }
}

/// Prints an interval histogram of the card box plus study statistics.
pub fn stats(path: &Path) -> Result<()> {
    let cards = JsonFileStore::new(path).load();
    let mut counts = Counts::default();
    for card in cards.values() {
        counts.increment_count(card.interval);
    }
    println!("{}", counts);
    println!("Due now: {}", due_cards(&cards, DEFAULT_DUE_LIMIT, Utc::now()).len());

    let study = store::load_stats(&store::stats_path(path));
    if study.total_reviews > 0 {
        println!(
            "Reviews: {} ({:.0}% correct)",
            study.total_reviews,
            study.accuracy() * 100.0
        );
        println!(
            "Day streak: {} (longest {})",
            study.current_streak, study.longest_streak
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn intervals_land_in_the_right_buckets() {
        let mut counts = Counts::default();
        for interval in [0.5, 1.0, 4.0, 10.0, 45.0, 180.0, 400.0] {
            counts.increment_count(interval);
        }
        assert_eq!(counts.subday, 1);
        assert_eq!(counts.day, 1);
        assert_eq!(counts.week, 1);
        assert_eq!(counts.month, 1);
        assert_eq!(counts.quarter, 1);
        assert_eq!(counts.year, 1);
        assert_eq!(counts.more, 1);
        assert_eq!(counts.total(), 7);
    }
}
