//! CSV export for scraped team data.

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::error::Result;
use crate::models::{RosterPlayer, ScheduledGame, SeasonRecord};

/// Write a CSV file through a `.tmp` sibling so the final path only ever
/// holds a complete file.
fn write_atomic(
    path: &Path,
    build: impl FnOnce(&mut Writer<File>) -> Result<()>,
) -> Result<()> {
    let tmp = path.with_extension("tmp");

    let mut writer = Writer::from_path(&tmp)?;
    build(&mut writer)?;
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp, path)?;
    Ok(())
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

/// Write `records.csv`: one row per season, three columns per split.
///
/// Split columns follow first-seen document order across seasons, so the
/// union of splits forms the header even when an old season lacks one.
pub fn write_records(path: &Path, records: &[SeasonRecord]) -> Result<()> {
    let mut split_names: Vec<&str> = Vec::new();
    for record in records {
        for split in &record.splits {
            if !split_names.contains(&split.name.as_str()) {
                split_names.push(&split.name);
            }
        }
    }

    write_atomic(path, |writer| {
        let mut header = vec!["season".to_string()];
        for name in &split_names {
            header.push(format!("{name} (Wins)"));
            header.push(format!("{name} (Losses)"));
            header.push(format!("{name} (Win %)"));
        }
        writer.write_record(&header)?;

        for record in records {
            let mut row = vec![record.season.clone()];
            for name in &split_names {
                match record.splits.iter().find(|s| s.name == *name) {
                    Some(split) => {
                        row.push(split.wins.to_string());
                        row.push(split.losses.to_string());
                        row.push(split.win_pct.to_string());
                    }
                    None => row.extend([String::new(), String::new(), String::new()]),
                }
            }
            writer.write_record(&row)?;
        }
        Ok(())
    })
}

/// Write `schedules.csv`: one row per game across all seasons.
pub fn write_schedules(path: &Path, games: &[ScheduledGame]) -> Result<()> {
    write_atomic(path, |writer| {
        writer.write_record([
            "game_id",
            "year",
            "month",
            "day",
            "day_of_week",
            "date",
            "home_away",
            "opp_rank",
            "opponent",
            "result",
            "pts_for",
            "pts_against",
            "pts_diff",
            "game_time_hh",
            "game_time_mm",
            "attendance",
        ])?;

        for game in games {
            writer.write_record([
                game.game_id(),
                game.year.to_string(),
                game.month.clone(),
                game.day.to_string(),
                game.day_of_week.clone(),
                game.date.clone(),
                game.site.as_str().to_string(),
                optional(&game.opp_rank),
                game.opponent.clone(),
                game.result.map(String::from).unwrap_or_default(),
                optional(&game.pts_for),
                optional(&game.pts_against),
                optional(&game.pts_diff),
                optional(&game.game_time_hh),
                optional(&game.game_time_mm),
                optional(&game.attendance),
            ])?;
        }
        Ok(())
    })
}

/// Write `rosters.csv`: one row per player per season, no index column.
pub fn write_rosters(path: &Path, players: &[RosterPlayer]) -> Result<()> {
    write_atomic(path, |writer| {
        writer.write_record([
            "season",
            "name_last",
            "name_first",
            "number",
            "position",
            "year",
            "height",
            "height_inches",
            "weight",
            "city",
            "state",
            "prev_school",
        ])?;

        for player in players {
            writer.write_record([
                player.season.clone(),
                player.name_last.clone(),
                player.name_first.clone(),
                player.number.clone(),
                player.position.clone(),
                player.class_year.clone(),
                player.height.clone(),
                optional(&player.height_inches),
                optional(&player.weight),
                player.city.clone(),
                player.state.clone(),
                player.prev_school.clone(),
            ])?;
        }
        Ok(())
    })
}
