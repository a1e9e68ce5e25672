//! Renderers for computed standings.

use std::fmt::Write as _;

use league::domain::{PlayerRef, StandingRecord};
use league::CompetitionResults;
use serde::Serialize;

use crate::types::OutputFormat;

/// Flat CSV row shared by player and pair standings.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    id: &'a str,
    name: String,
    total_games: u32,
    wins: u32,
    losses: u32,
    draws: u32,
    score: u32,
    buchudas: u32,
    buchudas_de_re: u32,
    win_rate: String,
}

impl<'a> CsvRow<'a> {
    fn new(kind: &'static str, id: &'a str, name: String, r: &StandingRecord) -> Self {
        Self {
            kind,
            id,
            name,
            total_games: r.total_games,
            wins: r.wins,
            losses: r.losses,
            draws: r.draws,
            score: r.score,
            buchudas: r.buchudas,
            buchudas_de_re: r.buchudas_de_re,
            win_rate: format!("{:.2}", r.win_rate),
        }
    }
}

fn pair_name(a: &PlayerRef, b: &PlayerRef) -> String {
    format!("{} & {}", a.name, b.name)
}

pub fn render(
    results: &CompetitionResults,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)? + "\n"),
        OutputFormat::Csv => render_csv(results),
        OutputFormat::Table => Ok(render_table(results)),
    }
}

fn render_csv(results: &CompetitionResults) -> Result<String, Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &results.players {
        writer.serialize(CsvRow::new(
            "player",
            row.player.id.as_str(),
            row.player.name.clone(),
            &row.record,
        ))?;
    }
    for row in &results.pairs {
        writer.serialize(CsvRow::new(
            "pair",
            row.id.as_str(),
            pair_name(&row.player1, &row.player2),
            &row.record,
        ))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

const HEADER: [&str; 9] = ["#", "Name", "Games", "W", "L", "D", "Pts", "B", "BdR"];

fn table_section(out: &mut String, title: &str, rows: &[(String, &StandingRecord)]) {
    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain([HEADER[1].len()])
        .max()
        .unwrap_or_default();

    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>5}  {:>3}  {:>3}  {:>3}  {:>4}  {:>3}  {:>3}  {:>6}",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4], HEADER[5], HEADER[6], HEADER[7],
        HEADER[8], "Win%"
    );
    for (pos, (name, r)) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>5}  {:>3}  {:>3}  {:>3}  {:>4}  {:>3}  {:>3}  {:>6.1}",
            pos + 1,
            name,
            r.total_games,
            r.wins,
            r.losses,
            r.draws,
            r.score,
            r.buchudas,
            r.buchudas_de_re,
            r.win_rate
        );
    }
}

fn render_table(results: &CompetitionResults) -> String {
    let players: Vec<(String, &StandingRecord)> = results
        .players
        .iter()
        .map(|r| (r.player.name.clone(), &r.record))
        .collect();
    let pairs: Vec<(String, &StandingRecord)> = results
        .pairs
        .iter()
        .map(|r| (pair_name(&r.player1, &r.player2), &r.record))
        .collect();

    let mut out = String::new();
    table_section(&mut out, "Players", &players);
    out.push('\n');
    if pairs.is_empty() {
        out.push_str("Pairs\n  (no finished games)\n");
    } else {
        table_section(&mut out, "Pairs", &pairs);
    }
    out
}
