use crate::dataset;
use crate::model::Electorate;
use crate::reports::{summary, tables, ReportResult};
use colored::Colorize;
use std::path::Path;

fn load(data_path: &Path) -> ReportResult<Electorate> {
    let electorate = dataset::load(data_path)?;
    eprintln!(
        "🗳  Loaded {} states ({} electors) and {} cities, total population {}",
        electorate.states.len().to_string().bright_yellow(),
        electorate.total_electors().to_string().bright_yellow(),
        electorate.cities.len().to_string().bright_yellow(),
        crate::util::format_number(electorate.total_population).bright_green(),
    );
    Ok(electorate)
}

/// Print the full report: both tables and all three summary figures.
pub fn report(data_path: &Path) -> ReportResult<()> {
    let electorate = load(data_path)?;

    println!("{}", "## Largest metro areas".bold());
    println!();
    for row in tables::top_cities(&electorate) {
        println!("{}", row);
    }

    println!();
    println!("{}", "## Fewest states for an elector majority".bold());
    println!();
    for row in tables::minority_win(&electorate) {
        println!("{}", row);
    }

    println!();
    print_minority_win_figures(&electorate)?;
    print_majority_loss_figure(&electorate)?;
    Ok(())
}

/// Print only the metro-area table.
pub fn cities(data_path: &Path) -> ReportResult<()> {
    let electorate = load(data_path)?;
    for row in tables::top_cities(&electorate) {
        println!("{}", row);
    }
    Ok(())
}

/// Print the minority-win table and its two companion figures.
pub fn minority_win(data_path: &Path, json: bool) -> ReportResult<()> {
    let electorate = load(data_path)?;
    if json {
        let (winning, remaining) = summary::minority_win(&electorate)?;
        let doc = serde_json::json!({
            "winning": winning,
            "remaining": remaining,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for row in tables::minority_win(&electorate) {
        println!("{}", row);
    }
    println!();
    print_minority_win_figures(&electorate)
}

/// Print the majority-loss composite figure.
pub fn majority_loss(data_path: &Path, json: bool) -> ReportResult<()> {
    let electorate = load(data_path)?;
    if json {
        let figure = summary::majority_loss(&electorate)?;
        println!("{}", serde_json::to_string_pretty(&figure)?);
        return Ok(());
    }
    print_majority_loss_figure(&electorate)
}

fn print_minority_win_figures(electorate: &Electorate) -> ReportResult<()> {
    let (winning, remaining) = summary::minority_win(electorate)?;
    println!(
        "Minimum voters for an elector majority: {}",
        winning.to_string().bright_cyan()
    );
    println!(
        "Minimum voters to swing the remaining contests: {}",
        remaining.to_string().bright_cyan()
    );
    Ok(())
}

fn print_majority_loss_figure(electorate: &Electorate) -> ReportResult<()> {
    let figure = summary::majority_loss(electorate)?;
    println!(
        "Votes behind an elector win without a popular majority: {}",
        figure.to_string().bright_cyan()
    );
    Ok(())
}
