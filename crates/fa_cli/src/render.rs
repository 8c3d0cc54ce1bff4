//! Plain-text match summary.

use std::fmt::{self, Write};

use fa_core::analysis::events::InterceptionReason;
use fa_core::{AnalysisReport, Rgb};

const TOP_CONNECTIONS: usize = 3;

fn color(c: Option<Rgb>) -> String {
    match c {
        Some([r, g, b]) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        None => "-".to_string(),
    }
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> fmt::Result {
    let stats = &report.statistics;

    writeln!(out, "=== Match Summary ===")?;
    writeln!(
        out,
        "Frames: {} ({:.1}s)  Players: {}  Ball detected: {}",
        report.total_frames,
        report.duration_seconds,
        report.players_detected,
        if report.ball_detected { "yes" } else { "no" }
    )?;
    writeln!(
        out,
        "Team colors: 1 = {}  2 = {}",
        color(report.team_colors.map(|c| c[0])),
        color(report.team_colors.map(|c| c[1]))
    )?;
    writeln!(
        out,
        "Possession: Team 1: {:.1}% | Team 2: {:.1}%  (switches: {})",
        report.possession.get(&1).copied().unwrap_or(0.0),
        report.possession.get(&2).copied().unwrap_or(0.0),
        report.team_switches
    )?;

    writeln!(out, "\n--- Passing ---")?;
    writeln!(
        out,
        "Passes: {} (team 1: {}, team 2: {})",
        stats.total_passes,
        stats.team_pass_count(1),
        stats.team_pass_count(2)
    )?;
    writeln!(
        out,
        "Interceptions: {} (team change: {}, color change: {}, trajectory: {})",
        stats.total_interceptions,
        stats.interceptions_by(InterceptionReason::TeamChange),
        stats.interceptions_by(InterceptionReason::ColorChange),
        stats.interceptions_by(InterceptionReason::ImplausibleTrajectory)
    )?;
    writeln!(out, "Pass accuracy: {:.1}%", stats.pass_accuracy * 100.0)?;
    writeln!(
        out,
        "Possession changes: {} (same team: {}, inter-team: {})  avg color similarity: {:.2}",
        stats.total_possession_changes,
        stats.same_team_changes,
        stats.interteam_changes,
        stats.average_color_similarity
    )?;

    for network in &report.pass_network.teams {
        writeln!(out, "\n--- Team {} network ---", network.team)?;
        let Some(net) = &network.stats else {
            writeln!(out, "No passes")?;
            continue;
        };
        writeln!(
            out,
            "Passes: {}  Connections: {}  Players: {}  Density: {:.2}",
            net.total_passes, net.unique_connections, net.players_involved, net.network_density
        )?;
        if let Some((player, count)) = net.most_active_passer {
            writeln!(out, "Most active passer: #{} ({})", player, count)?;
        }
        let mut edges = network.edges.clone();
        edges.sort_by(|a, b| b.count.cmp(&a.count));
        for edge in edges.iter().take(TOP_CONNECTIONS) {
            writeln!(
                out,
                "  #{} -> #{}: {}",
                edge.from_player, edge.to_player, edge.count
            )?;
        }
    }

    Ok(())
}
