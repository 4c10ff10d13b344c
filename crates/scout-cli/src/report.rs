// Plain-text rendering of analysis results for terminal output.

use std::fmt::Write;

use scout_core::analysis::Analysis;
use scout_core::recommend::{Recommendation, RecommendationBundle, RecommendationPayload};
use scout_core::Player;

/// Header block shared by both subcommands.
fn write_header(out: &mut String, player: &Player, analysis: &Analysis) {
    let _ = writeln!(
        out,
        "{} ({}, age {}), season {} week {}",
        player.display_name(),
        player.position,
        player.age,
        analysis.season,
        analysis.week_in_season
    );
    let _ = writeln!(out, "  Overall rating:  {}", analysis.overall_rating);
    let _ = writeln!(
        out,
        "  Potential:       {} (+{} remaining, likelihood {:.0}%)",
        analysis.development_potential.ceiling,
        analysis.development_potential.remaining,
        analysis.development_potential.likelihood * 100.0
    );
    let _ = writeln!(out, "  Market position: {}", analysis.market_position.label());
    let _ = writeln!(out, "  Injury risk:     {:.0}%", analysis.injury_risk * 100.0);
    let _ = writeln!(
        out,
        "  Team fit:        {:.2}{}",
        analysis.team_fit,
        if analysis.team_fit_source.is_stub() {
            " (estimate)"
        } else {
            ""
        }
    );
}

/// Rating summary without the advisors.
pub fn render_rating(player: &Player, analysis: &Analysis) -> String {
    let mut out = String::new();
    write_header(&mut out, player, analysis);
    out
}

/// Full report: analysis summary, then each recommendation in order.
pub fn render_bundle(player: &Player, bundle: &RecommendationBundle) -> String {
    let analysis = &bundle.analysis;
    let mut out = String::new();

    write_header(&mut out, player, analysis);
    let _ = writeln!(
        out,
        "  Recent form:     {} ({} of {} matches, {} goals, {} assists)",
        analysis.recent_form.label(),
        analysis.recent_output.matches,
        analysis.total_matches,
        analysis.recent_output.goals,
        analysis.recent_output.assists
    );
    let _ = writeln!(
        out,
        "  Profile:         {} (average {:.1})",
        analysis.stat_analysis.distribution.label(),
        analysis.stat_analysis.average
    );

    for rec in &bundle.recommendations {
        out.push('\n');
        write_recommendation(&mut out, rec);
    }

    out
}

fn write_recommendation(out: &mut String, rec: &Recommendation) {
    let _ = writeln!(out, "[{}] {}", rec.priority.label(), rec.title);
    let _ = writeln!(out, "  {}", rec.description);

    match &rec.payload {
        RecommendationPayload::Tactical { advice } => {
            for line in advice {
                let _ = writeln!(out, "  - {line}");
            }
        }
        RecommendationPayload::Training { plan } => {
            for entry in plan {
                let _ = writeln!(
                    out,
                    "  - {} ({}, {}, {}): {}",
                    entry.focus,
                    entry.intensity.label(),
                    entry.frequency,
                    entry.duration,
                    entry.reason
                );
            }
        }
        RecommendationPayload::Career { guidance } => {
            for goal in &guidance.goals {
                let _ = writeln!(out, "  - {goal}");
            }
            let _ = writeln!(out, "  Short term:  {}", guidance.pathway.short_term);
            let _ = writeln!(out, "  Medium term: {}", guidance.pathway.medium_term);
            let _ = writeln!(out, "  Long term:   {}", guidance.pathway.long_term);
        }
        RecommendationPayload::Transfer { advice } => {
            let _ = writeln!(out, "  Timing: {}", advice.timing.label());
            for reason in &advice.reasons {
                let _ = writeln!(out, "  - {reason}");
            }
            let tiers: Vec<&str> = advice.suggested_team_types.iter().map(|t| t.label()).collect();
            let _ = writeln!(out, "  Targets: {}", tiers.join("; "));
        }
    }
}
