// Tactical advice: position rules, form tips and distribution notes.
//
// Three fixed tables feed one combined list in the order position, form,
// distribution. The recommendation only shows the head of that list.

use crate::analysis::form::Form;
use crate::analysis::stats::{Distribution, StatAnalysis};
use crate::analysis::Analysis;
use crate::player::{Player, Position};

/// Lines carried by the tactical recommendation. The full list stays
/// available on the bundle; this cap is a display limit, not a filter.
pub const TACTICAL_ADVICE_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Position rules
// ---------------------------------------------------------------------------

/// Fires when `attribute` is present and below `threshold`.
struct AttributeRule {
    attribute: &'static str,
    threshold: f64,
    advice: &'static str,
}

const FORWARD_RULES: &[AttributeRule] = &[
    AttributeRule {
        attribute: "shooting",
        threshold: 70.0,
        advice: "Focus on shooting drills to sharpen your finishing in front of goal",
    },
    AttributeRule {
        attribute: "speed",
        threshold: 75.0,
        advice: "Time your runs earlier to beat defenders without relying on raw pace",
    },
    AttributeRule {
        attribute: "positioning",
        threshold: 80.0,
        advice: "Study striker movement in the box to find better scoring positions",
    },
];

const MIDFIELDER_RULES: &[AttributeRule] = &[
    AttributeRule {
        attribute: "passing",
        threshold: 75.0,
        advice: "Practise short passing combinations to keep possession under pressure",
    },
    AttributeRule {
        attribute: "intelligence",
        threshold: 70.0,
        advice: "Scan the pitch before receiving so you can play forward on the first touch",
    },
    AttributeRule {
        attribute: "stamina",
        threshold: 75.0,
        advice: "Build endurance to keep pressing and covering through the full ninety minutes",
    },
];

const DEFENDER_RULES: &[AttributeRule] = &[
    AttributeRule {
        attribute: "defense",
        threshold: 75.0,
        advice: "Work on tackling and marking drills to tighten your one-on-one defending",
    },
    AttributeRule {
        attribute: "speed",
        threshold: 65.0,
        advice: "Hold a deeper line so quicker forwards cannot exploit the space behind you",
    },
    AttributeRule {
        attribute: "intelligence",
        threshold: 70.0,
        advice: "Watch footage of opposing forwards to read their movement earlier",
    },
];

const GOALKEEPER_RULES: &[AttributeRule] = &[
    AttributeRule {
        attribute: "reflexes",
        threshold: 75.0,
        advice: "Add reaction-save sessions to sharpen your reflexes on close-range shots",
    },
    AttributeRule {
        attribute: "positioning",
        threshold: 70.0,
        advice: "Work on angles and starting positions with the goalkeeping coach",
    },
    AttributeRule {
        attribute: "passing",
        threshold: 60.0,
        advice: "Improve your distribution so attacks can start cleanly from the back",
    },
];

fn rules_for(position: &Position) -> &'static [AttributeRule] {
    match position {
        Position::Forward => FORWARD_RULES,
        Position::Midfielder => MIDFIELDER_RULES,
        Position::Defender => DEFENDER_RULES,
        Position::Goalkeeper => GOALKEEPER_RULES,
        Position::Unrecognized(_) => &[],
    }
}

/// Position-specific advice, 0-3 lines. Unrecognized positions get none.
pub fn position_advice(player: &Player) -> Vec<String> {
    rules_for(&player.position)
        .iter()
        .filter(|rule| {
            player
                .stats
                .get(rule.attribute)
                .is_some_and(|value| value < rule.threshold)
        })
        .map(|rule| rule.advice.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Form and distribution
// ---------------------------------------------------------------------------

/// One line of advice for the current form. `Unknown` has no entry, so an
/// empty history adds nothing to the list.
pub fn form_advice(form: Form) -> Option<&'static str> {
    let line = match form {
        Form::Excellent => "You are in top form: demand the ball in decisive moments and keep your routine",
        Form::Good => "Good form: look for one extra decisive action per match to step up",
        Form::Average => "Steady but unremarkable form: simplify your game and master the basics",
        Form::Poor => "Form has dipped: cut out risky actions and rebuild confidence with simple plays",
        Form::Terrible => "Form is a real concern: ask the coach for individual sessions and extra recovery",
        Form::Unknown => return None,
    };
    Some(line)
}

/// One line for a balanced or specialized profile, then one per strength.
pub fn distribution_advice(stat_analysis: &StatAnalysis) -> Vec<String> {
    let mut advice = Vec::new();

    match stat_analysis.distribution {
        Distribution::Balanced => advice.push(
            "Your balanced profile suits a flexible role: offer cover across several positions"
                .to_string(),
        ),
        Distribution::Specialized => advice.push(
            "Lean into your specialist profile: ask for a role built around your best attributes"
                .to_string(),
        ),
        Distribution::HighlySpecialized => {}
    }

    for strength in &stat_analysis.strengths {
        advice.push(format!("Make your {strength} a weapon: shape your game around it"));
    }

    advice
}

// ---------------------------------------------------------------------------
// Combined
// ---------------------------------------------------------------------------

/// Full tactical advice list: position, then form, then distribution.
pub fn generate_tactical_advice(player: &Player, analysis: &Analysis) -> Vec<String> {
    let mut advice = position_advice(player);
    advice.extend(form_advice(analysis.recent_form).map(str::to_string));
    advice.extend(distribution_advice(&analysis.stat_analysis));
    advice
}

/// The first `limit` lines of a combined advice list.
pub fn top_advice(advice: &[String], limit: usize) -> Vec<String> {
    advice.iter().take(limit).cloned().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
