use fluent::FluentValue;

use crate::coach_summary::findings::Finding;
use crate::coach_summary::load::LoadLevel;
use crate::localization::Localizer;

fn joined_labels(findings: &[Finding], localizer: &Localizer) -> String {
    findings
        .iter()
        .map(|f| localizer.text(f.code.label_key()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One paragraph: load, squad usage, then strength and weakness labels when
/// any were detected.
pub fn compose_narrative(
    load_level: LoadLevel,
    players_used: usize,
    strengths: &[Finding],
    weaknesses: &[Finding],
    localizer: &Localizer,
) -> String {
    let mut sentences = vec![
        localizer.text(load_level.narrative_key()),
        localizer.format("narrative-players-used", &[("count", FluentValue::from(players_used))]),
    ];

    if !strengths.is_empty() {
        let labels = joined_labels(strengths, localizer);
        sentences.push(localizer.format("narrative-strengths", &[("labels", FluentValue::from(labels))]));
    }

    if !weaknesses.is_empty() {
        let labels = joined_labels(weaknesses, localizer);
        sentences.push(localizer.format("narrative-weaknesses", &[("labels", FluentValue::from(labels))]));
    }

    sentences.join(" ")
}
