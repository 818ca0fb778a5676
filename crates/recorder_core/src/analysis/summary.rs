use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Event, Phase, ShotOutcome, Zone};

/// Aggregated statistics for a recorded event list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EventSummary {
    pub total_events: usize,
    pub shots: usize,
    pub goals: usize,
    /// Goals and saved shots
    pub shots_on_target: usize,
    pub passes: usize,
    pub completed_passes: usize,
    /// completed / attempted, 0.0 without passes
    pub pass_completion_rate: f64,
    pub defensive_actions: usize,
    pub successful_defensive_actions: usize,
    pub total_xg: f64,
    pub total_xa: f64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub by_phase: BTreeMap<Phase, usize>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub by_zone: BTreeMap<Zone, usize>,
}

impl EventSummary {
    pub fn from_events(events: &[Event]) -> Self {
        let mut summary = Self { total_events: events.len(), ..Default::default() };

        for event in events {
            *summary.by_phase.entry(event.phase()).or_insert(0) += 1;
            *summary.by_zone.entry(event.zone()).or_insert(0) += 1;

            match event {
                Event::Shot(shot) => {
                    summary.shots += 1;
                    summary.total_xg += shot.xg;
                    if shot.outcome == ShotOutcome::Goal {
                        summary.goals += 1;
                    }
                    if shot.outcome.is_on_target() {
                        summary.shots_on_target += 1;
                    }
                }
                Event::Pass(pass) => {
                    summary.passes += 1;
                    summary.total_xa += pass.xa;
                    if pass.completed {
                        summary.completed_passes += 1;
                    }
                }
                Event::Defensive(def) => {
                    summary.defensive_actions += 1;
                    if def.success {
                        summary.successful_defensive_actions += 1;
                    }
                }
            }
        }

        if summary.passes > 0 {
            summary.pass_completion_rate = summary.completed_passes as f64 / summary.passes as f64;
        }
        summary
    }

    /// Goals minus xG; positive means finishing above expectation
    pub fn finishing_delta(&self) -> f64 {
        self.goals as f64 - self.total_xg
    }
}
