use std::time::{Duration, Instant};

use wizard_core::StepId;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionKind {
    /// Moved forward to the next step.
    Advanced,
    /// Advance was refused because the active step is invalid.
    Refused,
    /// Moved back to the previous step.
    Retreated,
    /// Navigation was clamped at the first or last step.
    Stayed,
}

/// One navigation attempt.
#[derive(Debug, Clone)]
pub struct Transition {
    pub kind: TransitionKind,
    /// Step that was active when the attempt was made.
    pub step: StepId,
    pub from: usize,
    pub to: usize,
    pub at: Instant,
}

/// Every navigation attempt made on a wizard, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TransitionLog {
    transitions: Vec<Transition>,
}

impl TransitionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, kind: TransitionKind, step: &StepId, from: usize, to: usize) {
        self.record_at(kind, step, from, to, Instant::now());
    }

    fn record_at(
        &mut self,
        kind: TransitionKind,
        step: &StepId,
        from: usize,
        to: usize,
        at: Instant,
    ) {
        self.transitions.push(Transition {
            kind,
            step: step.clone(),
            from,
            to,
            at,
        });
    }

    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    #[must_use]
    pub fn last(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    #[must_use]
    pub fn count(&self, kind: TransitionKind) -> usize {
        self.transitions.iter().filter(|t| t.kind == kind).count()
    }

    /// Time between the first and the most recent attempt.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => last.at.saturating_duration_since(first.at),
            _ => Duration::ZERO,
        }
    }

    /// Renders the log for display, one attempt per line, each stamped with
    /// the milliseconds since the first attempt.
    #[must_use]
    pub fn summary(&self) -> String {
        let Some(start) = self.transitions.first().map(|t| t.at) else {
            return String::new();
        };
        let mut lines = Vec::new();
        for transition in &self.transitions {
            let offset = transition.at.saturating_duration_since(start).as_millis();
            let marker = match transition.kind {
                TransitionKind::Advanced => "→",
                TransitionKind::Refused => "✗",
                TransitionKind::Retreated => "←",
                TransitionKind::Stayed => "·",
            };
            lines.push(format!(
                "{marker} {} ({} → {}) +{offset}ms",
                transition.step, transition.from, transition.to
            ));
        }
        lines.join("\n")
    }
}
