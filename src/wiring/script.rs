//! Replaying wiring scripts through a session.

use log::{info, warn};

use super::palette::WirePalette;
use super::session::WiringSession;
use crate::dsl::{WireDef, WiringAst, WiringStep};
use crate::error::{ChispaError, Result};
use crate::project::ProjectSpec;

/// A scripted wire the session refused.
#[derive(Debug)]
pub struct RejectedWire {
    /// Script line of the `.wire` directive
    pub line: usize,
    pub error: ChispaError,
}

/// What a replay did.
#[derive(Debug, Default)]
pub struct ReplayReport {
    pub created: usize,
    pub rejected: Vec<RejectedWire>,
}

/// Replay each `.wire` as two pin clicks on `session`.
///
/// Pins are resolved against `spec`; an unresolvable pin aborts the replay.
/// Rejected clicks are collected in the report and the replay continues.
pub fn replay(session: &mut WiringSession, spec: &ProjectSpec, script: &WiringAst) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for step in &script.steps {
        match step {
            WiringStep::Color(color) => session.palette_mut().set_current(color.clone()),
            WiringStep::RandomColors(on) => session.palette_mut().set_random(*on),
            WiringStep::Wire(def) => match draw(session, spec, def) {
                Ok(()) => report.created += 1,
                Err(error) if error.is_wiring_rejection() => {
                    warn!("line {}: {}", def.line, error);
                    report.rejected.push(RejectedWire {
                        line: def.line,
                        error,
                    });
                }
                Err(error) => return Err(error),
            },
        }
    }

    info!(
        "replayed wiring for '{}': {} created, {} rejected",
        spec.id,
        report.created,
        report.rejected.len()
    );
    Ok(report)
}

/// Resolve both ends of `def` and click them, with the wire's own color if
/// it has one.
fn draw(session: &mut WiringSession, spec: &ProjectSpec, def: &WireDef) -> Result<()> {
    let from = spec.resolve_pin(&def.from.component, &def.from.pin)?;
    let to = spec.resolve_pin(&def.to.component, &def.to.pin)?;

    let saved = def.color.as_ref().map(|color| {
        let saved = session.palette().clone();
        let mut fixed = WirePalette::new();
        fixed.set_current(color.clone());
        *session.palette_mut() = fixed;
        saved
    });

    let outcome = session
        .click_pin(from)
        .and_then(|_| session.click_pin(to))
        .map(|_| ());

    if let Some(saved) = saved {
        *session.palette_mut() = saved;
    }
    outcome
}
