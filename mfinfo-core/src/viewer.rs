// ============================================================================
// mfinfo-core/src/viewer.rs
// ============================================================================
//
// VIEWER SESSION: select -> probe -> format -> render
//
// One call handles one user selection. Each step is an explicit collaborator
// passed in by the caller, so the same flow drives the CLI, tests, or any
// other front end.
//
// FAILURE HANDLING:
// - Nothing selected: logged, surface untouched
// - Probe failure: logged, surface untouched (previous report stays visible)
// - Diagnostic dump failure: logged, report still shown

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use crate::config::ViewerConfig;
use crate::discovery::FileSelector;
use crate::error::{CoreError, CoreResult};
use crate::external::{FfprobeExecutor, ProbedMedia};
use crate::report::{ReportRow, build_report};
use crate::surface::{ReportSurface, render_report};

/// What happened to one selection.
#[derive(Debug)]
pub enum ViewOutcome {
    /// The selector returned no files.
    NothingSelected,
    /// The file was probed and its report rendered.
    Displayed { path: PathBuf, rows: Vec<ReportRow> },
    /// The probe failed; the surface was not changed.
    ProbeFailed { path: PathBuf, error: CoreError },
}

impl ViewOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, ViewOutcome::Displayed { .. })
    }
}

/// Shows the first selected file on `surface`.
///
/// Only errors from the selector itself are returned as `Err`; a probe
/// failure is an expected outcome and reported as
/// [`ViewOutcome::ProbeFailed`].
pub fn show_selected_file<F, P, S>(
    selector: &mut F,
    probe: &P,
    surface: &mut S,
    config: &ViewerConfig,
) -> CoreResult<ViewOutcome>
where
    F: FileSelector + ?Sized,
    P: FfprobeExecutor + ?Sized,
    S: ReportSurface + ?Sized,
{
    let selection = selector.select()?;
    let Some(path) = selection.first().cloned() else {
        log::info!("No video files selected");
        return Ok(ViewOutcome::NothingSelected);
    };
    if selection.len() > 1 {
        log::debug!(
            "{} files selected, showing only {}",
            selection.len(),
            path.display()
        );
    }

    let probed = match probe.probe(&path) {
        Ok(probed) => probed,
        Err(error) => {
            log::error!("Failed to get media info for {}: {}", path.display(), error);
            return Ok(ViewOutcome::ProbeFailed { path, error });
        }
    };

    let rows = build_report(&probed.info);
    render_report(surface, &rows);
    log::debug!("Rendered {} report rows for {}", rows.len(), path.display());

    if config.log_diagnostics {
        log_diagnostics(&probed);
    }

    Ok(ViewOutcome::Displayed { path, rows })
}

fn log_diagnostics(probed: &ProbedMedia) {
    match probed.diagnostic_json() {
        Ok(json) => log::debug!("Probe document:\n{json}"),
        Err(e) => log::error!("Failed to print media info: {e}"),
    }
}
