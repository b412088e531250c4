//! Compilation of edit requests into filter graphs.
//!
//! Compilation proceeds in strictly ordered stages: effects, trim,
//! duration recomputation, fades. The filters are not commutative;
//! trimming before the speed change would shift which absolute
//! timestamps correspond to the user's selected seconds.

use tracing::debug;

use audiocut_edit::{EditMode, EditRequest, EqBand};

use crate::error::{PipelineError, Result};
use crate::graph::{FilterChain, FilterStage, PipelineDescription, SOURCE_LABEL};

/// Format a time or ratio value for a filter parameter.
///
/// `f64` Display is shortest-roundtrip, so equal inputs always render to
/// equal strings.
fn fmt_f64(value: f64) -> String {
    format!("{value}")
}

/// Expected output duration in seconds for a request.
///
/// Extract keeps the selection; delete keeps the complement. A speed
/// change then scales wall-clock time. This duration sizes fade windows
/// only; it is never applied as a trim cap.
pub fn result_duration(request: &EditRequest) -> f64 {
    let kept = match request.mode {
        EditMode::Extract => request.selection.duration(),
        EditMode::Delete => request.source_duration - request.selection.duration(),
    };
    if request.speed_factor != 1.0 {
        kept / request.speed_factor
    } else {
        kept
    }
}

/// Compile a validated [`EditRequest`] into a [`PipelineDescription`].
///
/// Pure and deterministic: no I/O, and identical requests compile to
/// identical descriptions. Fails only with
/// [`PipelineError::InvalidRequest`] when a structurally malformed
/// request slips past the upstream validator.
pub fn compile(request: &EditRequest) -> Result<PipelineDescription> {
    request
        .validate()
        .map_err(|e| PipelineError::InvalidRequest(e.to_string()))?;

    let duration = result_duration(request);
    if duration <= 0.0 {
        return Err(PipelineError::InvalidRequest(format!(
            "Request produces empty output ({:?} of {}s..{}s from {}s source)",
            request.mode, request.selection.start, request.selection.end, request.source_duration
        )));
    }

    let mut chains = Vec::new();
    let mut current = SOURCE_LABEL.to_string();

    // 1. Effects on the full, untrimmed stream: volume, speed, EQ.
    if let Some(chain) = effects_chain(request, &current) {
        current = chain.output.clone();
        chains.push(chain);
    }

    // 2. Trim, branching on mode.
    let trim_chains = trim_chains(request, &current);
    current = trim_chains
        .last()
        .map(|c| c.output.clone())
        .unwrap_or(current);
    chains.extend(trim_chains);

    // 3 + 4. Fade windows sized from the recomputed duration.
    if let Some(chain) = fade_chain(request, duration, &current) {
        current = chain.output.clone();
        chains.push(chain);
    }

    let description = PipelineDescription {
        chains,
        map: current,
        format: request.output_format,
        result_duration: duration,
    };

    debug!(
        stages = description.total_stages(),
        format = %description.format,
        duration_secs = duration,
        "Compiled edit request"
    );

    Ok(description)
}

/// Build the effects chain, or `None` when every effect sits at its
/// neutral value and the trim stage can consume the source directly.
fn effects_chain(request: &EditRequest, input: &str) -> Option<FilterChain> {
    if !request.has_effects() {
        return None;
    }

    let mut chain = FilterChain::new(input, "fx");

    if request.volume_percent != 100 {
        let gain = f64::from(request.volume_percent) / 100.0;
        chain = chain.stage(FilterStage::new("volume").arg(fmt_f64(gain)));
    }

    if request.speed_factor != 1.0 {
        chain = chain.stage(FilterStage::new("atempo").arg(fmt_f64(request.speed_factor)));
    }

    for band in [EqBand::Bass, EqBand::Mid, EqBand::Treble] {
        let gain = request.eq.gain(band);
        if gain != 0.0 {
            chain = chain.stage(
                FilterStage::new("equalizer")
                    .param("f", band.center_hz().to_string())
                    .param("width_type", "h")
                    .param("width", "200")
                    .param("g", fmt_f64(gain)),
            );
        }
    }

    Some(chain)
}

/// Trim with reset timestamps, producing the `cut` stream.
fn trim_chains(request: &EditRequest, input: &str) -> Vec<FilterChain> {
    let sel = request.selection;
    match request.mode {
        EditMode::Extract => {
            vec![trim_segment(input, "cut", Some(sel.start), Some(sel.end))]
        }
        EditMode::Delete => {
            let head_empty = sel.start == 0.0;
            let tail_empty = sel.end >= request.source_duration;
            match (head_empty, tail_empty) {
                // Selection touches the source start: only the tail survives.
                (true, false) => vec![trim_segment(input, "cut", Some(sel.end), None)],
                // Selection touches the source end: only the head survives.
                (false, true) => vec![trim_segment(input, "cut", Some(0.0), Some(sel.start))],
                (false, false) => {
                    let head = trim_segment(input, "seg_a", Some(0.0), Some(sel.start));
                    let tail = trim_segment(input, "seg_b", Some(sel.end), None);
                    let concat = FilterChain::joining(
                        vec!["seg_a".to_string(), "seg_b".to_string()],
                        "cut",
                    )
                    .stage(
                        FilterStage::new("concat")
                            .param("n", "2")
                            .param("v", "0")
                            .param("a", "1"),
                    );
                    vec![head, tail, concat]
                }
                // Both segments empty means empty output; compile() has
                // already rejected this via the duration check.
                (true, true) => Vec::new(),
            }
        }
    }
}

/// One `atrim` + `asetpts` chain. An omitted end runs to end of stream.
fn trim_segment(input: &str, output: &str, start: Option<f64>, end: Option<f64>) -> FilterChain {
    let mut trim = FilterStage::new("atrim");
    if let Some(start) = start {
        trim = trim.param("start", fmt_f64(start));
    }
    if let Some(end) = end {
        trim = trim.param("end", fmt_f64(end));
    }
    FilterChain::new(input, output)
        .stage(trim)
        .stage(FilterStage::new("asetpts").arg("PTS-STARTPTS"))
}

/// Build the fade chain, or `None` when no fade is enabled.
///
/// Each window is capped at half of the output duration so fade-in and
/// fade-out cannot overlap; on very short outputs they may touch at the
/// midpoint, which is accepted.
fn fade_chain(request: &EditRequest, duration: f64, input: &str) -> Option<FilterChain> {
    if !request.fade.is_active() {
        return None;
    }

    let window = request.fade.duration_secs.min(duration / 2.0);
    let mut chain = FilterChain::new(input, "out");

    if request.fade.fade_in {
        chain = chain.stage(
            FilterStage::new("afade")
                .param("t", "in")
                .param("st", "0")
                .param("d", fmt_f64(window)),
        );
    }
    if request.fade.fade_out {
        let start = (duration - window).max(0.0);
        chain = chain.stage(
            FilterStage::new("afade")
                .param("t", "out")
                .param("st", fmt_f64(start))
                .param("d", fmt_f64(window)),
        );
    }

    Some(chain)
}
