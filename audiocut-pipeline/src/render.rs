//! Rendering a [`PipelineDescription`] into engine syntax.
//!
//! Kept separate from compilation so the compiler stays free of
//! syntax-construction concerns (label brackets, separators). This module
//! produces the ffmpeg-style `filter_complex` text and argument list that
//! wasm and subprocess engines consume.

use std::fmt::Write;

use crate::graph::{FilterChain, FilterStage, PipelineDescription, SOURCE_LABEL};

/// Render one filter stage: `name=p1:p2:key=value`.
fn render_stage(out: &mut String, stage: &FilterStage) {
    out.push_str(&stage.name);
    for (i, param) in stage.params.iter().enumerate() {
        out.push(if i == 0 { '=' } else { ':' });
        if let Some(key) = &param.key {
            out.push_str(key);
            out.push('=');
        }
        out.push_str(&param.value);
    }
}

/// Render one chain: `[in1][in2]f1=..,f2=..[out]`.
fn render_chain(out: &mut String, chain: &FilterChain) {
    for input in &chain.inputs {
        let _ = write!(out, "[{input}]");
    }
    for (i, stage) in chain.stages.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        render_stage(out, stage);
    }
    let _ = write!(out, "[{}]", chain.output);
}

/// Render the full filter graph. Chains are joined with semicolons and
/// the result carries no trailing separator.
pub fn filter_complex(description: &PipelineDescription) -> String {
    let mut out = String::new();
    for (i, chain) in description.chains.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        render_chain(&mut out, chain);
    }
    out
}

/// Build the complete engine argument list for a compiled pipeline.
///
/// Produces `-i <input> [-filter_complex <graph> -map [label]] -c:a
/// <codec> [format flags] <output>`.
pub fn engine_args(description: &PipelineDescription, input: &str, output: &str) -> Vec<String> {
    let mut args = vec!["-i".to_string(), input.to_string()];

    let graph = filter_complex(description);
    if !graph.is_empty() {
        args.push("-filter_complex".to_string());
        args.push(graph);
        if description.map != SOURCE_LABEL {
            args.push("-map".to_string());
            args.push(format!("[{}]", description.map));
        }
    }

    args.push("-c:a".to_string());
    args.push(description.format.codec().to_string());

    for (flag, value) in description.format.encoder_flags() {
        args.push((*flag).to_string());
        args.push((*value).to_string());
    }

    args.push(output.to_string());
    args
}

/// Default output file name for a pipeline: `output_processed.<ext>`.
pub fn default_output_name(description: &PipelineDescription) -> String {
    format!("output_processed.{}", description.format.extension())
}
