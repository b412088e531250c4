//! Filter graph data model.
//!
//! A [`PipelineDescription`] is an ordered list of filter chains, each
//! reading named input streams and producing a named output stream.
//! Everything is `Vec`-ordered: identical requests must compile to
//! identical descriptions, so no hash-ordered containers appear here.

use serde::{Deserialize, Serialize};

use audiocut_core::OutputFormat;

/// Label of the raw source audio stream.
pub const SOURCE_LABEL: &str = "0:a";

/// A filter parameter (key=value or positional).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParam {
    pub key: Option<String>,
    pub value: String,
}

impl FilterParam {
    /// A key=value parameter.
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    /// A positional parameter.
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }
}

/// A single named filter with ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterStage {
    pub name: String,
    pub params: Vec<FilterParam>,
}

impl FilterStage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a key=value parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(FilterParam::keyed(key, value));
        self
    }

    /// Add a positional parameter.
    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.params.push(FilterParam::positional(value));
        self
    }
}

/// A chain of filters consuming named inputs and producing one output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    pub inputs: Vec<String>,
    pub stages: Vec<FilterStage>,
    pub output: String,
}

impl FilterChain {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            inputs: vec![input.into()],
            stages: Vec::new(),
            output: output.into(),
        }
    }

    /// A chain joining multiple input streams.
    pub fn joining(inputs: Vec<String>, output: impl Into<String>) -> Self {
        Self {
            inputs,
            stages: Vec::new(),
            output: output.into(),
        }
    }

    /// Append a filter stage.
    #[must_use]
    pub fn stage(mut self, stage: FilterStage) -> Self {
        self.stages.push(stage);
        self
    }
}

/// The compiled pipeline: ordered filter chains plus the output codec
/// directive. A pure derived artifact of one [`audiocut_edit::EditRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDescription {
    /// Filter chains in execution order.
    pub chains: Vec<FilterChain>,
    /// Label of the stream to map to the encoder.
    pub map: String,
    /// Output format (codec + flags lookup).
    pub format: OutputFormat,
    /// Expected output duration in seconds. Used to size fade windows
    /// during compilation; carried for callers that report it.
    pub result_duration: f64,
}

impl PipelineDescription {
    /// Total number of filter stages across all chains.
    pub fn total_stages(&self) -> usize {
        self.chains.iter().map(|c| c.stages.len()).sum()
    }

    /// Count stages with the given filter name.
    pub fn stage_count(&self, name: &str) -> usize {
        self.chains
            .iter()
            .flat_map(|c| c.stages.iter())
            .filter(|s| s.name == name)
            .count()
    }

    /// Whether any stage with the given filter name exists.
    pub fn has_stage(&self, name: &str) -> bool {
        self.stage_count(name) > 0
    }

    /// All filter names in order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.chains
            .iter()
            .flat_map(|c| c.stages.iter())
            .map(|s| s.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_builder() {
        let stage = FilterStage::new("equalizer")
            .param("f", "100")
            .param("g", "5");
        assert_eq!(stage.name, "equalizer");
        assert_eq!(stage.params.len(), 2);
        assert_eq!(stage.params[0].key.as_deref(), Some("f"));
    }

    #[test]
    fn test_chain_builder() {
        let chain = FilterChain::new(SOURCE_LABEL, "fx")
            .stage(FilterStage::new("volume").arg("1.5"))
            .stage(FilterStage::new("atempo").arg("2"));
        assert_eq!(chain.inputs, vec![SOURCE_LABEL.to_string()]);
        assert_eq!(chain.output, "fx");
        assert_eq!(chain.stages.len(), 2);
    }

    #[test]
    fn test_stage_queries() {
        let desc = PipelineDescription {
            chains: vec![
                FilterChain::new(SOURCE_LABEL, "cut")
                    .stage(FilterStage::new("atrim").param("start", "10"))
                    .stage(FilterStage::new("asetpts").arg("PTS-STARTPTS")),
            ],
            map: "cut".into(),
            format: OutputFormat::Wav,
            result_duration: 10.0,
        };
        assert_eq!(desc.total_stages(), 2);
        assert!(desc.has_stage("atrim"));
        assert!(!desc.has_stage("concat"));
        assert_eq!(desc.stage_names(), vec!["atrim", "asetpts"]);
    }
}
