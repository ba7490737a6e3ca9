//! Pipeline settings, filled from command line flags.

use clap::ValueEnum;

/// What to do with an expression containing a character outside the token
/// table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidCharPolicy {
    /// The first invalid character stops the whole batch
    #[default]
    AbortBatch,
    /// Drop the offending expression, keep the rest
    SkipExpression,
}

/// Output format of the final results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub invalid_chars: InvalidCharPolicy,
    /// Emit the lexical and syntactic stage reports
    pub show_stages: bool,
    pub output: OutputMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            invalid_chars: InvalidCharPolicy::AbortBatch,
            show_stages: true,
            output: OutputMode::Text,
        }
    }
}

impl PipelineConfig {
    pub fn with_invalid_chars(mut self, policy: InvalidCharPolicy) -> Self {
        self.invalid_chars = policy;
        self
    }

    pub fn with_show_stages(mut self, show: bool) -> Self {
        self.show_stages = show;
        self
    }

    /// Sets the output format. Stage reports are plain text, so JSON output
    /// turns them off.
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        if output == OutputMode::Json {
            self.show_stages = false;
        }
        self
    }
}
