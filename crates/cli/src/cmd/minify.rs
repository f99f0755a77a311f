//! Minify command implementation
//!
//! Rewrite every HTML file under the root with its minified form.

use clap::Args;
use shrink_config::Config;
use shrink_engine::adapters::create_processor;
use shrink_engine::{MinifyRun, RunPolicy, RunReport};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Minify command
#[derive(Debug, Default, Clone, Args)]
pub struct MinifyCommand {
    /// Keep going after a file fails and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,

    /// Minify on N worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Show what would be minified without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep HTML comments
    #[arg(long)]
    pub keep_comments: bool,

    /// Keep quotes around attribute values
    #[arg(long)]
    pub keep_quotes: bool,

    /// Keep spaces between attributes
    #[arg(long)]
    pub keep_attribute_spaces: bool,

    /// Keep one space between inline elements where it affects rendering
    #[arg(long)]
    pub keep_inline_space: bool,
}

impl MinifyCommand {
    /// Layer command-line flags over the loaded configuration
    ///
    /// Flags only ever switch behavior on or off relative to the file; an
    /// absent flag leaves the configured value alone.
    pub fn apply_to(&self, config: &mut Config) {
        if self.keep_going {
            config.run.continue_on_error = true;
        }
        if self.dry_run {
            config.run.dry_run = true;
        }
        match self.jobs {
            Some(0) => {
                config.run.parallel = true;
                config.run.jobs = None;
            }
            Some(jobs) => {
                config.run.parallel = jobs > 1;
                config.run.jobs = Some(jobs);
            }
            None => {}
        }

        if self.keep_comments {
            config.minify.remove_comments = false;
        }
        if self.keep_quotes {
            config.minify.remove_optional_attribute_quotes = false;
        }
        if self.keep_attribute_spaces {
            config.minify.remove_empty_space = false;
        }
        if self.keep_inline_space {
            config.minify.remove_all_empty_space = false;
        }
    }
}

impl Command for MinifyCommand {
    type Output = RunReport;

    fn execute(&self, context: &RuntimeContext) -> Result<RunReport> {
        let config = &context.config;
        let policy = RunPolicy::from(&config.run);
        let processor = create_processor(config.minify);

        tracing::debug!(
            root = %context.root().display(),
            ?policy,
            options = ?processor.options(),
            "Starting minify run"
        );

        let report = MinifyRun::with_policy(context.root(), policy).run(&processor)?;
        Ok(report)
    }
}
