//! The directory minifier control loop
//!
//! A [`MinifyRun`] discovers every HTML file under its root and minifies each
//! one in place. By default the run is sequential and the first error aborts
//! it: files already handled stay minified, files not yet reached stay
//! untouched. [`RunPolicy`] can opt into per-file isolation, a thread pool, or
//! a dry run.

use crate::content::Minifier;
use crate::entry::{HtmlFile, discover};
use crate::error::{Error, Result};
use crate::processor::{ContentProcessor, FileOutcome};
use crate::stats::{RunStats, StatsSnapshot};
use crate::system::{DryRunSystem, RealSystem, System};
use rayon::prelude::*;
use shrink_config::RunConfig;
use shrink_core::path::RelPath;
use std::path::{Path, PathBuf};

/// What to do when a single file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run on the first error
    #[default]
    FailFast,
    /// Attempt every file, collect failures, report them at the end
    ContinueOnError,
}

/// How files are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// One file at a time, in discovery order
    #[default]
    Sequential,
    /// Files spread over a rayon pool (`None` = rayon's default thread count)
    Parallel {
        /// Worker threads
        jobs: Option<usize>,
    },
}

/// Run policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunPolicy {
    /// Fail-fast or continue
    pub errors: ErrorPolicy,
    /// Sequential or pooled
    pub parallelism: Parallelism,
    /// Minify in memory, never write
    pub dry_run: bool,
}

impl From<&RunConfig> for RunPolicy {
    fn from(config: &RunConfig) -> Self {
        let errors = if config.continue_on_error {
            ErrorPolicy::ContinueOnError
        } else {
            ErrorPolicy::FailFast
        };

        // An explicit job count implies parallel
        let parallelism = match config.jobs {
            Some(jobs) if jobs > 1 => Parallelism::Parallel { jobs: Some(jobs) },
            Some(_) => Parallelism::Sequential,
            None if config.parallel => Parallelism::Parallel { jobs: None },
            None => Parallelism::Sequential,
        };

        Self {
            errors,
            parallelism,
            dry_run: config.dry_run,
        }
    }
}

/// A file that could not be minified in a continue-on-error run
#[derive(Debug)]
pub struct FileFailure {
    /// Failed file relative to the root
    pub rel_path: RelPath,
    /// Why it failed
    pub error: Error,
}

/// Result of a completed run
#[derive(Debug)]
pub struct RunReport {
    /// Minified files in discovery order
    pub outcomes: Vec<FileOutcome>,
    /// Failed files in discovery order (always empty under fail-fast)
    pub failures: Vec<FileFailure>,
    /// Counters at the end of the run
    pub stats: StatsSnapshot,
    /// Whether writes were suppressed
    pub dry_run: bool,
}

impl RunReport {
    /// True when no file failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One minification pass over a directory tree
#[derive(Debug, Clone)]
pub struct MinifyRun {
    root: PathBuf,
    policy: RunPolicy,
}

impl MinifyRun {
    /// Create a fail-fast, sequential run over `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_policy(root, RunPolicy::default())
    }

    /// Create a run with a custom policy
    pub fn with_policy(root: impl Into<PathBuf>, policy: RunPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Root as given by the caller
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Policy this run was built with
    pub fn policy(&self) -> &RunPolicy {
        &self.policy
    }

    /// Run against the real filesystem (or a dry-run recorder)
    ///
    /// # Errors
    ///
    /// Returns the first error under [`ErrorPolicy::FailFast`]. Under
    /// [`ErrorPolicy::ContinueOnError`] only traversal and pool errors are
    /// returned; per-file errors land in [`RunReport::failures`].
    pub fn run<M: Minifier>(&self, processor: &ContentProcessor<M>) -> Result<RunReport> {
        if self.policy.dry_run {
            self.run_with(processor, &DryRunSystem::new())
        } else {
            self.run_with(processor, &RealSystem)
        }
    }

    /// Run with an explicit filesystem backend
    ///
    /// # Errors
    ///
    /// Same as [`MinifyRun::run`].
    pub fn run_with<M: Minifier>(
        &self,
        processor: &ContentProcessor<M>,
        system: &dyn System,
    ) -> Result<RunReport> {
        let files = discover(&self.root)?;
        let stats = RunStats::new();

        let (outcomes, failures) = match self.policy.parallelism {
            Parallelism::Sequential => self.run_sequential(processor, system, &files, &stats)?,
            Parallelism::Parallel { jobs } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs.unwrap_or(0))
                    .build()?;
                pool.install(|| self.run_parallel(processor, system, &files, &stats))?
            }
        };

        let stats = stats.snapshot();
        tracing::debug!(
            files = stats.files,
            failed = stats.failed,
            saved = stats.saved(),
            "Minify run finished"
        );

        Ok(RunReport {
            outcomes,
            failures,
            stats,
            dry_run: self.policy.dry_run,
        })
    }

    fn run_sequential<M: Minifier>(
        &self,
        processor: &ContentProcessor<M>,
        system: &dyn System,
        files: &[HtmlFile],
        stats: &RunStats,
    ) -> Result<(Vec<FileOutcome>, Vec<FileFailure>)> {
        let mut outcomes = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in files {
            match self.minify_one(processor, system, file, stats) {
                Ok(outcome) => outcomes.push(outcome),
                Err(error) => failures.push(self.isolate(file, error)?),
            }
        }

        Ok((outcomes, failures))
    }

    fn run_parallel<M: Minifier>(
        &self,
        processor: &ContentProcessor<M>,
        system: &dyn System,
        files: &[HtmlFile],
        stats: &RunStats,
    ) -> Result<(Vec<FileOutcome>, Vec<FileFailure>)> {
        if self.policy.errors == ErrorPolicy::FailFast {
            // Collecting into Result stops handing out work after the first error
            let outcomes = files
                .par_iter()
                .map(|file| self.minify_one(processor, system, file, stats))
                .collect::<Result<Vec<_>>>()?;
            return Ok((outcomes, Vec::new()));
        }

        let results: Vec<(&HtmlFile, Result<FileOutcome>)> = files
            .par_iter()
            .map(|file| (file, self.minify_one(processor, system, file, stats)))
            .collect();

        let mut outcomes = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (file, result) in results {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(error) => failures.push(self.isolate(file, error)?),
            }
        }

        Ok((outcomes, failures))
    }

    fn minify_one<M: Minifier>(
        &self,
        processor: &ContentProcessor<M>,
        system: &dyn System,
        file: &HtmlFile,
        stats: &RunStats,
    ) -> Result<FileOutcome> {
        tracing::info!("Minifying {}", self.display_path(file).display());

        match processor.process_file(system, file) {
            Ok(outcome) => {
                stats.record_file(outcome.bytes_before, outcome.bytes_after);
                tracing::debug!(
                    path = %outcome.rel_path,
                    before = outcome.bytes_before,
                    after = outcome.bytes_after,
                    "Minified"
                );
                Ok(outcome)
            }
            Err(error) => {
                stats.inc_failed();
                Err(error)
            }
        }
    }

    /// Turn a per-file error into a recorded failure, or propagate it
    fn isolate(&self, file: &HtmlFile, error: Error) -> Result<FileFailure> {
        if self.policy.errors == ErrorPolicy::FailFast || !error.is_per_file() {
            return Err(error);
        }

        tracing::warn!("Skipping {}: {}", self.display_path(file).display(), error);
        Ok(FileFailure {
            rel_path: file.rel_path.clone(),
            error,
        })
    }

    /// Path as the user would write it: configured root joined with the relative path
    fn display_path(&self, file: &HtmlFile) -> PathBuf {
        self.root.join(file.rel_path.as_path())
    }
}
