//! The jpackage task: resolve, build arguments, run

use crate::args::{build_arguments, ArgumentList};
use crate::common::HostOs;
use crate::config::PackagingConfig;
use crate::error::JPackageResult;
use crate::manifest::Manifest;
use crate::resolver::Resolver;
use crate::runner::{OutputSink, ProcessResult, ProcessRunner};
use std::path::PathBuf;
use std::sync::Arc;

/// One jpackage invocation
pub struct JPackageTask {
    config: PackagingConfig,
    resolver: Resolver,
    runner: ProcessRunner,
}

impl JPackageTask {
    /// Create a task for `config` with default resolution and stdout relay
    pub fn new(config: PackagingConfig) -> Self {
        Self {
            config,
            resolver: Resolver::new(),
            runner: ProcessRunner::new(),
        }
    }

    /// Create a task from a parsed manifest
    pub fn from_manifest(manifest: Manifest) -> Self {
        let Manifest { jpackage, toolchain } = manifest;
        let mut task = Self::new(jpackage);
        task.resolver = task.resolver.with_toolchain_home_opt(toolchain.home);
        task
    }

    /// Prefer the executable from `home`
    pub fn with_toolchain_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.resolver = self.resolver.with_toolchain_home(home);
        self
    }

    /// Replace the resolver
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Relay child output to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.runner = self.runner.with_sink(sink);
        self
    }

    /// Run jpackage in `dir`
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.runner = self.runner.with_working_dir(dir);
        self
    }

    /// Packaging options
    pub fn config(&self) -> &PackagingConfig {
        &self.config
    }

    /// Host whose platform group is emitted
    pub fn host(&self) -> HostOs {
        self.resolver.host()
    }

    /// Resolve the executable and build the command line without running it
    pub fn command_line(&self) -> JPackageResult<ArgumentList> {
        let executable = self.resolver.resolve()?;
        Ok(build_arguments(&executable, &self.config, self.host()))
    }

    /// Resolve, build and run
    pub fn execute(&self) -> JPackageResult<ProcessResult> {
        let executable = self.resolver.resolve()?;
        let sink = self.runner.sink();
        sink.status(&format!("Using: {}", executable.display()));

        let argv = build_arguments(&executable, &self.config, self.host());
        sink.status("jpackage output:");

        let result = self.runner.run(&argv)?;
        tracing::info!("jpackage finished: {}", self.config.app_name);
        Ok(result)
    }
}

/// Run jpackage for `config` using `JAVA_HOME` and relaying to stdout
pub fn execute(config: &PackagingConfig) -> JPackageResult<ProcessResult> {
    JPackageTask::new(config.clone()).execute()
}
