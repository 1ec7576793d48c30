//! Run orchestration: sources in, reports out

use log::debug;

use super::commands::InputSource;
use crate::core::{count_source, DirectoryWalker, IgnoreSet, LineSource, PathSource};
use crate::error::{handle_error, Result};
use crate::models::config::Settings;
use crate::models::report::Report;
use crate::output::{create_formatter, Formatter, OutputWriter, ProgressReporter};

/// Drives each source through counting and hands reports to the writer
pub struct Runner<'a> {
    settings: &'a Settings,
    formatter: Box<dyn Formatter>,
    progress: ProgressReporter,
    writer: &'a mut dyn OutputWriter,
    reports: Vec<Report>,
}

impl<'a> Runner<'a> {
    pub fn new(settings: &'a Settings, writer: &'a mut dyn OutputWriter, progress: ProgressReporter) -> Self {
        Self {
            settings,
            formatter: create_formatter(settings.format),
            progress,
            writer,
            reports: Vec::new(),
        }
    }

    /// Count one source and emit its report
    ///
    /// Streaming formats write the report right away; the others keep it
    /// for [`Runner::finish`].
    pub fn process(&mut self, source: &mut dyn PathSource) -> Result<()> {
        self.progress.start(&source.start_message());

        let progress = &self.progress;
        let report = count_source(source, self.settings, |seen| progress.update(seen));

        self.progress.finish(&format!(
            "{} files counted in {}",
            report.total, report.label
        ));

        if self.formatter.streams() {
            let text = self.formatter.format(std::slice::from_ref(&report))?;
            self.writer.write(&text)?;
        }

        self.reports.push(report);
        Ok(())
    }

    /// Write the single document of non-streaming formats
    pub fn finish(self) -> Result<Vec<Report>> {
        if !self.formatter.streams() {
            let document = self.formatter.format(&self.reports)?;
            self.writer.write(&document)?;
        }

        debug!("{} report(s) written", self.reports.len());
        Ok(self.reports)
    }
}

/// Count every source of `input` and write the reports
pub fn run(settings: &Settings, input: &InputSource, writer: &mut dyn OutputWriter) -> Result<Vec<Report>> {
    run_with_progress(settings, input, writer, ProgressReporter::new(settings))
}

/// Same as [`run`] with an explicit progress reporter
pub fn run_with_progress(
    settings: &Settings,
    input: &InputSource,
    writer: &mut dyn OutputWriter,
    progress: ProgressReporter,
) -> Result<Vec<Report>> {
    let ignore = IgnoreSet::new(&settings.ignore)?;
    let mut runner = Runner::new(settings, writer, progress);

    match input {
        InputSource::Directories(roots) => {
            for root in roots {
                let mut walker = DirectoryWalker::new(root, settings, &ignore);
                runner.process(&mut walker)?;
            }
        }
        InputSource::Stdin => {
            runner.process(&mut LineSource::stdin())?;
        }
        InputSource::Listings(listings) => {
            for listing in listings {
                match LineSource::listing(listing) {
                    Ok(mut source) => runner.process(&mut source)?,
                    Err(err) => {
                        if let Some(critical) = handle_error(err) {
                            return Err(critical);
                        }
                    }
                }
            }
        }
    }

    runner.finish()
}
