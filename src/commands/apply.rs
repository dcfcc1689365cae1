//! `flatctl apply`: converge the remote and application.

use anyhow::Result;
use declarative::{NoProgress, ProgressCallback, ReconcileOutcome, ResultSink};
use std::process::ExitCode;

use crate::Context;
use crate::cli::ApplyArgs;
use crate::config;
use crate::progress::ConsoleProgress;
use crate::report::{ConsoleSink, JsonSink};

pub fn run(ctx: &Context, args: ApplyArgs) -> Result<ExitCode> {
    let mut sink: Box<dyn ResultSink> = if args.json {
        Box::new(JsonSink::stdout())
    } else {
        Box::new(ConsoleSink::new(ctx.quiet))
    };
    let mut progress: Box<dyn ProgressCallback> = if args.json || ctx.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ConsoleProgress::new(ctx.verbose > 0))
    };

    let params = match config::resolve(&args.target, args.check) {
        Ok(params) => params,
        Err(e) => {
            let failure = configuration_failure(e);
            sink.report(&failure)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let outcome = super::reconciler(ctx).run_into(&params, progress.as_mut(), sink.as_mut())?;
    Ok(exit_code(&outcome))
}

/// Outcome for parameters that could not be resolved
fn configuration_failure(err: anyhow::Error) -> ReconcileOutcome {
    let error = match err.downcast::<flatkit::Error>() {
        Ok(e) => e,
        Err(other) => flatkit::Error::config(format!("{other:#}")),
    };
    ReconcileOutcome::failed(error.to_failure())
}

fn exit_code(outcome: &ReconcileOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_unreadable_args_file_is_configuration_failure() {
        let outcome =
            configuration_failure(anyhow!("No such file").context("Could not read args.json"));
        let error = outcome.error.unwrap();
        assert!(!outcome.changed);
        assert_eq!(error.message, "Could not read args.json: No such file");
    }

    #[test]
    fn test_library_error_keeps_its_message() {
        let err = flatkit::ReconcileParams::parse("", "", "latest", false).unwrap_err();
        let expected = err.to_string();
        let outcome = configuration_failure(err.into());
        assert_eq!(outcome.error.unwrap().message, expected);
    }
}
