/// Output layer: console messages, confirmation prompts, error envelopes.
///
/// Silent mode suppresses informational output and answers every prompt with
/// "yes"; errors are still written to stderr so unattended deployments can
/// capture them. `--json` switches both the error channel and the final
/// report to machine-readable envelopes.
use std::io::{BufRead, Write};

use crate::cli::ArgParser;
use crate::enroll::EnrollError;
use crate::types::{EnrollReport, ErrorOutput};

/// Output context passed through the command layer.
pub struct OutputCtx {
    pub silent: bool,
    pub json: bool,
    /// When true, print step timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Derive the context from the parsed switches.
    #[must_use]
    pub fn from_parser(parser: &ArgParser) -> Self {
        Self {
            silent: parser.switch_exists("--silent"),
            json: parser.switch_exists("--json"),
            debug: parser.debug_requested(),
        }
    }

    /// Print an informational message. Suppressed in silent mode.
    pub fn info(&self, message: &str) {
        if !self.silent {
            println!("{message}");
        }
    }

    /// Write an enrollment error to stderr, as text or a JSON envelope.
    pub fn error(&self, err: &EnrollError) {
        write_error(&ErrorOutput::from_enroll_error(err), self.json);
    }

    /// Ask a yes/no question on stdout and read the answer from stdin.
    ///
    /// Silent mode answers "yes" without prompting. A read failure or EOF
    /// counts as "no".
    #[must_use]
    pub fn confirm(&self, question: &str) -> bool {
        if self.silent {
            return true;
        }
        print!("{question} [y/N] ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
    }

    /// Write the final enrollment report. JSON mode always emits it; text
    /// mode stays quiet (the step messages already told the story).
    pub fn report(&self, report: &EnrollReport) {
        if self.json {
            match serde_json::to_string_pretty(report) {
                Ok(s) => println!("{s}"),
                Err(e) => eprintln!("JSON serialization error: {e}"),
            }
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug`
    /// is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

/// Report an error that escaped the command layer.
pub fn write_unhandled(err: &anyhow::Error, json: bool) {
    write_error(&ErrorOutput::unhandled(err), json);
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ArgParser;

    fn ctx_for(args: &[&str]) -> OutputCtx {
        let mut p = ArgParser::new(args.iter().map(|s| (*s).to_owned()).collect());
        p.register_alias("/s", "--silent").unwrap();
        p.parse();
        OutputCtx::from_parser(&p)
    }

    #[test]
    fn context_picks_up_switches() {
        let ctx = ctx_for(&["prog", "/s", "--json", "--debug"]);
        assert!(ctx.silent);
        assert!(ctx.json);
        assert!(ctx.debug);
    }

    #[test]
    fn context_defaults_off() {
        let ctx = ctx_for(&["prog"]);
        assert!(!ctx.silent);
        assert!(!ctx.json);
        assert!(!ctx.debug);
    }

    #[test]
    fn silent_confirm_is_yes() {
        let ctx = ctx_for(&["prog", "--silent"]);
        assert!(ctx.confirm("proceed?"));
    }
}
