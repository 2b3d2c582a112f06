//! Colorful console output for assertion failures.
//!
//! Provides a custom `tracing` layer that prints failure events emitted by
//! [`LogHandler`](crate::LogHandler), coloring the `Expected:` and
//! `But was:` lines.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "affirm=info";

/// Initializes console output for failure events.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, defaulting to `affirm=info`. Does nothing if another
/// global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AffirmConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats assertion failures with colors.
pub struct AffirmConsoleLayer;

impl<S: Subscriber> Layer<S> for AffirmConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("affirm") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_failure_event(metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    failure: Option<String>,
    expected: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "failure" => self.failure = Some(value.to_string()),
            "expected" => self.expected = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_failure_event(level: &Level, v: &EventVisitor) -> String {
    let Some(failure) = v.failure.as_deref() else {
        return String::new();
    };

    let mut output = format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        format_level(level),
        "[affirm]".bright_cyan(),
        v.message.as_deref().unwrap_or("Assertion failed").white().bold()
    );
    if let Some(expected) = v.expected.as_deref() {
        output.push_str(&format!(" ({})", expected.yellow()));
    }

    for line in failure.lines() {
        output.push('\n');
        output.push_str(&format_failure_line(line));
    }
    output
}

fn format_failure_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with("Expected") {
        line.bright_green().to_string()
    } else if trimmed.starts_with("But was") {
        line.bright_red().to_string()
    } else if trimmed.starts_with("Missing") || trimmed.starts_with("Extra") {
        line.yellow().to_string()
    } else if trimmed.ends_with('^') && trimmed.starts_with('-') {
        line.bright_magenta().to_string()
    } else {
        line.to_string()
    }
}

fn format_level(level: &Level) -> String {
    match *level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => " WARN".yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        _ => "DEBUG".bright_blue().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(failure: &str) -> EventVisitor {
        EventVisitor {
            message: Some("Assertion failed".to_string()),
            failure: Some(failure.to_string()),
            expected: Some("5".to_string()),
        }
    }

    #[test]
    fn test_events_without_failure_are_skipped() {
        let v = EventVisitor::default();
        assert!(format_failure_event(&Level::ERROR, &v).is_empty());
    }

    #[test]
    fn test_failure_lines_follow_header() {
        let output = format_failure_event(
            &Level::WARN,
            &visitor("  Expected: 5\n  But was:  4\n"),
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("[affirm]"));
        assert!(lines[1].contains("Expected: 5"));
        assert!(lines[2].contains("But was:  4"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
