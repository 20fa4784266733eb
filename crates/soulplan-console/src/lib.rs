//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats search and planning
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search and member start/end)
//! - **DEBUG**: One line per finished work unit
//! - **TRACE**: Slot-1 souls pruned before scheduling
//!
//! The default filter is `soulplan_solver=info`; set `RUST_LOG` to change it.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "soulplan_solver=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner to stderr and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SoulConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the last search started.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

// Stdout carries the plan report, so the banner shares stderr with events.
fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = write_banner(&mut stderr);
    let _ = stderr.flush();
}

fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let version_line = format!("soulplan v{} - soul set planner", VERSION);
    writeln!(out, "{}", version_line.bright_cyan().bold())
}

/// A tracing layer that formats planner events with colors.
pub struct SoulConsoleLayer;

impl<S: Subscriber> Layer<S> for SoulConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("soulplan_solver") && !target.starts_with("soulplan::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    member: Option<String>,
    objective: Option<String>,
    combinations: Option<String>,
    error: Option<String>,
    unit: Option<u64>,
    unit_count: Option<u64>,
    threads: Option<u64>,
    scored: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
    remaining: Option<u64>,
    member_count: Option<u64>,
    unsatisfied: Option<u64>,
    value: Option<i64>,
    feasible: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "unit" => self.unit = Some(value),
            "unit_count" => self.unit_count = Some(value),
            "threads" => self.threads = Some(value),
            "scored" => self.scored = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "remaining" => self.remaining = Some(value),
            "member_count" => self.member_count = Some(value),
            "unsatisfied" => self.unsatisfied = Some(value),
            "value" => self.value = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "value" => self.value = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "member" => self.member = Some(value),
            "objective" => self.objective = Some(value),
            "combinations" => self.combinations = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "unit_end" => format_unit_end(v),
        "unit_pruned" => format_unit_pruned(v, level),
        "member_start" => format_member_start(v),
        "member_end" => format_member_end(v),
        "plan_end" => format_plan_end(v),
        "pool_unavailable" => format_pool_unavailable(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let combinations = v.combinations.as_deref().unwrap_or("0");
    let units = v.unit_count.unwrap_or(0);
    let threads = v.threads.unwrap_or(1);

    format!(
        "{} {} Searching │ {} combinations │ {} units │ {} threads │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(combinations).bright_yellow(),
        units.to_formatted_string(&Locale::en).bright_yellow(),
        threads.to_formatted_string(&Locale::en).bright_yellow(),
        v.objective.as_deref().unwrap_or("damage").bright_magenta()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let scored = v.scored.unwrap_or(0);
    let pruned = v.pruned.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} Search complete │ {} │ {} scored │ {} pruned │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        scored.to_formatted_string(&Locale::en).white(),
        pruned.to_formatted_string(&Locale::en).white(),
        format_value(v.value.unwrap_or(0), v.feasible.unwrap_or(false))
    )
}

fn format_unit_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Unit {:>5} │ {:>12} scored │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.unit.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.scored
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        v.value
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_unit_pruned(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Unit {:>5} pruned",
        format_elapsed(),
        "✗".bright_red(),
        v.unit.unwrap_or(0).to_formatted_string(&Locale::en).bright_black()
    )
}

fn format_member_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Finding best souls for {} ({})",
        format_elapsed(),
        "▶".bright_blue(),
        v.member.as_deref().unwrap_or("?").white().bold(),
        v.objective.as_deref().unwrap_or("damage")
    )
}

fn format_member_end(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(false);
    let status = if feasible {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} {} │ {} │ {} souls left",
        format_elapsed(),
        status,
        v.member.as_deref().unwrap_or("?").white().bold(),
        format_value(v.value.unwrap_or(0), feasible),
        v.remaining
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white()
    )
}

fn format_plan_end(v: &EventVisitor) -> String {
    let members = v.member_count.unwrap_or(0);
    let unsatisfied = v.unsatisfied.unwrap_or(0);
    let summary = if unsatisfied == 0 {
        format!("all {} members planned", members)
            .bright_green()
            .bold()
            .to_string()
    } else {
        format!("{} of {} members unsatisfied", unsatisfied, members)
            .bright_red()
            .bold()
            .to_string()
    };

    format!("{} {} {}", format_elapsed(), "■".bright_cyan().bold(), summary)
}

fn format_pool_unavailable(v: &EventVisitor) -> String {
    format!(
        "{} {} Thread pool unavailable, searching on one thread: {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.error.as_deref().unwrap_or("unknown error")
    )
}

fn format_value(value: i64, feasible: bool) -> String {
    if feasible {
        value.to_formatted_string(&Locale::en).bright_green().to_string()
    } else {
        "UNSATISFIED".bright_red().bold().to_string()
    }
}

// Thousands separators for numbers that fit a u128, the raw text otherwise.
fn format_count(count: &str) -> String {
    match count.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => count.to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_one_line() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(VERSION));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count("1234567"), "1,234,567");
        assert_eq!(format_count("n/a"), "n/a");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("step".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_pruned_units_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("unit_pruned".to_string()),
            unit: Some(3),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("pruned"));
    }

    #[test]
    fn test_member_end_marks_unsatisfied() {
        let visitor = EventVisitor {
            event: Some("member_end".to_string()),
            member: Some("onikiri".to_string()),
            feasible: Some(false),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("onikiri"));
        assert!(line.contains("UNSATISFIED"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
