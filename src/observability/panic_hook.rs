//! Structured crash report on panic.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 66;

/// Replace the default panic output with a short report naming the
/// command that was running.
pub fn install_panic_hook(command: &'static str) {
    std::panic::set_hook(Box::new(move |info| {
        print_crash_report(command, info);
    }));
}

fn print_crash_report(command: &str, info: &PanicHookInfo<'_>) {
    let rule = "═".repeat(WIDTH + 12);
    eprintln!();
    eprintln!("{rule}");
    eprintln!("  BIZDOCTOR CRASH REPORT");
    eprintln!("{rule}");
    eprintln!("  Version:  {VERSION}");
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("  Command:  {command}");
    eprintln!("  Panic:    {}", truncate(&panic_message(info), WIDTH));
    if let Some(location) = info.location() {
        let at = format!("{}:{}:{}", location.file(), location.line(), location.column());
        eprintln!("  Location: {}", truncate(&at, WIDTH));
    }
    eprintln!("{rule}");

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for a stack trace");
    }
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
