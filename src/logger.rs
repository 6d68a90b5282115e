// In-app GUI logger: mirrors log records to stderr (opt-in) and keeps a
// bounded buffer for the logs viewport. Warn and above also go to log.txt,
// and a panic hook routes panics through the same pipeline.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

const MAX_LOG_LINES: usize = 5000;

struct LoggerState {
    buffer: VecDeque<LogEntry>,
    file: Option<File>,
}

lazy_static! {
    static ref STATE: Mutex<LoggerState> = Mutex::new(LoggerState {
        buffer: VecDeque::new(),
        file: None,
    });
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("GUI_LOG_STDERR").unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    };
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct DeckLogger;

impl Log for DeckLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::max_level()
            .to_level()
            .map_or(false, |max| metadata.level() <= max)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:>5}] {}: {}",
            timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        );

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        if let Ok(mut st) = STATE.lock() {
            if matches!(record.level(), Level::Warn | Level::Error) {
                if let Some(f) = st.file.as_mut() {
                    let _ = writeln!(f, "{}", line);
                    let _ = f.flush();
                }
            }
            st.buffer.push_back(LogEntry {
                level: record.level(),
                target: record.target().to_string(),
                msg: record.args().to_string(),
            });
            if st.buffer.len() > MAX_LOG_LINES {
                st.buffer.pop_front();
            }
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {
        if let Ok(mut st) = STATE.lock() {
            if let Some(f) = st.file.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger, open log.txt and hook panics.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(DeckLogger));
    log::set_max_level(level_from_env().unwrap_or(LevelFilter::Info));

    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("log.txt")
            .ok();
        if let Ok(mut st) = STATE.lock() {
            st.file = file;
        }
    }

    install_panic_hook();

    log::info!("GUI logger initialized (warn+ persisted to log.txt)");
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    let v = val.to_lowercase();
    for (needle, level) in [
        ("trace", LevelFilter::Trace),
        ("debug", LevelFilter::Debug),
        ("info", LevelFilter::Info),
        ("warn", LevelFilter::Warn),
        ("error", LevelFilter::Error),
        ("off", LevelFilter::Off),
    ] {
        if v.contains(needle) {
            return Some(level);
        }
    }
    None
}

/// Buffered entries at `min_level` severity or above, oldest first.
pub fn filtered(min_level: Level) -> Vec<LogEntry> {
    STATE
        .lock()
        .map(|st| select_entries(st.buffer.iter(), min_level))
        .unwrap_or_default()
}

fn select_entries<'a>(
    entries: impl Iterator<Item = &'a LogEntry>,
    min_level: Level,
) -> Vec<LogEntry> {
    // log::Level orders Error < Warn < Info < Debug < Trace, so "at least
    // as severe" is <=.
    entries.filter(|e| e.level <= min_level).cloned().collect()
}

pub fn get_all() -> Vec<String> {
    if let Ok(st) = STATE.lock() {
        st.buffer
            .iter()
            .map(|e| format!("[{:>5}] {}: {}", e.level, e.target, e.msg))
            .collect()
    } else {
        vec![]
    }
}

pub fn len() -> usize {
    STATE.lock().map(|st| st.buffer.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut st) = STATE.lock() {
        st.buffer.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        log::error!("panic at {loc}: {msg}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Level, msg: &str) -> LogEntry {
        LogEntry {
            level,
            target: "pokedeck".to_string(),
            msg: msg.to_string(),
        }
    }

    #[test]
    fn severity_filter_keeps_level_and_above() {
        let buf = vec![
            entry(Level::Debug, "d"),
            entry(Level::Info, "i"),
            entry(Level::Warn, "w"),
            entry(Level::Error, "e"),
        ];

        let kept = select_entries(buf.iter(), Level::Warn);
        let msgs: Vec<&str> = kept.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(msgs, ["w", "e"]);

        assert_eq!(select_entries(buf.iter(), Level::Trace).len(), 4);
        assert_eq!(select_entries(buf.iter(), Level::Error).len(), 1);
    }
}
