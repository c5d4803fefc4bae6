use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Trace => write!(f, "TRACE"),
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Network,
    Auth,
    Route,
    State,
    UI,
    Other,
}

impl DebugCategory {
    pub const ALL: [DebugCategory; 6] = [
        DebugCategory::Network,
        DebugCategory::Auth,
        DebugCategory::Route,
        DebugCategory::State,
        DebugCategory::UI,
        DebugCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DebugCategory::Network => "Network",
            DebugCategory::Auth => "Auth",
            DebugCategory::Route => "Route",
            DebugCategory::State => "State",
            DebugCategory::UI => "UI",
            DebugCategory::Other => "Other",
        }
    }
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Network => write!(f, "NET"),
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Route => write!(f, "ROUTE"),
            DebugCategory::State => write!(f, "STATE"),
            DebugCategory::UI => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub thread_id: String,
    pub message: String,
    pub context: Option<String>,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context_str = self
            .context
            .as_ref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        write!(
            f,
            "{} [{}] {} {} {}{}",
            self.timestamp, self.level, self.category, self.thread_id, self.message, context_str
        )
    }
}

/// Operator-facing diagnostics: a bounded ring of entries, each one also
/// forwarded to `tracing`. Clones share the same ring.
#[derive(Debug, Clone)]
pub struct DebugLogger {
    entries: Arc<Mutex<VecDeque<DebugEntry>>>,
    max_entries: usize,
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(max_entries.min(1024)))),
            max_entries,
        }
    }

    fn get_thread_name() -> String {
        std::thread::current()
            .name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("TID:{:?}", std::thread::current().id()))
    }

    pub fn log(
        &self,
        level: DebugLevel,
        category: DebugCategory,
        message: impl Into<String>,
        context: Option<String>,
    ) {
        let entry = DebugEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            category,
            thread_id: Self::get_thread_name(),
            message: message.into(),
            context,
        };

        let ctx = entry.context.as_deref().unwrap_or("");
        match level {
            DebugLevel::Trace => tracing::trace!(category = %category, context = ctx, "{}", entry.message),
            DebugLevel::Debug => tracing::debug!(category = %category, context = ctx, "{}", entry.message),
            DebugLevel::Info => tracing::info!(category = %category, context = ctx, "{}", entry.message),
            DebugLevel::Warn => tracing::warn!(category = %category, context = ctx, "{}", entry.message),
            DebugLevel::Error => tracing::error!(category = %category, context = ctx, "{}", entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    pub fn trace(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Trace, category, msg, None);
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg, None);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg, None);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg, None);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg, None);
    }

    pub fn error_ctx(&self, category: DebugCategory, msg: impl Into<String>, ctx: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg, Some(ctx.into()));
    }

    pub fn debug_ctx(&self, category: DebugCategory, msg: impl Into<String>, ctx: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg, Some(ctx.into()));
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_entries_by_category(&self, category: DebugCategory) -> Vec<DebugEntry> {
        self.filtered(|entry| entry.category == category)
    }

    pub fn get_entries_by_level(&self, level: DebugLevel) -> Vec<DebugEntry> {
        self.filtered(|entry| entry.level == level)
    }

    fn filtered(&self, keep: impl Fn(&DebugEntry) -> bool) -> Vec<DebugEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().filter(|entry| keep(entry)).cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }
}
