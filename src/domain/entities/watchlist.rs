use super::symbol::Symbol;
use serde::Serialize;

/// Static backup pool of known sub-ceiling symbols, in priority order.
/// Used only to top up an undersized watchlist; never mutated.
pub const FALLBACK_POOL: &[(&str, &str)] = &[
    ("2409.TW", "友達"),
    ("3494.TW", "誠研"),
    ("8105.TW", "凌巨"),
    ("2014.TW", "中鴻"),
    ("1314.TW", "中石化"),
    ("2610.TW", "華航"),
    ("2883.TW", "開發金"),
    ("6116.TW", "彩晶"),
    ("3481.TW", "群創"),
    ("2323.TW", "中環"),
];

/// The day's selection: insertion-ordered, deduplicated by code, bounded
/// to a fixed quota. Built fresh each run, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Watchlist {
    quota: usize,
    entries: Vec<Symbol>,
}

impl Watchlist {
    pub fn new(quota: usize) -> Self {
        Self {
            quota,
            entries: Vec::with_capacity(quota),
        }
    }

    /// Appends a symbol unless the list is full or the code is already
    /// present. Returns whether the symbol was accepted.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        if self.is_full() || self.contains_code(&symbol.code) {
            return false;
        }
        self.entries.push(symbol);
        true
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|s| s.code == code)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.quota
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.entries.iter()
    }
}
