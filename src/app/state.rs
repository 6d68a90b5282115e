// App state modules extracted from app.rs to keep the update loop readable.

use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::fetch::SpriteMsg;
use crate::api::{ApiError, Pokemon};
use crate::types::SortMode;

#[derive(Default)]
pub struct SearchState {
    /// Live query, mutated on every keystroke; filters locally only.
    pub query: String,
    pub sort: SortMode,
}

pub struct NetState {
    /// Request id; results tagged with an older id are stale and dropped.
    pub counter: u64,
    pub loading: bool,
    pub tx: mpsc::Sender<(u64, Result<Vec<Pokemon>, ApiError>)>,
    pub rx: mpsc::Receiver<(u64, Result<Vec<Pokemon>, ApiError>)>,
    /// The published aggregate: all detail records or nothing.
    pub catalog: Option<Vec<Pokemon>>,
    pub last_error: Option<String>,
}

impl NetState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            counter: 0,
            loading: false,
            tx,
            rx,
            catalog: None,
            last_error: None,
        }
    }
}

pub struct SpritesState {
    pub textures: HashMap<u32, egui::TextureHandle>,
    pub loading: HashSet<u32>,
    /// Failed downloads are not retried automatically; a card-level Retry
    /// removes the id from this set.
    pub failed: HashSet<u32>,
    pub tx: mpsc::Sender<SpriteMsg>,
    pub rx: mpsc::Receiver<SpriteMsg>,
}

impl SpritesState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            textures: HashMap::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
        }
    }
}
