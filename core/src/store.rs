use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Persisted flag telling whether a board is currently dealt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameStarted(pub bool);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    /// Words are being entered, no board is dealt.
    #[default]
    Collecting,
    Playing(Board),
}

impl GameState {
    pub const fn is_playing(&self) -> bool {
        matches!(self, Self::Playing(_))
    }

    pub const fn board(&self) -> Option<&Board> {
        match self {
            Self::Collecting => None,
            Self::Playing(board) => Some(board),
        }
    }
}

/// Owns the word list and the current game, mirroring every confirmed change into `S`.
#[derive(Debug)]
pub struct GameStore<S> {
    config: BoardConfig,
    words: WordList,
    state: GameState,
    storage: S,
}

impl GameStore<MemoryStorage> {
    /// A store that keeps nothing past its own lifetime.
    pub fn in_memory(config: BoardConfig) -> Self {
        Self::open(MemoryStorage::new(), config)
    }
}

impl<S: Storage> GameStore<S> {
    /// Rehydrates the store from `storage`. Missing, malformed or inconsistent fields fall back to their defaults.
    pub fn open(storage: S, config: BoardConfig) -> Self {
        let stored_words: WordList = storage.load_or_default();
        let words: WordList = stored_words.iter().collect();
        if words.len() != stored_words.len() {
            log::warn!(
                "Dropped {} empty or duplicate stored words",
                stored_words.len() - words.len()
            );
        }

        let GameStarted(started) = storage.load_or_default();
        let matrix: WordMatrix = storage.load_or_default();
        let marks: MarkedSet = storage.load_or_default();

        let state = if started {
            match Board::from_parts(config, matrix, marks) {
                Some(board) => GameState::Playing(board),
                None => {
                    log::warn!("Stored board does not fit a {:?} grid, back to collecting", config);
                    GameState::Collecting
                }
            }
        } else {
            if !matrix.is_empty() || !marks.is_empty() {
                log::warn!("Discarding stored board of a game that was not started");
            }
            GameState::Collecting
        };

        log::debug!(
            "Store opened with {} words, playing: {}",
            words.len(),
            state.is_playing()
        );
        Self {
            config,
            words,
            state,
            storage,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.state.board()
    }

    pub fn is_started(&self) -> bool {
        self.state.is_playing()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn can_add(&self, word: &str) -> bool {
        self.words.can_add(word)
    }

    /// Whether [`Self::start_game`] would deal a board.
    pub fn can_start(&self) -> bool {
        !self.is_started() && self.words.len() >= self.config.required_words()
    }

    pub fn add_word(&mut self, word: impl Into<String>) -> Result<()> {
        self.words.try_add(word)?;
        log::debug!("word added, {} total", self.words.len());
        self.storage.save(&self.words);
        Ok(())
    }

    pub fn reset_words(&mut self) -> ResetOutcome {
        let outcome = self.words.clear();
        if outcome.has_update() {
            log::debug!("word list reset");
            self.storage.save(&self.words);
        }
        outcome
    }

    pub fn start_game(&mut self, dealer: impl Dealer) -> Result<()> {
        if self.is_started() {
            return Err(BingoError::AlreadyPlaying);
        }
        let board = dealer.deal(&self.words, self.config)?;
        self.state = GameState::Playing(board);
        log::debug!("game started");
        self.save_board();
        self.storage.save(&GameStarted(true));
        Ok(())
    }

    pub fn toggle_mark(&mut self, index: usize) -> Result<MarkOutcome> {
        let GameState::Playing(board) = &mut self.state else {
            return Err(BingoError::NotPlaying);
        };
        let outcome = board.toggle_mark(index)?;
        log::trace!("cell {} now {:?}", index, outcome);
        self.storage.save(board.marks());
        Ok(outcome)
    }

    /// Clears the marks and deals a new board from the unchanged word list. The marks stay cleared even when the
    /// word list has shrunk below what a deal needs.
    pub fn restart_same_words(&mut self, dealer: impl Dealer) -> Result<()> {
        let GameState::Playing(board) = &mut self.state else {
            return Err(BingoError::NotPlaying);
        };
        if !board.marks().is_empty() {
            board.clear_marks();
            self.storage.save(board.marks());
        }

        let board = dealer.deal(&self.words, self.config)?;
        self.state = GameState::Playing(board);
        log::debug!("game redealt");
        self.save_board();
        Ok(())
    }

    /// Drops the board and the word list, going back to collecting words.
    pub fn restart_new_words(&mut self) -> ResetOutcome {
        let was_playing = self.is_started();
        let words_cleared = self.words.clear().has_update();
        self.state = GameState::Collecting;

        if !was_playing && !words_cleared {
            return ResetOutcome::NoChange;
        }

        log::debug!("game reset with new words");
        self.save_board();
        self.storage.save(&self.words);
        self.storage.save(&GameStarted(false));
        ResetOutcome::Cleared
    }

    fn save_board(&mut self) {
        let Self { state, storage, .. } = self;
        match state {
            GameState::Playing(board) => {
                storage.save(board.marks());
                storage.save(board.matrix());
            }
            GameState::Collecting => {
                storage.save(&MarkedSet::new());
                storage.save(&WordMatrix::default());
            }
        }
    }
}
