use super::*;
use alloc::vec::Vec;

/// Deals a uniformly random selection of words in random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDealer {
    seed: u64,
}

impl RandomDealer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Dealer for RandomDealer {
    fn deal(self, words: &WordList, config: BoardConfig) -> Result<Board> {
        use rand::prelude::*;

        let need = check_enough_words(words, config)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut dealt: Vec<_> = shuffle(words.as_slice(), &mut rng);
        dealt.truncate(need);

        log::debug!("Dealt {} of {} words with seed {}", need, words.len(), self.seed);
        Board::new(config, WordMatrix::new(dealt)).ok_or(BingoError::NotEnoughWords {
            have: words.len(),
            need: config.total_cells(),
        })
    }
}
