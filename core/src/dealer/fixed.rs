use super::*;

/// Deals the first words of the list in list order. Useful for replays and deterministic tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedDealer;

impl Dealer for FixedDealer {
    fn deal(self, words: &WordList, config: BoardConfig) -> Result<Board> {
        let need = check_enough_words(words, config)?;
        let dealt = words.as_slice()[..need].to_vec();
        Board::new(config, WordMatrix::new(dealt)).ok_or(BingoError::NotEnoughWords {
            have: words.len(),
            need: config.total_cells(),
        })
    }
}
