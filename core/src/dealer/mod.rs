use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait Dealer {
    fn deal(self, words: &WordList, config: BoardConfig) -> Result<Board>;
}

fn check_enough_words(words: &WordList, config: BoardConfig) -> Result<usize> {
    let need = config.required_words();
    if words.len() < need {
        Err(BingoError::NotEnoughWords {
            have: words.len(),
            need: config.total_cells(),
        })
    } else {
        Ok(need)
    }
}
