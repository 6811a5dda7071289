use alloc::vec::Vec;
use rand::Rng;

/// Fisher-Yates shuffle of `items` in place.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn output_is_permutation_of_input() {
        let mut rng = SmallRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();

        let mut output = shuffle(&input, &mut rng);

        assert_eq!(input, (0..50).collect::<Vec<_>>());
        assert_eq!(output.len(), input.len());
        output.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn keeps_duplicates() {
        let mut rng = SmallRng::seed_from_u64(1);
        let input = vec!["a", "b", "a", "c", "a"];

        let mut output = shuffle(&input, &mut rng);
        output.sort_unstable();

        assert_eq!(output, vec!["a", "a", "a", "b", "c"]);
    }

    #[test]
    fn trivial_inputs_are_unchanged() {
        let mut rng = SmallRng::seed_from_u64(3);
        let empty: [u8; 0] = [];

        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        const TRIALS: u32 = 6000;
        let mut rng = SmallRng::seed_from_u64(0xB1A60);
        let mut counts: BTreeMap<Vec<u8>, u32> = BTreeMap::new();

        for _ in 0..TRIALS {
            *counts.entry(shuffle(&[1, 2, 3], &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS / 6;
        for (perm, count) in counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "{perm:?} appeared {count} times, expected about {expected}"
            );
        }
    }
}
