/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Source of deal seeds: fixed from the command line, or fresh from the browser every time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SeedSource {
    Browser,
    Fixed(u64),
}

impl SeedSource {
    pub(crate) fn from_arg(seed: Option<u64>) -> Self {
        seed.map_or(Self::Browser, Self::Fixed)
    }

    /// Yields the next seed. A fixed source steps forward so redeals still differ.
    pub(crate) fn next_seed(&mut self) -> u64 {
        match self {
            Self::Browser => js_random_seed(),
            Self::Fixed(seed) => {
                let current = *seed;
                *seed = seed.wrapping_add(1);
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_steps_forward() {
        let mut source = SeedSource::from_arg(Some(u64::MAX));

        assert_eq!(source.next_seed(), u64::MAX);
        assert_eq!(source.next_seed(), 0);
    }

    #[test]
    fn missing_seed_uses_browser() {
        assert_eq!(SeedSource::from_arg(None), SeedSource::Browser);
    }
}
