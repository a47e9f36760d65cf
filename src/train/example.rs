use rand::Rng;

/// One supervised sample: two unary counts and their floored difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub input1: u64,
    pub input2: u64,
    pub target: u64,
}

impl Example {
    pub fn new(input1: u64, input2: u64) -> Example {
        Example {
            input1,
            input2,
            target: input1.saturating_sub(input2),
        }
    }

    /// Draws both inputs independently and uniformly from `[0, max_input]`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, max_input: u64) -> Example {
        let input1 = rng.gen_range(0..=max_input);
        let input2 = rng.gen_range(0..=max_input);
        Example::new(input1, input2)
    }
}
