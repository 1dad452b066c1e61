use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate a random DNA-like text of `length` symbols.
pub fn generate_text(length: usize) -> Vec<u8> {
    let mut random = StdRng::seed_from_u64(length as u64);
    (0 .. length)
        .map(|_| b"ACGT"[random.gen_range(0 .. 4)])
        .collect()
}

/// Take `count` substrings of `length` symbols from random positions in `text`.
pub fn sample_patterns(text: &[u8], count: usize, length: usize) -> Vec<Vec<u8>> {
    let mut random = rand::thread_rng();
    (0 .. count)
        .map(|_| {
            let start = random.gen_range(0 ..= text.len() - length);
            text[start .. start + length].to_vec()
        })
        .collect()
}
