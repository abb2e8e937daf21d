// Seeded input generators for property-style tests.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[allow(dead_code)]
/// Reproducible name generator: the same seed yields the same inputs.
pub struct NameGen {
    rng: StdRng,
}

#[allow(dead_code)]
impl NameGen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// String of `1..=max_len` characters drawn from `alphabet`.
    pub fn string(&mut self, alphabet: &[u8], max_len: usize) -> String {
        let len = self.rng.gen_range(1..=max_len);
        (0..len)
            .filter_map(|_| alphabet.choose(&mut self.rng).map(|b| *b as char))
            .collect()
    }

    /// camelCase-shaped name built from dictionary-heavy word pieces.
    pub fn camel_name(&mut self) -> String {
        const PIECES: &[&str] = &[
            "id", "Id", "ID", "url", "Url", "http", "Http", "HTTPS", "user", "User", "name",
            "Name", "v2", "Api", "ip", "Ip", "Uid", "Ui", "D", "S", "Json", "xml", "9",
        ];
        let count = self.rng.gen_range(1..=5);
        (0..count)
            .filter_map(|_| PIECES.choose(&mut self.rng).copied())
            .collect()
    }
}

#[allow(dead_code)]
/// Every printable ASCII character.
pub fn printable_ascii() -> Vec<u8> {
    (0x20u8..0x7f).collect()
}

#[allow(dead_code)]
/// ASCII letters and digits.
pub fn alphanumeric_ascii() -> Vec<u8> {
    (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9').collect()
}
