//! Placeholder data for seeding collections and filling defaults.

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Linus", "Margaret", "Dennis", "Barbara", "Ken", "Frances", "Edsger",
    "Radia", "Donald", "Katherine", "Niklaus", "Hedy",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Torvalds", "Hamilton", "Ritchie", "Liskov", "Thompson",
    "Allen", "Dijkstra", "Perlman", "Knuth", "Johnson", "Wirth", "Lamarr",
];

const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark", "Wayne", "Soylent", "Vandelay",
    "Cyberdyne",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Labs", "Industries"];

const CATCH_ADJECTIVES: &[&str] = &[
    "Seamless", "Proactive", "Distributed", "Customizable", "Robust", "Intuitive", "Scalable",
];

const CATCH_NOUNS: &[&str] = &[
    "synergy", "paradigm", "middleware", "framework", "throughput", "workforce", "interface",
];

const DEPARTMENTS: &[&str] = &[
    "Electronics", "Computers", "Books", "Garden", "Toys", "Sports", "Clothing", "Music", "Health",
    "Automotive", "Grocery", "Home",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Handcrafted", "Ergonomic", "Rustic", "Sleek", "Refined", "Practical", "Gorgeous", "Small",
];

const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Cotton", "Granite", "Rubber", "Plastic", "Concrete", "Frozen",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Keyboard", "Table", "Shoes", "Gloves", "Towels", "Bike", "Lamp", "Mouse", "Hat",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua",
];

const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random placeholder generator. Reproducible when built from a fixed seed.
#[derive(Debug)]
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `Some(seed)` gives reproducible output, `None` draws from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }

    /// Derive an independent generator, one per collection.
    pub fn fork(&mut self) -> Self {
        Self::seeded(self.rng.random())
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.random();
        uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn boolean(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    pub fn username(&mut self) -> String {
        let n: u16 = self.rng.random_range(1..1000);
        format!(
            "{}.{}{}",
            self.pick(FIRST_NAMES).to_lowercase(),
            self.pick(LAST_NAMES).to_lowercase(),
            n
        )
    }

    pub fn password(&mut self) -> String {
        let len = self.rng.random_range(10..16);
        (0..len)
            .map(|_| PASSWORD_CHARS[self.rng.random_range(0..PASSWORD_CHARS.len())] as char)
            .collect()
    }

    pub fn company_name(&mut self) -> String {
        format!("{} {}", self.pick(COMPANY_PREFIXES), self.pick(COMPANY_SUFFIXES))
    }

    pub fn catch_phrase(&mut self) -> String {
        format!("{} {}", self.pick(CATCH_ADJECTIVES), self.pick(CATCH_NOUNS))
    }

    pub fn department(&mut self) -> String {
        self.pick(DEPARTMENTS).to_string()
    }

    pub fn sentence(&mut self) -> String {
        let len = self.rng.random_range(4..9);
        let words: Vec<&str> = (0..len).map(|_| self.pick(LOREM)).collect();
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    pub fn product_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(PRODUCT_ADJECTIVES),
            self.pick(PRODUCT_MATERIALS),
            self.pick(PRODUCT_NOUNS)
        )
    }

    pub fn product_description(&mut self) -> String {
        format!(
            "The {} {} combines {} design with {} comfort.",
            self.pick(PRODUCT_MATERIALS).to_lowercase(),
            self.pick(PRODUCT_NOUNS).to_lowercase(),
            self.pick(PRODUCT_ADJECTIVES).to_lowercase(),
            self.pick(PRODUCT_ADJECTIVES).to_lowercase()
        )
    }

    pub fn image_url(&mut self) -> String {
        let n: u32 = self.rng.random_range(1..1000);
        format!("https://picsum.photos/seed/{}/640/480", n)
    }

    /// Whole-unit price between 1 and 1000.
    pub fn price(&mut self) -> f64 {
        f64::from(self.rng.random_range(1u32..=1000))
    }

    pub fn stock(&mut self) -> u32 {
        self.rng.random_range(0..=100)
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}
