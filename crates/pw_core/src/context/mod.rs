//! Per-session random facts
//!
//! A [`SessionContext`] is drawn once when a game starts and never changes.
//! Eight rules read one fact each through a [`ContextKey`]. Callers keep the
//! generated value for the whole session; generating again yields a
//! different puzzle.

pub mod pools;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use pools::*;

/// Which session fact a rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKey {
    Company,
    Captcha,
    Color,
    Moon,
    Country,
    SecretWord,
    Prime,
    Keyword,
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ContextKey::Company => "company",
            ContextKey::Captcha => "captcha",
            ContextKey::Color => "color",
            ContextKey::Moon => "moon",
            ContextKey::Country => "country",
            ContextKey::SecretWord => "secret word",
            ContextKey::Prime => "prime",
            ContextKey::Keyword => "keyword",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub emoji: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub flag: String,
    pub name: String,
}

/// A borrowed view of one session fact, handed to a rule predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFact<'a> {
    Company(&'a str),
    Captcha(&'a str),
    Color(&'a Color),
    Moon(&'a MoonPhase),
    Country(&'a Country),
    SecretWord(&'a str),
    Prime(u32),
    Keyword(&'a str),
}

/// The random facts for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub company: String,
    pub captcha: String,
    pub color: Color,
    pub moon: MoonPhase,
    pub country: Country,
    pub secret_word: String,
    pub prime: u32,
    pub keyword: String,
}

impl SessionContext {
    /// Draw a fresh context from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draw a reproducible context. Same seed, same puzzle.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let (color_name, color_hex) = pick(rng, &COLORS);
        let (moon_emoji, moon_name) = pick(rng, &MOONS);
        let (flag, country_name) = pick(rng, &COUNTRIES);

        let context = Self {
            company: pick(rng, &COMPANIES).to_string(),
            captcha: captcha(rng),
            color: Color { name: color_name.to_string(), hex: color_hex.to_string() },
            moon: MoonPhase { emoji: moon_emoji.to_string(), name: moon_name.to_string() },
            country: Country { flag: flag.to_string(), name: country_name.to_string() },
            secret_word: pick(rng, &SECRET_WORDS).to_string(),
            prime: pick(rng, &PRIMES),
            keyword: pick(rng, &KEYWORDS).to_string(),
        };

        log::debug!(
            "Generated session context: company={} captcha={} prime={}",
            context.company,
            context.captcha,
            context.prime
        );
        context
    }

    /// Resolve the fact a rule asked for.
    pub fn fact(&self, key: ContextKey) -> ContextFact<'_> {
        match key {
            ContextKey::Company => ContextFact::Company(&self.company),
            ContextKey::Captcha => ContextFact::Captcha(&self.captcha),
            ContextKey::Color => ContextFact::Color(&self.color),
            ContextKey::Moon => ContextFact::Moon(&self.moon),
            ContextKey::Country => ContextFact::Country(&self.country),
            ContextKey::SecretWord => ContextFact::SecretWord(&self.secret_word),
            ContextKey::Prime => ContextFact::Prime(self.prime),
            ContextKey::Keyword => ContextFact::Keyword(&self.keyword),
        }
    }

    /// What the UI shows beside the active rule: the moon glyph, the flag,
    /// a color swatch label, or the plain value.
    pub fn hint(&self, key: ContextKey) -> String {
        match key {
            ContextKey::Moon => self.moon.emoji.clone(),
            ContextKey::Country => self.country.flag.clone(),
            ContextKey::Color => format!("\u{25A0} {}", self.color.hex),
            ContextKey::Company => self.company.clone(),
            ContextKey::Captcha => self.captcha.clone(),
            ContextKey::SecretWord => self.secret_word.clone(),
            ContextKey::Prime => self.prime.to_string(),
            ContextKey::Keyword => self.keyword.clone(),
        }
    }
}

fn pick<R: Rng, T: Copy>(rng: &mut R, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}

fn captcha<R: Rng>(rng: &mut R) -> String {
    (0..CAPTCHA_LEN)
        .map(|_| CAPTCHA_ALPHABET[rng.gen_range(0..CAPTCHA_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_context_is_reproducible() {
        assert_eq!(SessionContext::from_seed(7), SessionContext::from_seed(7));
    }

    #[test]
    fn test_values_come_from_pools() {
        for seed in 0..50 {
            let ctx = SessionContext::from_seed(seed);
            assert!(COMPANIES.contains(&ctx.company.as_str()));
            assert!(PRIMES.contains(&ctx.prime));
            assert!(KEYWORDS.contains(&ctx.keyword.as_str()));
            assert!(SECRET_WORDS.contains(&ctx.secret_word.as_str()));
            assert!(COLORS.iter().any(|(n, h)| *n == ctx.color.name && *h == ctx.color.hex));
            assert!(MOONS.iter().any(|(e, n)| *e == ctx.moon.emoji && *n == ctx.moon.name));
            assert!(COUNTRIES.iter().any(|(f, n)| *f == ctx.country.flag && *n == ctx.country.name));
        }
    }

    #[test]
    fn test_captcha_shape() {
        for seed in 0..50 {
            let ctx = SessionContext::from_seed(seed);
            assert_eq!(ctx.captcha.len(), CAPTCHA_LEN);
            assert!(ctx
                .captcha
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_fact_resolution() {
        let ctx = SessionContext::from_seed(1);
        assert_eq!(ctx.fact(ContextKey::Prime), ContextFact::Prime(ctx.prime));
        assert_eq!(ctx.fact(ContextKey::Company), ContextFact::Company(ctx.company.as_str()));
        match ctx.fact(ContextKey::Moon) {
            ContextFact::Moon(m) => assert_eq!(m, &ctx.moon),
            other => panic!("unexpected fact {:?}", other),
        }
    }

    #[test]
    fn test_hint_shows_glyphs() {
        let ctx = SessionContext::from_seed(3);
        assert_eq!(ctx.hint(ContextKey::Moon), ctx.moon.emoji);
        assert_eq!(ctx.hint(ContextKey::Country), ctx.country.flag);
        assert!(ctx.hint(ContextKey::Color).ends_with(&ctx.color.hex));
    }
}
