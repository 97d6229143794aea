// Candidate pools the session generator draws from.

pub const COMPANIES: [&str; 5] = ["Nike", "Sony", "Dell", "Apple", "Ford"];

/// (name, hex)
pub const COLORS: [(&str, &str); 5] = [
    ("Pink", "#FFC0CB"),
    ("Teal", "#008080"),
    ("Coral", "#FF7F50"),
    ("Crimson", "#DC143C"),
    ("Lavender", "#E6E6FA"),
];

/// (emoji, name)
pub const MOONS: [(&str, &str); 4] = [
    ("\u{1F311}", "New Moon"),
    ("\u{1F315}", "Full Moon"),
    ("\u{1F313}", "First Quarter"),
    ("\u{1F317}", "Last Quarter"),
];

/// (flag, name)
pub const COUNTRIES: [(&str, &str); 5] = [
    ("\u{1F1EB}\u{1F1F7}", "France"),
    ("\u{1F1E9}\u{1F1EA}", "Germany"),
    ("\u{1F1EF}\u{1F1F5}", "Japan"),
    ("\u{1F1E7}\u{1F1F7}", "Brazil"),
    ("\u{1F1EE}\u{1F1F3}", "India"),
];

pub const SECRET_WORDS: [&str; 5] = ["GHOST", "SPACE", "LIGHT", "FLAME", "WATER"];

pub const PRIMES: [u32; 11] = [17, 23, 31, 47, 53, 67, 71, 79, 83, 89, 97];

pub const KEYWORDS: [&str; 5] = ["REACT", "VITE", "TAILWIND", "TYPESCRIPT", "NEXTJS"];

pub const CAPTCHA_LEN: usize = 6;

pub const CAPTCHA_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
