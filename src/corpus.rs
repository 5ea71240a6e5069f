//! Static text tables for the typing game
//!
//! Three corpora indexed by difficulty tier: short hacker-flavored tokens,
//! full sentences, and raw code/shell snippets. Generation draws from a
//! caller-supplied RNG so sessions are reproducible under a fixed seed.

use rand::Rng;

/// Difficulty tier selecting the corpus and generation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Medium => "MEDIUM",
            Difficulty::High => "HIGH",
        }
    }
}

/// Number of tokens sampled for a Low-tier text.
pub const LOW_WORD_COUNT: usize = 20;
/// Number of sentences concatenated for a Medium-tier text.
pub const MEDIUM_SENTENCE_COUNT: usize = 3;

pub const WORDS: [&str; 72] = [
    "code", "hack", "data", "byte", "node", "java", "ruby", "perl", "bash", "root", "user",
    "sudo", "grep", "echo", "ping", "host", "bios", "cmos", "ipv4", "ipv6", "html", "css",
    "json", "ajax", "soap", "rest", "api", "sdk", "ide", "gui", "cli", "ssh", "ssl", "tls",
    "key", "map", "set", "get", "put", "del", "void", "null", "int", "char", "bool", "long",
    "float", "double", "if", "else", "for", "while", "do", "switch", "case", "break",
    "return", "try", "catch", "throw", "final", "static", "public", "class", "import",
    "from", "export", "const", "let", "var", "async", "await",
];

pub const SENTENCES: [&str; 14] = [
    "The quick brown fox jumps over the lazy dog.",
    "To be or not to be, that is the question.",
    "All your base are belong to us.",
    "Hello, world! Welcome to the matrix.",
    "Function execution context implies stack frame.",
    "Recursive algorithms scale logarithmically.",
    "Distributed systems require consensus protocols.",
    "Cybersecurity analysts monitor network traffic.",
    "Artificial intelligence is transforming the landscape of modern computing.",
    "Deep learning models require vast amounts of labeled data for training.",
    "Quantum superposition allows particles to exist in multiple states simultaneously.",
    "Blockchain technology enables decentralized and immutable ledger systems.",
    "Cloud computing provides scalable infrastructure for global applications.",
    "Always code as if the guy who ends up maintaining your code will be a violent psychopath who knows where you live.",
];

pub const SNIPPETS: [&str; 9] = [
    "function debounce(func, wait) { let timeout; return function(...args) { clearTimeout(timeout); timeout = setTimeout(() => func.apply(this, args), wait); }; }",
    "SELECT * FROM users WHERE status = 'active' AND last_login > DATE_SUB(NOW(), INTERVAL 7 DAY);",
    "<div className='container' style={{ display: 'flex' }}>Content</div>",
    "git commit -m 'Refactor authentication middleware' --no-verify",
    "sudo apt-get update && sudo apt-get install -y python3-pip",
    "const memoize = (fn) => { const cache = {}; return (...args) => { const key = JSON.stringify(args); return cache[key] || (cache[key] = fn(...args)); }; };",
    "docker run -d -p 80:80 --name webserver nginx:latest",
    "margin: 0 auto; width: 100%; max-width: 1200px; display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
    "import { useState, useEffect } from 'react'; export default function App() { const [count, setCount] = useState(0); return <button onClick={() => setCount(c => c + 1)}>{count}</button>; }",
];

/// Glyph set for the typing page's falling background particles.
pub const MATRIX_GLYPHS: [char; 14] =
    ['{', '}', '<', '>', '/', ';', '#', '0', '1', '[', ']', '*', '?', '$'];

/// Build a reference text for the given tier.
///
/// Low: 20 random tokens. Medium: 3 random sentences. High: one snippet.
pub fn generate_text<R: Rng>(tier: Difficulty, rng: &mut R) -> String {
    match tier {
        Difficulty::Low => {
            let words: Vec<&str> = (0..LOW_WORD_COUNT)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            words.join(" ")
        }
        Difficulty::Medium => {
            let sentences: Vec<&str> = (0..MEDIUM_SENTENCE_COUNT)
                .map(|_| SENTENCES[rng.random_range(0..SENTENCES.len())])
                .collect();
            sentences.join(" ")
        }
        Difficulty::High => SNIPPETS[rng.random_range(0..SNIPPETS.len())].to_string(),
    }
}
