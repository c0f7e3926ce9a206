use rand::seq::IndexedRandom;

pub const QUOTES: [&str; 10] = [
    "Success is not final, failure is not fatal: It is the courage to continue that counts. – Winston Churchill",
    "The only way to do great work is to love what you do. – Steve Jobs",
    "Don't watch the clock; do what it does. Keep going. – Sam Levenson",
    "The future depends on what you do today. – Mahatma Gandhi",
    "Believe you can and you're halfway there. – Theodore Roosevelt",
    "Start where you are. Use what you have. Do what you can. – Arthur Ashe",
    "You don't have to be great to start, but you have to start to be great. – Zig Ziglar",
    "It always seems impossible until it's done. – Nelson Mandela",
    "Dream big and dare to fail. – Norman Vaughan",
    "Act as if what you do makes a difference. It does. – William James",
];

/// Picks a motivational quote uniformly at random.
pub fn random_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}
