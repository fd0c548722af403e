// Identifier generation. Member ids follow the product's `ID:` + six digit
// convention; catalog entities use nanoid.

use rand::Rng;

/// Generate a nanoid-based entity id (plans, prizes, comments).
pub fn generate_id() -> String {
    nanoid::nanoid!()
}

/// Generate a short nanoid of the given length.
pub fn generate_id_with_length(len: usize) -> String {
    nanoid::nanoid!(len)
}

/// Generate a member id: `ID:` followed by six random digits.
pub fn generate_user_id() -> String {
    format!("ID:{}", generate_digits(6))
}

/// A string of `len` random decimal digits.
pub fn generate_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}
