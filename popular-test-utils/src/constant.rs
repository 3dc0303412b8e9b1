/// Plaintext password given to every fixture user.
pub static TEST_PASSWORD: &str = "qwerty123";

pub static TEST_EMAIL_DOMAIN: &str = "example.com";
