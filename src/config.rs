pub const BRAND_NAME: &str = "Alina Popova";

#[cfg(debug_assertions)]
pub fn get_casting_endpoint() -> &'static str {
    "http://localhost:3001/api/casting"  // Development relay when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_casting_endpoint() -> &'static str {
    // Apps-Script relay; accepts text/plain bodies.
    "https://script.google.com/macros/s/AKfycbwQk3mPZr8tY2oVhL6dJnXaGCE5uS1fBiD47R9wHqUzNjT0elMv/exec"
}

pub fn get_whatsapp_number() -> &'static str {
    "919510394742"
}
