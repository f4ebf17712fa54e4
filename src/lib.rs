// Textbook RSA teaching tool
// Core arithmetic lives in `rsa`; the console shell in `ui` drives it.

pub mod rsa;
pub mod ui;
pub mod util;
