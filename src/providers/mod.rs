pub mod cloudflare;
pub mod none;
