//! Core domain entities.
//!
//! The service has a single entity, [`ShortUrl`], plus the value types used to
//! create it ([`NewShortUrl`]), edit it ([`ShortUrlPatch`]) and report on it
//! ([`ShortUrlStats`]).

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl, ShortUrlPatch, ShortUrlStats};
