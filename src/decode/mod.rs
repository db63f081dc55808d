//! Response body decoding
//!
//! The synchronous call path tolerates malformed bodies: the failure is
//! logged and replaced with an empty mapping. Batch resolution decodes
//! strictly and surfaces the parse error instead.

mod json;

pub use json::JsonDecoder;

#[cfg(test)]
mod tests;
