//! Raw response payload type.

/// The decoded-but-unvalidated JSON body returned by the remote endpoint.
///
/// May be a mapping, a string, a sequence, or null. No invariants hold
/// beyond "successfully decoded from the transport"; shape recognition is
/// the normalizer's job.
pub type RawResponse = serde_json::Value;
