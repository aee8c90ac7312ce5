use enough::Stop;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::tga::{self, Tga};

/// Builder for a decode with resource limits and cancellation.
///
/// [`Tga::from_bytes`] is the shorthand for an unlimited, uncancellable
/// decode.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or buffers exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, checking `stop` between stages and during RLE unpacking.
    pub fn decode(self, stop: impl Stop) -> Result<Tga, TgaError> {
        tga::decode(self.data, self.limits, &stop)
    }
}
