//! # zentga
//!
//! Truevision TGA decoder with uncompressed TGA and BMP re-encoding.
//!
//! ## Supported Input
//!
//! - Image types 1-3 (indexed, truecolour, grayscale) and their RLE variants 9-11
//! - 8, 16 (A1R5G5B5), 24 and 32 bits per pixel
//! - 24- and 32-bit palettes starting at entry 0
//! - All four scan-line orientations
//! - Optional 26-byte TGA 2.0 footer (offsets and signature are kept)
//!
//! ## Output
//!
//! - TGA: always uncompressed (RLE types are written as their raw
//!   counterpart), always with a footer
//! - BMP: 14-byte file header, BITMAPINFOHEADER, 4-byte colour table entries,
//!   bottom-up rows. Rows are **not** padded, so the result is only a valid
//!   BMP when `width * bytes_per_pixel` is a multiple of 4.
//!
//! ## Non-Goals
//!
//! - RLE compression on output
//! - Colour management, alpha compositing, scaling
//! - Extension-area and developer-directory parsing
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{DecodeRequest, Limits, ScanlineOrder, Tga, TgaInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = TgaInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! // Decode with limits
//! let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
//! let mut tga = DecodeRequest::new(data)
//!     .with_limits(&limits)
//!     .decode(Unstoppable)?;
//!
//! // Normalise orientation and re-encode
//! tga.set_orientation(ScanlineOrder::LeftRightUpDown)?;
//! let tga_bytes = tga.encode_tga()?;
//! let bmp_bytes = tga.encode_bmp()?;
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;

mod bmp;
mod tga;

mod decode;

// Re-exports
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, TgaError};
pub use info::TgaInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::TgaPixel;
pub use pixel::{ChannelOrder, PixelDepth, PixelLayout};
pub use tga::{
    FOOTER_SIGNATURE, FOOTER_SIZE, HEADER_SIZE, ImageType, ScanlineOrder, Tga, TgaFooter,
    TgaHeader,
};
