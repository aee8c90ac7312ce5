//! BMP writer for decoded TGA images (internal).
//!
//! Use [`crate::Tga::encode_bmp`].

mod encode;

pub(crate) use encode::{encode_bmp, file_size};
