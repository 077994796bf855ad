//! AssetConverter implementations

mod ico_check;
mod svg_ico;

pub use ico_check::IcoCheckConverter;
pub use svg_ico::{encode_ico, render_square, SvgIcoConverter};
