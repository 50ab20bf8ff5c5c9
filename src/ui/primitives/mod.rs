pub mod text;

pub use text::{Styled, Tone};
