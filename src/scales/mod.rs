pub mod pitch_class_table;
pub mod scale;
pub mod template;

pub use scale::{generate, Scale};
pub use template::{Mode, ScaleTemplate};
