//! Paint-mix recipes
//!
//! [`PaintMixOptimizer`] turns a target LAB color into a recipe of base
//! paints drawn from the reference table.

mod cancel;
mod optimizer;
mod options;
mod paint;
mod result;

pub use cancel::CancelFlag;
pub use optimizer::PaintMixOptimizer;
pub use options::MixOptions;
pub use paint::Paint;
pub use result::{MatchQuality, MixComponent, MixResult};
