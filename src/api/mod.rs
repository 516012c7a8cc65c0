pub mod analyze;
pub mod color_input;
pub mod colors;
pub mod delta_e;
pub mod mix;

pub use analyze::{handle_analyze, AnalyzeResponse, MatchInfo, __path_handle_analyze};
pub use color_input::{BreakdownDto, CmykDto, ColorEntryDto, ColorInput, HslDto, LabDto, RgbDto};
pub use colors::{handle_colors, ColorsResponse, __path_handle_colors};
pub use delta_e::{handle_delta_e, DeltaERequest, DeltaEResponse, __path_handle_delta_e};
pub use mix::{handle_mix, MixPaint, MixRequest, MixResponse, __path_handle_mix};
