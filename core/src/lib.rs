pub mod avionics;
pub mod garmin;
pub mod translate;

pub mod error;

pub use error::{CoreError, CoreResult};
pub use translate::workflow::{convert_document, convert_file, convert_str, ConversionSummary};
pub use translate::{ConvertOptions, SpacerMode};
