mod ocr;
mod tesseract;

pub use ocr::{Ocr, OcrRequest, OcrResult};
pub use tesseract::TesseractOcr;
