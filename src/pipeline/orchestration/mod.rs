mod classification_service;
mod result_assembler;

pub use classification_service::{ClassificationService, ClassifyRequest};
pub use result_assembler::ResultAssembler;
