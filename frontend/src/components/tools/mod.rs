pub mod article;
pub mod background_remover;
pub mod caption_generator;
pub mod file_converter;
pub mod image_converter;
pub mod image_generator;
pub mod pdf_to_text;
pub mod plagiarism;
pub mod seo;
pub mod simple_text;
pub mod text_to_pdf;
