//! AST-based code chunking: one processor per language, a shared traversal
//! and fallback toolkit under `common`, and the engine that dispatches by
//! file extension.

pub mod c;
pub mod common;
pub mod cpp;
pub mod engine;
pub mod go;
pub mod helpers;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

pub use c::CProcessor;
pub use common::{BaseProcessor, LanguageConfig, LanguageProcessor, NodeExtractionRule};
pub use cpp::CppProcessor;
pub use engine::IntelligentChunker;
pub use go::GoProcessor;
pub use helpers::{get_chunk_size, is_language_supported, language_from_extension, supported_languages};
pub use java::JavaProcessor;
pub use javascript::JavaScriptProcessor;
pub use python::PythonProcessor;
pub use rust::RustProcessor;
