pub mod content_type;

pub use content_type::json_content_type;
