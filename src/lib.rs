//! Post translation via a hosted chat-completion model.
//!
//! ```rust,ignore
//! use post_translator::{config::Config, translator::TranslationService};
//!
//! let service = TranslationService::from_config(&Config::from_env()?);
//! let (is_english, content): (bool, String) = service.translate_content("Hola").await.into();
//! ```

pub mod config;
pub mod error;
pub mod openai;
pub mod translator;
