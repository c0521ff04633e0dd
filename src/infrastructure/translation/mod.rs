mod google_translator;
mod identity_translator;
mod translator_factory;

pub use google_translator::GoogleTranslator;
pub use identity_translator::IdentityTranslator;
pub use translator_factory::TranslatorFactory;
