// Module exports for models

pub mod calendar;
pub mod locale;
pub mod settings;
pub mod text_style;
