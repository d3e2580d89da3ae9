mod catalog_session;
mod navigation;
mod settings_session;
