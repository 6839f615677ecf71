mod config;
mod layout;
mod navigation;
mod session;
mod timeline;
