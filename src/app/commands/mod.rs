pub mod build;
pub mod enhance;
pub mod history;
pub mod image;
pub mod optimize;
pub mod options;
pub mod suggest;
pub mod template;
pub mod video;
