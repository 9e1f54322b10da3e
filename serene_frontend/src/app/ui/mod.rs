pub mod activities;
pub mod card;
pub mod carousel;
pub mod catalog;
pub mod home;
pub mod modal;
pub mod mood;
pub mod nav;
pub mod settings;
pub mod tabs;
