// Application layer: the interactive front end driving a session.

pub mod menu;
