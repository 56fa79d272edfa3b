// App layer: the interactive operator surface around the registry.

pub mod menu;
