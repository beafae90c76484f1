pub mod entry;
pub mod no_presentation;
pub mod propagation;
pub mod registry;
pub mod table;
