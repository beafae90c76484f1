pub mod admission;
pub mod entry;
pub mod no_presentation;
pub mod propagation;
pub mod registry;
pub mod registry_export;
pub mod registry_policies;
pub mod registry_rooms;
pub mod table;
