pub mod experience;
pub mod links;
pub mod profile;
pub mod project;
pub mod search;
pub mod seed;
pub mod skill;
