pub mod achievement;
pub mod contact;
pub mod education;
pub mod email;
pub mod experience;
pub mod project;
pub mod skill;
