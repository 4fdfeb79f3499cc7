pub mod feeds;
pub mod generative;
pub mod sqlite;
pub mod web;
