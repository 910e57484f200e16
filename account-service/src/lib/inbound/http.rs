pub mod controller;
pub mod controllers;
pub mod handlers;
pub mod router;
pub mod validation;
