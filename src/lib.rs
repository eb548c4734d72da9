pub mod configuration;
pub mod controller;
pub mod domain;
pub mod helpers;
pub mod presenter;
pub mod startup;
pub mod store;
pub mod submission_service;
pub mod telemetry;
