mod aggregate;
mod common;
mod engine;
mod insights;
