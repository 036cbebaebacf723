mod config;
mod operators;
mod pipelines;
mod records;
