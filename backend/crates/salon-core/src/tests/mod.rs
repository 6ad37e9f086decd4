mod aggregates;
mod models;
