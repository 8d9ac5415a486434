mod models;
mod properties;
