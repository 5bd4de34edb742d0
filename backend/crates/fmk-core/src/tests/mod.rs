mod models;
mod sync;
