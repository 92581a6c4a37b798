mod error;
mod logger;
mod renderer;
