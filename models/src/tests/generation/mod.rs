mod builder;
mod request;
