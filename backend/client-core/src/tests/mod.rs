mod analysis;
mod page;
mod paths;
mod theme;
