mod oneshot;
mod startup;
